use super::{PersistenceError, PersistenceResult};
use crate::assignment::{Assignment, Category};
use crate::summary::GradeSummary;
use crate::validation;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

pub const DEFAULT_CSV_PATH: &str = "grades.csv";

#[derive(Serialize, Deserialize)]
struct GradeCsvRecord {
    #[serde(rename = "Assignment")]
    assignment: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Grade")]
    grade: String,
    #[serde(rename = "Weight")]
    weight: String,
}

impl From<&Assignment> for GradeCsvRecord {
    fn from(entry: &Assignment) -> Self {
        Self {
            assignment: entry.name.clone(),
            category: entry.category.as_str().to_string(),
            grade: format_score(entry.score),
            weight: format_weight(entry.weight),
        }
    }
}

impl GradeCsvRecord {
    fn into_assignment(self, row: usize) -> PersistenceResult<Assignment> {
        let invalid = |field: &str, value: &str, reason: String| {
            PersistenceError::InvalidData(format!("row {row}: {field} '{value}': {reason}"))
        };
        let name = validation::parse_name(&self.assignment)
            .map_err(|e| invalid("Assignment", &self.assignment, e.to_string()))?;
        let category = self
            .category
            .parse::<Category>()
            .map_err(|e| invalid("Category", &self.category, e.to_string()))?;
        let score = validation::parse_score(&self.grade)
            .map_err(|e| invalid("Grade", &self.grade, e.to_string()))?;
        let weight = validation::parse_weight(&self.weight)
            .map_err(|e| invalid("Weight", &self.weight, e.to_string()))?;
        Ok(Assignment::new(name, category, score, weight))
    }
}

/// Writes the header and one row per entry, in order.
pub fn write_grades_csv<W: Write>(entries: &[Assignment], writer: W) -> PersistenceResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if entries.is_empty() {
        // serialize() only emits the header alongside the first record
        writer.write_record(["Assignment", "Category", "Grade", "Weight"])?;
    }
    for entry in entries {
        writer.serialize(GradeCsvRecord::from(entry))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_grades_csv<R: Read>(reader: R) -> PersistenceResult<Vec<Assignment>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    for (idx, record) in reader.deserialize::<GradeCsvRecord>().enumerate() {
        let record = record?;
        entries.push(record.into_assignment(idx + 1)?);
    }
    Ok(entries)
}

/// Truncates any existing file at `path`.
pub fn save_grades_to_csv<P: AsRef<Path>>(
    entries: &[Assignment],
    path: P,
) -> PersistenceResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_grades_csv(entries, file)?;
    info!(path = %path.display(), rows = entries.len(), "grades exported");
    Ok(())
}

pub fn load_grades_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Assignment>> {
    let file = File::open(path)?;
    read_grades_csv(file)
}

pub fn save_summary_to_json<P: AsRef<Path>>(
    summary: &GradeSummary,
    path: P,
) -> PersistenceResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, summary)?;
    info!(path = %path.display(), "summary snapshot written");
    Ok(())
}

pub fn load_summary_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<GradeSummary> {
    let file = File::open(path)?;
    let summary = serde_json::from_reader(file)?;
    Ok(summary)
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        (score as i64).to_string()
    } else {
        score.to_string()
    }
}

fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{weight:.1}")
    } else {
        weight.to_string()
    }
}
