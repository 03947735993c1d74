use crate::assignment::{Assignment, Category, FORMATIVE_QUOTA, SUMMATIVE_QUOTA};
use crate::session::QUOTA_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of a category's quota that must be earned to pass it.
pub const PASS_RATIO: f64 = 0.5;
pub const GPA_SCALE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeStatus {
    #[serde(rename = "PASSED")]
    Passed,
    #[serde(rename = "FAILED")]
    Failed,
}

impl GradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeStatus::Passed => "PASSED",
            GradeStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for GradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub formative_total: f64,
    pub summative_total: f64,
    pub total_grade: f64,
    pub gpa_points: f64,
    pub formative_passed: bool,
    pub summative_passed: bool,
    pub status: GradeStatus,
    pub entries: Vec<Assignment>,
}

impl GradeSummary {
    pub fn from_entries(entries: &[Assignment]) -> Self {
        let formative_total = category_total(entries, Category::Formative);
        let summative_total = category_total(entries, Category::Summative);
        let total_grade = formative_total + summative_total;
        let gpa_points = (total_grade / 100.0) * GPA_SCALE;

        let formative_passed = meets_pass_threshold(formative_total, Category::Formative);
        let summative_passed = meets_pass_threshold(summative_total, Category::Summative);
        let status = if formative_passed && summative_passed {
            GradeStatus::Passed
        } else {
            GradeStatus::Failed
        };

        Self {
            formative_total,
            summative_total,
            total_grade,
            gpa_points,
            formative_passed,
            summative_passed,
            status,
            entries: entries.to_vec(),
        }
    }

    pub fn category_total(&self, category: Category) -> f64 {
        match category {
            Category::Formative => self.formative_total,
            Category::Summative => self.summative_total,
        }
    }

    pub fn to_cli_summary(&self) -> String {
        let lines = [
            "--- RESULTS ---".to_string(),
            format!(
                "Total Formative: {:.2} / {:.0}",
                self.formative_total, FORMATIVE_QUOTA
            ),
            format!(
                "Total Summative: {:.2} / {:.0}",
                self.summative_total, SUMMATIVE_QUOTA
            ),
            "****************".to_string(),
            format!("Total Grade: {:.2} / 100", self.total_grade),
            format!("GPA: {:.4}", self.gpa_points),
            format!("Status: {}", self.status),
        ];
        lines.join("\n")
    }
}

fn category_total(entries: &[Assignment], category: Category) -> f64 {
    entries
        .iter()
        .filter(|entry| entry.category == category)
        .fold(0.0, |total, entry| total + entry.weighted_score())
}

fn meets_pass_threshold(total: f64, category: Category) -> bool {
    total >= PASS_RATIO * category.quota() - QUOTA_TOLERANCE
}
