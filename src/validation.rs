use crate::assignment::Category;
use crate::error::{EntryError, NumericField};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

pub fn parse_name(input: &str) -> Result<String, EntryError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(EntryError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn parse_category(input: &str) -> Result<Category, EntryError> {
    input
        .parse::<Category>()
        .map_err(|_| EntryError::InvalidCategory(input.trim().to_string()))
}

pub fn parse_score(input: &str) -> Result<f64, EntryError> {
    let score = parse_number(input, NumericField::Score)?;
    check_score(score)?;
    Ok(score)
}

pub fn parse_weight(input: &str) -> Result<f64, EntryError> {
    let weight = parse_number(input, NumericField::Weight)?;
    check_weight(weight)?;
    Ok(weight)
}

pub(crate) fn check_score(score: f64) -> Result<(), EntryError> {
    if !score.is_finite() {
        return Err(EntryError::NotANumber {
            field: NumericField::Score,
        });
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(EntryError::OutOfRange {
            field: NumericField::Score,
        });
    }
    Ok(())
}

pub(crate) fn check_weight(weight: f64) -> Result<(), EntryError> {
    if !weight.is_finite() {
        return Err(EntryError::NotANumber {
            field: NumericField::Weight,
        });
    }
    if weight <= 0.0 {
        return Err(EntryError::OutOfRange {
            field: NumericField::Weight,
        });
    }
    Ok(())
}

// "nan" and "inf" parse as f64 but are not usable grades.
fn parse_number(input: &str, field: NumericField) -> Result<f64, EntryError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EntryError::NotANumber { field }),
    }
}
