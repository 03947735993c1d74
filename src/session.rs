use crate::assignment::{Assignment, Category};
use crate::error::EntryError;
use crate::summary::GradeSummary;
use crate::validation;
use tracing::{debug, warn};

/// Absorbs floating-point drift in quota and pass-threshold comparisons.
pub const QUOTA_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Accepting,
    Finalized,
}

#[derive(Debug, Clone)]
pub struct GradeSession {
    entries: Vec<Assignment>,
    formative_weight: f64,
    summative_weight: f64,
    state: SessionState,
}

impl Default for GradeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeSession {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            formative_weight: 0.0,
            summative_weight: 0.0,
            state: SessionState::Accepting,
        }
    }

    pub fn entries(&self) -> &[Assignment] {
        &self.entries
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn committed_weight(&self, category: Category) -> f64 {
        match category {
            Category::Formative => self.formative_weight,
            Category::Summative => self.summative_weight,
        }
    }

    pub fn remaining_quota(&self, category: Category) -> f64 {
        category.quota() - self.committed_weight(category)
    }

    /// Validates and commits one entry.
    ///
    /// A rejected entry leaves the session untouched. `QuotaExceeded` carries
    /// the category quota and what is still available in it.
    pub fn try_add_entry(
        &mut self,
        name: &str,
        category: Category,
        score: f64,
        weight: f64,
    ) -> Result<&Assignment, EntryError> {
        if self.state == SessionState::Finalized {
            return Err(EntryError::SessionFinalized);
        }

        let name = validation::parse_name(name)?;
        validation::check_score(score)?;
        validation::check_weight(weight)?;

        let committed = self.committed_weight(category);
        let quota = category.quota();
        if committed + weight > quota + QUOTA_TOLERANCE {
            let remaining = quota - committed;
            warn!(%category, weight, remaining, "weight exceeds category quota");
            return Err(EntryError::QuotaExceeded {
                category,
                quota,
                remaining,
            });
        }

        match category {
            Category::Formative => self.formative_weight += weight,
            Category::Summative => self.summative_weight += weight,
        }
        debug!(name = %name, %category, score, weight, "entry accepted");
        self.entries.push(Assignment::new(name, category, score, weight));
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Stops accepting entries. Calling it again has no effect.
    pub fn finish(&mut self) {
        if self.state == SessionState::Accepting {
            debug!(entries = self.entries.len(), "session finalized");
            self.state = SessionState::Finalized;
        }
    }

    pub fn finalize(&self) -> GradeSummary {
        GradeSummary::from_entries(&self.entries)
    }
}
