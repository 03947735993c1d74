use crate::assignment::Category;
use crate::error::EntryError;
use crate::session::{GradeSession, SessionState};
use crate::validation;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const BANNER: &str = "--- Student Grade Generator ---";

/// The field the prompt is waiting on, carrying what the pending entry has
/// accepted so far.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingField {
    Name,
    Category {
        name: String,
    },
    Score {
        name: String,
        category: Category,
    },
    Weight {
        name: String,
        category: Category,
        score: f64,
    },
    Continue,
}

impl PendingField {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingField::Name => "Enter Assignment Name: ",
            PendingField::Category { .. } => "Enter Category (FA or SA): ",
            PendingField::Score { .. } => "Enter Grade (0-100): ",
            PendingField::Weight { .. } => "Enter Weight (positive number): ",
            PendingField::Continue => "Add another assignment? (y/n): ",
        }
    }
}

/// How collection stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Declined,
    EndOfInput,
}

pub struct EntryPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> EntryPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Collects entries into `session` until the user declines to continue or
    /// input runs out, then finishes the session.
    pub fn collect(&mut self, session: &mut GradeSession) -> io::Result<PromptOutcome> {
        if session.state() == SessionState::Finalized {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                EntryError::SessionFinalized,
            ));
        }

        let mut pending = PendingField::Name;
        let mut line = String::new();

        let outcome = loop {
            write!(self.output, "{}", pending.prompt())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // the pending entry, if any, is dropped
                debug!(?pending, "input closed");
                break PromptOutcome::EndOfInput;
            }
            let raw = line.trim();

            pending = match pending {
                PendingField::Name => match validation::parse_name(raw) {
                    Ok(name) => PendingField::Category { name },
                    Err(err) => {
                        writeln!(self.output, "{err}")?;
                        PendingField::Name
                    }
                },
                PendingField::Category { name } => match validation::parse_category(raw) {
                    Ok(category) => PendingField::Score { name, category },
                    Err(err) => {
                        writeln!(self.output, "{err}")?;
                        PendingField::Category { name }
                    }
                },
                PendingField::Score { name, category } => match validation::parse_score(raw) {
                    Ok(score) => PendingField::Weight {
                        name,
                        category,
                        score,
                    },
                    Err(err) => {
                        writeln!(self.output, "{err}")?;
                        PendingField::Score { name, category }
                    }
                },
                PendingField::Weight {
                    name,
                    category,
                    score,
                } => match validation::parse_weight(raw) {
                    Ok(weight) => match session.try_add_entry(&name, category, score, weight) {
                        Ok(_) => PendingField::Continue,
                        Err(err) => {
                            writeln!(self.output, "{err}")?;
                            if err.abandons_entry() {
                                PendingField::Name
                            } else {
                                PendingField::Weight {
                                    name,
                                    category,
                                    score,
                                }
                            }
                        }
                    },
                    Err(err) => {
                        writeln!(self.output, "{err}")?;
                        PendingField::Weight {
                            name,
                            category,
                            score,
                        }
                    }
                },
                PendingField::Continue => {
                    if raw.eq_ignore_ascii_case("y") {
                        PendingField::Name
                    } else {
                        break PromptOutcome::Declined;
                    }
                }
            };
        };

        session.finish();
        Ok(outcome)
    }
}
