pub mod assignment;
pub mod error;
pub mod persistence;
pub mod prompt;
pub mod session;
pub mod summary;
pub mod validation;

pub use assignment::{Assignment, Category, FORMATIVE_QUOTA, SUMMATIVE_QUOTA, UnknownCategory};
pub use error::{EntryError, NumericField};
pub use persistence::{
    PersistenceError, PersistenceResult, load_grades_from_csv, load_summary_from_json,
    read_grades_csv, save_grades_to_csv, save_summary_to_json, write_grades_csv,
};
pub use prompt::{EntryPrompt, PendingField, PromptOutcome};
pub use session::{GradeSession, QUOTA_TOLERANCE, SessionState};
pub use summary::{GPA_SCALE, GradeStatus, GradeSummary, PASS_RATIO};
