pub mod bank;
pub mod grader;
pub mod logger;
pub mod models;
pub mod navigator;
pub mod taxonomy;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use bank::{LoadError, QuestionBank};
pub use grader::{PASS_THRESHOLD, ReviewEntry, ScoreReport, is_correct, review, score};
pub use models::{AnswerRecord, Mode, Question, Session};
pub use navigator::{Action, App, EXAM_SIZE, Screen};
pub use taxonomy::{FALLBACK_UNIT, UnitTable};
pub use ui::draw;
pub use utils::truncate_string;
