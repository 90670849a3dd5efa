mod document;
mod question;

pub use document::Document;
pub use question::{AnswerOption, Question};

/// Top-level screen of the terminal quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
