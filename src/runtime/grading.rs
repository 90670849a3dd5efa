use std::collections::BTreeSet;
use std::fmt;

use crate::models::Question;

/// How the option controls of a question behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Mutually exclusive, radio-button style.
    Single,
    /// Independently toggleable, checkbox style.
    Multi,
}

impl ControlKind {
    /// Multi-select iff two or more options are marked correct.
    pub fn for_question(question: &Question) -> Self {
        if question.correct_count() > 1 {
            Self::Multi
        } else {
            Self::Single
        }
    }
}

/// Result of grading a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Correct => "Correct!",
            Outcome::Incorrect => "Incorrect.",
        }
    }

    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Exact set match between the selection and the options marked correct.
/// An empty selection on a question with no correct option is `Correct`.
pub fn grade(question: &Question, selected: &BTreeSet<usize>) -> Outcome {
    let correct: BTreeSet<usize> = question.correct_indices().into_iter().collect();
    if *selected == correct {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    }
}
