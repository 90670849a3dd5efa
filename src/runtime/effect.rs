use super::Outcome;

/// Visual mark placed on an option once its question is graded or revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Correct,
    Incorrect,
}

/// Render instruction produced by a runtime action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    DisableControls,
    MarkOption { option: usize, mark: Mark },
    ShowOutcome(Outcome),
}
