//! Per-question grading state machine.
//!
//! Every question starts `Unanswered`. Check and Reveal both disable its
//! controls for good; there is no way back. Actions return the render
//! effects they caused, so a front-end only has to apply them.

mod effect;
mod grading;

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{Document, Question};

pub use effect::{Effect, Mark};
pub use grading::{ControlKind, Outcome, grade};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unanswered,
    Checked,
    Revealed,
}

/// Interactive state of one rendered question.
#[derive(Debug, Clone)]
pub struct QuestionState {
    kind: ControlKind,
    phase: Phase,
    selected: BTreeSet<usize>,
    marks: Vec<Option<Mark>>,
    outcome: Option<Outcome>,
}

impl QuestionState {
    fn new(question: &Question) -> Self {
        Self {
            kind: ControlKind::for_question(question),
            phase: Phase::Unanswered,
            selected: BTreeSet::new(),
            marks: vec![None; question.options.len()],
            outcome: None,
        }
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_selected(&self, option: usize) -> bool {
        self.selected.contains(&option)
    }

    pub fn mark(&self, option: usize) -> Option<Mark> {
        self.marks.get(option).copied().flatten()
    }

    /// Outcome message, only present once the question has been checked.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_disabled(&self) -> bool {
        self.phase != Phase::Unanswered
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::DisableControls => {}
            Effect::MarkOption { option, mark } => {
                if let Some(slot) = self.marks.get_mut(option) {
                    *slot = Some(mark);
                }
            }
            Effect::ShowOutcome(outcome) => self.outcome = Some(outcome),
        }
    }
}

/// Tally of question states across a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub checked: usize,
    pub correct: usize,
    pub revealed: usize,
}

/// Runtime for a whole document. The document is owned read-only; only the
/// per-question states change.
#[derive(Debug, Clone)]
pub struct QuizSession {
    document: Document,
    states: Vec<QuestionState>,
}

impl QuizSession {
    pub fn new(document: Document) -> Self {
        let states = document.iter().map(QuestionState::new).collect();
        Self { document, states }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, question: usize) -> Option<&QuestionState> {
        self.states.get(question)
    }

    /// Selects an option the way its control would: replaces the selection
    /// for single-select questions, toggles it for multi-select ones.
    /// Returns false when nothing changed.
    pub fn select(&mut self, question: usize, option: usize) -> bool {
        let Some(state) = self.states.get_mut(question) else {
            return false;
        };
        if state.is_disabled() || option >= state.marks.len() {
            return false;
        }

        match state.kind {
            ControlKind::Single => {
                if state.selected.len() == 1 && state.selected.contains(&option) {
                    return false;
                }
                state.selected.clear();
                state.selected.insert(option);
            }
            ControlKind::Multi => {
                if !state.selected.remove(&option) {
                    state.selected.insert(option);
                }
            }
        }
        true
    }

    /// Grades the current selection. A no-op once the question is checked
    /// or revealed.
    pub fn on_check(&mut self, question: usize) -> Vec<Effect> {
        let (Some(data), Some(state)) = (self.document.get(question), self.states.get_mut(question))
        else {
            return Vec::new();
        };
        if state.is_disabled() {
            return Vec::new();
        }

        let outcome = grade(data, &state.selected);
        let mut effects = vec![Effect::DisableControls];
        for (index, option) in data.options.iter().enumerate() {
            if option.correct {
                effects.push(Effect::MarkOption {
                    option: index,
                    mark: Mark::Correct,
                });
            } else if state.selected.contains(&index) {
                effects.push(Effect::MarkOption {
                    option: index,
                    mark: Mark::Incorrect,
                });
            }
        }
        effects.push(Effect::ShowOutcome(outcome));

        for effect in &effects {
            state.apply(*effect);
        }
        state.phase = Phase::Checked;
        debug!(question, ?outcome, selected = ?state.selected, "checked question");

        effects
    }

    /// Replaces the selection with `selection` and checks it. Indices past
    /// the last option are dropped.
    pub fn check_with<I>(&mut self, question: usize, selection: I) -> Vec<Effect>
    where
        I: IntoIterator<Item = usize>,
    {
        match self.states.get_mut(question) {
            Some(state) if !state.is_disabled() => {
                let len = state.marks.len();
                state.selected = selection.into_iter().filter(|index| *index < len).collect();
            }
            _ => return Vec::new(),
        }
        self.on_check(question)
    }

    /// Discloses the correct options without grading. After a check this
    /// only moves the question to `Revealed`; the correct options are already
    /// marked.
    pub fn on_reveal(&mut self, question: usize) -> Vec<Effect> {
        let (Some(data), Some(state)) = (self.document.get(question), self.states.get_mut(question))
        else {
            return Vec::new();
        };

        match state.phase {
            Phase::Revealed => Vec::new(),
            Phase::Checked => {
                state.phase = Phase::Revealed;
                debug!(question, "revealed checked question");
                Vec::new()
            }
            Phase::Unanswered => {
                let mut effects = vec![Effect::DisableControls];
                effects.extend(data.correct_indices().into_iter().map(|option| {
                    Effect::MarkOption {
                        option,
                        mark: Mark::Correct,
                    }
                }));

                for effect in &effects {
                    state.apply(*effect);
                }
                state.phase = Phase::Revealed;
                debug!(question, "revealed question");

                effects
            }
        }
    }

    /// Puts every question back to `Unanswered`, like reloading the page.
    pub fn reset(&mut self) {
        self.states = self.document.iter().map(QuestionState::new).collect();
    }

    pub fn summary(&self) -> Summary {
        self.states.iter().fold(
            Summary {
                total: self.states.len(),
                ..Summary::default()
            },
            |mut summary, state| {
                if state.outcome.is_some() {
                    summary.checked += 1;
                }
                if state.outcome.is_some_and(Outcome::is_correct) {
                    summary.correct += 1;
                }
                if state.phase == Phase::Revealed {
                    summary.revealed += 1;
                }
                summary
            },
        )
    }
}
