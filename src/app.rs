use tracing::debug;

use crate::models::{AppState, Document, Question};
use crate::runtime::{QuestionState, QuizSession};

/// Terminal quiz: one question on screen at a time, graded through the
/// shared [`QuizSession`].
pub struct App {
    pub state: AppState,
    session: QuizSession,
    current_question_index: usize,
    cursor: usize,
    prompt_scroll: usize,
    result_scroll: usize,
}

impl App {
    pub fn with_document(document: Document) -> Self {
        Self {
            state: AppState::Welcome,
            session: QuizSession::new(document),
            current_question_index: 0,
            cursor: 0,
            prompt_scroll: 0,
            result_scroll: 0,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.document().get(self.current_question_index)
    }

    pub fn current_state(&self) -> Option<&QuestionState> {
        self.session.state(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn prompt_scroll(&self) -> usize {
        self.prompt_scroll
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn cursor_down(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn cursor_up(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Scrolls a long prompt; stops at its last line.
    pub fn scroll_prompt_down(&mut self) {
        let lines = self.current_question().map_or(0, |q| {
            q.prompt.lines().count() + usize::from(q.image.is_some())
        });
        let max_scroll = lines.saturating_sub(1);
        self.prompt_scroll = (self.prompt_scroll + 1).min(max_scroll);
    }

    pub fn scroll_prompt_up(&mut self) {
        self.prompt_scroll = self.prompt_scroll.saturating_sub(1);
    }

    pub fn select_at_cursor(&mut self) {
        self.session.select(self.current_question_index, self.cursor);
    }

    pub fn check_current(&mut self) {
        let effects = self.session.on_check(self.current_question_index);
        debug!(question = self.current_question_index, ?effects, "check");
    }

    pub fn reveal_current(&mut self) {
        let effects = self.session.on_reveal(self.current_question_index);
        debug!(question = self.current_question_index, ?effects, "reveal");
    }

    pub fn start_quiz(&mut self) {
        self.state = if self.session.is_empty() {
            AppState::Result
        } else {
            AppState::Quiz
        };
    }

    /// Moves to the next question, or to the results after the last one.
    pub fn next_question(&mut self) {
        if self.current_question_index + 1 >= self.total_questions() {
            self.finish();
        } else {
            self.current_question_index += 1;
            self.cursor = 0;
            self.prompt_scroll = 0;
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_question_index > 0 {
            self.current_question_index -= 1;
            self.cursor = 0;
            self.prompt_scroll = 0;
        }
    }

    pub fn finish(&mut self) {
        self.state = AppState::Result;
        self.result_scroll = 0;
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.session.reset();
        self.current_question_index = 0;
        self.cursor = 0;
        self.prompt_scroll = 0;
        self.result_scroll = 0;
    }
}
