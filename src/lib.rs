//! # md-quiz
//!
//! Turns a markdown list of questions into an interactive quiz.
//!
//! Questions are level-3 headings followed by checkbox options; checked boxes
//! mark the correct answers:
//!
//! ```markdown
//! ### Is 2+2=4?
//! - [x] Yes
//! - [ ] No
//! **[⬆ Back to Top]**
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use md_quiz::{Config, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // README.md -> quiz.html
//!     let report = md_quiz::build(&Config::default())?;
//!     println!("Wrote {}", report.output.display());
//!     Ok(())
//! }
//! ```
//!
//! Or take the quiz in the terminal:
//!
//! ```rust,no_run
//! use md_quiz::{Dialect, Quiz};
//!
//! let quiz = Quiz::from_markdown("README.md", Dialect::Classic).expect("Failed to load quiz");
//! quiz.run().expect("Terminal failure");
//! ```

mod app;
pub mod artifact;
mod config;
mod data;
mod error;
mod models;
pub mod parser;
pub mod runtime;
pub mod terminal;
mod ui;

use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;

pub use app::App;
pub use artifact::{Format, HtmlOptions, render_html, render_json};
pub use config::{Config, DEFAULT_HTML_OUTPUT, DEFAULT_JSON_OUTPUT, DEFAULT_TITLE};
pub use data::{DEFAULT_INPUT_PATH, load_document, read_source, write_artifact};
pub use error::QuizError;
pub use models::{AnswerOption, AppState, Document, Question};
pub use parser::{Dialect, Parser, parse};
pub use runtime::{ControlKind, Effect, Mark, Outcome, Phase, QuizSession};

/// What a build run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: PathBuf,
    pub questions: usize,
    pub options: usize,
}

/// Reads the configured markdown file, renders the artifact and writes it.
pub fn build(config: &Config) -> Result<Report, QuizError> {
    info!(
        input = %config.input.display(),
        dialect = ?config.dialect,
        "parsing questions"
    );
    let document = load_document(&config.input, &Parser::new(config.dialect))?;

    let contents = match config.format {
        Format::Html => render_html(
            &document,
            &HtmlOptions {
                title: config.title.clone(),
            },
        )?,
        Format::Json => render_json(&document, !config.compact)?,
    };

    let output = config.output_path();
    write_artifact(&output, &contents)?;
    info!(
        output = %output.display(),
        questions = document.len(),
        options = document.option_count(),
        "quiz written"
    );

    Ok(Report {
        output,
        questions: document.len(),
        options: document.option_count(),
    })
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(document: Document) -> Self {
        Self {
            app: App::with_document(document),
        }
    }

    /// Load a quiz from a markdown file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use md_quiz::{Dialect, Quiz};
    ///
    /// let quiz = Quiz::from_markdown("README.md", Dialect::Extended).expect("Failed to load quiz");
    /// ```
    pub fn from_markdown<P: AsRef<Path>>(path: P, dialect: Dialect) -> Result<Self, QuizError> {
        let document = load_document(path, &Parser::new(dialect))?;
        Ok(Self::new(document))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::TerminalSession::enter()?;
        run_event_loop(&mut term, &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::TerminalSession, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.select_at_cursor(),
        KeyCode::PageDown | KeyCode::Char('d') => app.scroll_prompt_down(),
        KeyCode::PageUp | KeyCode::Char('u') => app.scroll_prompt_up(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.check_current(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reveal_current(),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l') => app.next_question(),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Char('f') | KeyCode::Char('F') => app.finish(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SOURCE: &str = "### Is 2+2=4?\n- [x] Yes\n- [ ] No\n**[⬆ Back to Top]**\n";

    #[test]
    fn test_build_writes_html() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("README.md");
        fs::write(&input, SOURCE).unwrap();
        let config = Config {
            input,
            output: Some(dir.path().join("quiz.html")),
            ..Config::default()
        };

        let report = build(&config).unwrap();

        assert_eq!(report.questions, 1);
        assert_eq!(report.options, 2);
        let page = fs::read_to_string(&report.output).unwrap();
        assert!(page.contains(r#""question":"Is 2+2=4?""#));
    }

    #[test]
    fn test_build_reports_missing_input() {
        let dir = tempdir().unwrap();
        let config = Config {
            input: dir.path().join("missing.md"),
            output: Some(dir.path().join("quiz.html")),
            ..Config::default()
        };

        assert!(matches!(build(&config), Err(QuizError::Read { .. })));
        assert!(!dir.path().join("quiz.html").exists());
    }

    #[test]
    fn test_quiz_keys_drive_the_session() {
        let mut app = App::with_document(parse(SOURCE));

        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Quiz);
        handle_input(&mut app, KeyCode::Char(' '));
        handle_input(&mut app, KeyCode::Char('c'));

        let state = app.current_state().unwrap();
        assert_eq!(state.outcome(), Some(Outcome::Correct));

        handle_input(&mut app, KeyCode::Char('f'));
        assert_eq!(app.state, AppState::Result);
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }
}
