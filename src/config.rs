use std::path::PathBuf;

use crate::artifact::Format;
use crate::data::DEFAULT_INPUT_PATH;
use crate::parser::Dialect;

pub const DEFAULT_HTML_OUTPUT: &str = "quiz.html";
pub const DEFAULT_JSON_OUTPUT: &str = "docs/quiz.json";
pub const DEFAULT_TITLE: &str = "Quiz";

/// Settings for one build run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Markdown source
    pub input: PathBuf,
    /// Output path; falls back to a per-format default
    pub output: Option<PathBuf>,
    pub format: Format,
    pub dialect: Dialect,
    /// Page title of the HTML artifact
    pub title: String,
    /// Single-line JSON instead of pretty-printed
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: None,
            format: Format::default(),
            dialect: Dialect::default(),
            title: DEFAULT_TITLE.to_string(),
            compact: false,
        }
    }
}

impl Config {
    pub fn output_path(&self) -> PathBuf {
        match (&self.output, self.format) {
            (Some(path), _) => path.clone(),
            (None, Format::Html) => PathBuf::from(DEFAULT_HTML_OUTPUT),
            (None, Format::Json) => PathBuf::from(DEFAULT_JSON_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults_follow_format() {
        let mut config = Config::default();
        assert_eq!(config.output_path(), PathBuf::from("quiz.html"));

        config.format = Format::Json;
        assert_eq!(config.output_path(), PathBuf::from("docs/quiz.json"));

        config.output = Some(PathBuf::from("out/q.json"));
        assert_eq!(config.output_path(), PathBuf::from("out/q.json"));
    }
}
