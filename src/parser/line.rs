//! Line classification for the question scanner.

use std::sync::LazyLock;

use regex::Regex;

/// A level-3 heading opens a question.
const HEADING_PREFIX: &str = "### ";

/// Navigation anchor placed after each answer block.
const TERMINATOR_PREFIX: &str = "**[⬆ Back to Top]";

static CHOICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[([xX ])\] ?(.*)$").expect("Invalid choice regex"));

/// What a single trimmed source line means to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Heading(&'a str),
    Choice { marked: bool, text: &'a str },
    Terminator,
    Blank,
    Prose(&'a str),
}

pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return Line::Blank;
    }

    if let Some(prompt) = line.strip_prefix(HEADING_PREFIX) {
        return Line::Heading(prompt.trim());
    }

    if line.starts_with(TERMINATOR_PREFIX) {
        return Line::Terminator;
    }

    match CHOICE.captures(line) {
        Some(caps) => {
            let marker = caps.get(1).map_or("", |m| m.as_str());
            let text = caps.get(2).map_or("", |m| m.as_str());
            Line::Choice {
                marked: marker.eq_ignore_ascii_case("x"),
                text: text.trim(),
            }
        }
        None => Line::Prose(line),
    }
}
