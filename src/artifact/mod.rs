//! Renders a parsed document into a file-ready artifact.
//!
//! The HTML page embeds the document as JSON inside a
//! `<script type="application/json" id="quiz-data">` element tagged with
//! [`EMBED_VERSION`]; the page's runtime reads it back with `JSON.parse`.

use crate::error::QuizError;
use crate::models::Document;

/// Version of the embedded-data contract between the page and its runtime.
pub const EMBED_VERSION: u32 = 1;

const TEMPLATE: &str = include_str!("template.html");

/// Kind of artifact written by the build step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Self-contained interactive page.
    #[default]
    Html,
    /// The parsed document alone.
    Json,
}

#[derive(Debug, Clone)]
pub struct HtmlOptions {
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Quiz".to_string(),
        }
    }
}

/// Serializes the document for embedding inside a `<script>` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, so they are written as
/// `\u003c`, `\u003e` and `\u0026`. The payload then holds no markup the
/// HTML tokenizer could act on: no closing tag and no `<!--` escape.
pub fn embed_json(document: &Document) -> Result<String, QuizError> {
    let json = serde_json::to_string(document)?;
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }
    Ok(escaped)
}

pub fn render_html(document: &Document, options: &HtmlOptions) -> Result<String, QuizError> {
    let data = embed_json(document)?;
    let title = html_escape::encode_text(&options.title);
    let version = EMBED_VERSION.to_string();
    let fill = |part: &str| {
        part.replace("{{TITLE}}", &title)
            .replace("{{VERSION}}", &version)
    };

    let page = match TEMPLATE.split_once("{{DATA}}") {
        Some((head, tail)) => format!("{}{}{}", fill(head), data, fill(tail)),
        None => fill(TEMPLATE),
    };
    Ok(page)
}

pub fn render_json(document: &Document, pretty: bool) -> Result<String, QuizError> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}
