//! Flattens the HTML fragments produced by the parser for terminal display.

use std::sync::LazyLock;

use regex::Regex;

static IMG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img src='([^']*)'[^>]*>").expect("Invalid img regex"));

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(code|pre)>").expect("Invalid tag regex"));

pub fn plain_text(markup: &str) -> String {
    let text = IMG.replace_all(markup, "[image: ${1}]");
    TAG.replace_all(&text, "").into_owned()
}
