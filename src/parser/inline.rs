//! Inline rewrites applied to option and prompt text.

use std::sync::LazyLock;

use regex::Regex;

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").expect("Invalid image regex"));

static STANDALONE_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^!\[[^\]]*\]\(([^)]+)\)$").expect("Invalid standalone image regex")
});

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("Invalid inline code regex"));

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("Invalid code fence regex"));

/// Replaces every `![alt](path)` with an `<img>` tag pointing at `path`.
/// The alt text is dropped.
pub fn rewrite_images(text: &str) -> String {
    IMAGE
        .replace_all(text, "<img src='${1}' style='max-width:320px'>")
        .into_owned()
}

pub fn rewrite_inline_code(text: &str) -> String {
    INLINE_CODE
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

pub fn rewrite_code_fences(text: &str) -> String {
    CODE_FENCE
        .replace_all(text, "<pre><code>${1}</code></pre>")
        .into_owned()
}

/// Path of a line that is nothing but an image reference.
pub fn standalone_image(line: &str) -> Option<&str> {
    STANDALONE_IMAGE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Splits off the first image reference: returns its path and the text with
/// that reference removed.
pub fn take_first_image(text: &str) -> Option<(String, String)> {
    let caps = IMAGE.captures(text)?;
    let whole = caps.get(0)?;
    let path = caps.get(1)?.as_str().to_string();

    let mut rest = String::with_capacity(text.len() - whole.len());
    rest.push_str(&text[..whole.start()]);
    rest.push_str(&text[whole.end()..]);

    Some((path, rest))
}

pub fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_rewrite_drops_alt_text() {
        assert_eq!(
            rewrite_images("See ![fig](img/1.png)"),
            "See <img src='img/1.png' style='max-width:320px'>"
        );
    }

    #[test]
    fn test_image_rewrite_handles_many_and_none() {
        assert_eq!(rewrite_images("plain text"), "plain text");
        assert_eq!(
            rewrite_images("![a](x.png) and ![](y.png)"),
            "<img src='x.png' style='max-width:320px'> and <img src='y.png' style='max-width:320px'>"
        );
    }

    #[test]
    fn test_image_path_stops_at_first_paren() {
        assert_eq!(
            rewrite_images("![a](p.png) (note)"),
            "<img src='p.png' style='max-width:320px'> (note)"
        );
    }

    #[test]
    fn test_code_rewrites() {
        assert_eq!(rewrite_inline_code("use `Vec<T>` here"), "use <code>Vec<T></code> here");
        assert_eq!(
            rewrite_code_fences("before\n```rust\nlet x = 1;\n```\nafter"),
            "before\n<pre><code>rust\nlet x = 1;\n</code></pre>\nafter"
        );
    }

    #[test]
    fn test_standalone_and_first_image() {
        assert_eq!(standalone_image("![diagram](img/d.png)"), Some("img/d.png"));
        assert_eq!(standalone_image("see ![diagram](img/d.png)"), None);

        let (path, rest) = take_first_image("look ![a](one.png) then ![b](two.png)").unwrap();
        assert_eq!(path, "one.png");
        assert_eq!(rest, "look  then ![b](two.png)");
        assert!(take_first_image("no images").is_none());
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\nb\r\nc"), "a b c");
    }
}
