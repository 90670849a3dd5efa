//! Markdown question scanner.
//!
//! The scanner is a fold over source lines with two modes: outside a
//! question, or inside a question's answer block. Lines that fit neither a
//! heading, an answer choice nor the block terminator are skipped, so
//! arbitrary prose around the quiz is tolerated.

mod inline;
mod line;

use tracing::debug;

use crate::models::{AnswerOption, Document, Question};

use line::{Line, classify};

/// Rule-set applied to text inside an answer block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Options only; prose inside a block is ignored.
    #[default]
    Classic,
    /// Also folds block prose and images into the prompt, attaches
    /// standalone images to the preceding option and renders code spans.
    Extended,
}

/// Parses `source` with the classic dialect. Never fails.
pub fn parse(source: &str) -> Document {
    Parser::new(Dialect::Classic).parse(source)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    dialect: Dialect,
}

enum Scan {
    Outside,
    Inside(Draft),
}

/// Question under construction.
struct Draft {
    question: Question,
    prose: Vec<String>,
}

impl Draft {
    fn new(prompt: &str) -> Self {
        Self {
            question: Question::new(prompt),
            prose: Vec::new(),
        }
    }
}

impl Parser {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn parse(&self, source: &str) -> Document {
        let (mut questions, scan) =
            source
                .lines()
                .fold((Vec::new(), Scan::Outside), |(mut done, scan), raw| {
                    let next = self.step(scan, classify(raw), &mut done);
                    (done, next)
                });

        if let Scan::Inside(draft) = scan {
            questions.push(self.finish(draft));
        }

        Document::new(questions)
    }

    fn step(&self, scan: Scan, line: Line<'_>, done: &mut Vec<Question>) -> Scan {
        match (scan, line) {
            (Scan::Outside, Line::Heading(prompt)) => Scan::Inside(Draft::new(prompt)),
            (Scan::Outside, _) => Scan::Outside,
            (Scan::Inside(draft), Line::Heading(prompt)) => {
                done.push(self.finish(draft));
                Scan::Inside(Draft::new(prompt))
            }
            (Scan::Inside(draft), Line::Terminator) => {
                done.push(self.finish(draft));
                Scan::Outside
            }
            (Scan::Inside(mut draft), Line::Choice { marked, text }) => {
                draft.question.options.push(self.option(text, marked));
                Scan::Inside(draft)
            }
            (Scan::Inside(mut draft), Line::Prose(text)) if self.dialect == Dialect::Extended => {
                match (inline::standalone_image(text), draft.question.options.last_mut()) {
                    (Some(path), Some(option)) => option.image = Some(path.to_string()),
                    _ => draft.prose.push(text.to_string()),
                }
                Scan::Inside(draft)
            }
            (inside, _) => inside,
        }
    }

    fn option(&self, text: &str, correct: bool) -> AnswerOption {
        let mut text = inline::rewrite_images(text);
        if self.dialect == Dialect::Extended {
            text = inline::rewrite_inline_code(&text);
        }
        AnswerOption::new(inline::single_line(&text), correct)
    }

    fn finish(&self, draft: Draft) -> Question {
        let Draft {
            mut question,
            prose,
        } = draft;

        if self.dialect == Dialect::Extended {
            let mut prompt = question.prompt;
            if !prose.is_empty() {
                let joined = prose.join("\n");
                let details = match inline::take_first_image(&joined) {
                    Some((path, rest)) => {
                        question.image = Some(path);
                        rest.trim().to_string()
                    }
                    None => joined,
                };
                if !details.is_empty() {
                    prompt.push_str("\n\n");
                    prompt.push_str(&details);
                }
            }
            question.prompt = inline::rewrite_inline_code(&inline::rewrite_code_fences(&prompt));
        }

        debug!(
            prompt = %question.prompt,
            options = question.options.len(),
            correct = question.correct_count(),
            "parsed question"
        );
        question
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options(question: &Question) -> Vec<(&str, bool)> {
        question
            .options
            .iter()
            .map(|option| (option.text.as_str(), option.correct))
            .collect()
    }

    #[test]
    fn test_single_question_with_terminator() {
        let document = parse("### Is 2+2=4?\n- [x] Yes\n- [ ] No\n**[⬆ Back to Top]**");

        assert_eq!(document.len(), 1);
        assert_eq!(document[0].prompt, "Is 2+2=4?");
        assert_eq!(options(&document[0]), vec![("Yes", true), ("No", false)]);
        assert_eq!(document[0].image, None);
    }

    #[test]
    fn test_question_without_options_is_kept() {
        let document = parse("### Empty one\n\nSome prose.\n### Second\n- [ ] a");

        assert_eq!(document.len(), 2);
        assert!(document[0].options.is_empty());
        assert_eq!(document[0].prompt, "Empty one");
        assert_eq!(options(&document[1]), vec![("a", false)]);
    }

    #[test]
    fn test_options_before_any_heading_are_ignored() {
        let document = parse("- [x] stray\n- [ ] also stray\n# Title\n### Real\n- [x] kept");

        assert_eq!(document.len(), 1);
        assert_eq!(document[0].prompt, "Real");
        assert_eq!(options(&document[0]), vec![("kept", true)]);
    }

    #[test]
    fn test_options_after_terminator_are_ignored() {
        let source = "### Q\n- [x] in\n**[⬆ Back to Top](#top)**\n- [x] out\n";
        let document = parse(source);

        assert_eq!(document.len(), 1);
        assert_eq!(options(&document[0]), vec![("in", true)]);
    }

    #[test]
    fn test_blank_and_prose_lines_do_not_end_a_block() {
        let source = "### Q\n- [ ] one\n\n   \nnote: read carefully\n- [ ] two\n- [] typo\n- [X] three";
        let document = parse(source);

        assert_eq!(
            options(&document[0]),
            vec![("one", false), ("two", false), ("three", true)]
        );
    }

    #[test]
    fn test_order_and_correctness_are_preserved() {
        let source = "\
Intro text
### First
- [ ] a
- [x] b
- [x] c
**[⬆ Back to Top]**

### Second
- [x] d
### Third
";
        let document = parse(source);
        let prompts: Vec<&str> = document.iter().map(|q| q.prompt.as_str()).collect();

        assert_eq!(prompts, vec!["First", "Second", "Third"]);
        assert_eq!(options(&document[0]), vec![("a", false), ("b", true), ("c", true)]);
        assert_eq!(document[0].correct_indices(), vec![1, 2]);
        assert_eq!(options(&document[1]), vec![("d", true)]);
        assert!(document[2].options.is_empty());
    }

    #[test]
    fn test_option_image_is_rewritten() {
        let document = parse("### Pick\n- [ ] See ![fig](img/1.png)");
        let text = &document[0].options[0].text;

        assert_eq!(text, "See <img src='img/1.png' style='max-width:320px'>");
        assert!(!text.contains("![fig]"));
        assert!(!text.contains("fig"));
    }

    #[test]
    fn test_prompt_is_not_rewritten_in_classic_dialect() {
        let document = parse("### What is ![x](a.png) `code`?\n- [x] it");

        assert_eq!(document[0].prompt, "What is ![x](a.png) `code`?");
    }

    #[test]
    fn test_crlf_input() {
        let document = parse("### Q\r\n- [x] Yes\r\n- [ ] No\r\n");

        assert_eq!(options(&document[0]), vec![("Yes", true), ("No", false)]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let source = "### A\n- [x] 1\n### B\n- [ ] 2\n- [x] ![i](p.png)\n";

        assert_eq!(parse(source), parse(source));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("just prose\n- [x] no heading").is_empty());
    }

    #[test]
    fn test_extended_folds_prose_into_prompt() {
        let source = "\
### What does this print?
```rust
println!(\"{}\", 1);
```
- [x] `1`
- [ ] nothing
**[⬆ Back to Top]**";
        let document = Parser::new(Dialect::Extended).parse(source);
        let question = &document[0];

        assert_eq!(
            question.prompt,
            "What does this print?\n\n<pre><code>rust\nprintln!(\"{}\", 1);\n</code></pre>"
        );
        assert_eq!(options(question), vec![("<code>1</code>", true), ("nothing", false)]);
    }

    #[test]
    fn test_extended_images() {
        let source = "\
### Which diagram?
![question](img/q.png)
Look closely.
- [ ] First
![first](img/a.png)
- [x] Second";
        let document = Parser::new(Dialect::Extended).parse(source);
        let question = &document[0];

        assert_eq!(question.image.as_deref(), Some("img/q.png"));
        assert_eq!(question.prompt, "Which diagram?\n\nLook closely.");
        assert_eq!(question.options[0].image.as_deref(), Some("img/a.png"));
        assert_eq!(question.options[1].image, None);
    }

    #[test]
    fn test_extended_image_only_prose_leaves_prompt_alone() {
        let document = Parser::new(Dialect::Extended).parse("### Q\n![only](o.png)\n- [x] a");

        assert_eq!(document[0].prompt, "Q");
        assert_eq!(document[0].image.as_deref(), Some("o.png"));
    }
}
