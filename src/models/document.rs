use std::ops::Index;
use std::slice;

use serde::{Deserialize, Serialize};

use super::Question;

/// Ordered, immutable sequence of parsed questions.
///
/// Positional index is the only identity a question has; the runtime binds
/// rendered controls back to questions through it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    questions: Vec<Question>,
}

impl Document {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Total number of options across every question.
    pub fn option_count(&self) -> usize {
        self.questions.iter().map(|q| q.options.len()).sum()
    }
}

impl From<Vec<Question>> for Document {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl Index<usize> for Document {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Question;
    type IntoIter = slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerOption;

    #[test]
    fn test_serializes_as_plain_array() {
        let mut question = Question::new("Is 2+2=4?");
        question.options.push(AnswerOption::new("Yes", true));
        question.options.push(AnswerOption::new("No", false));
        let document = Document::new(vec![question]);

        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(
            json,
            r#"[{"question":"Is 2+2=4?","options":[{"text":"Yes","correct":true},{"text":"No","correct":false}]}]"#
        );
    }

    #[test]
    fn test_image_fields_are_emitted_when_present() {
        let mut question = Question::new("Which?");
        question.image = Some("img/q.png".to_string());
        let mut option = AnswerOption::new("A", false);
        option.image = Some("img/a.png".to_string());
        question.options.push(option);

        let json = serde_json::to_string(&Document::new(vec![question])).unwrap();
        assert!(json.contains(r#""image":"img/q.png""#));
        assert!(json.contains(r#""image":"img/a.png""#));
    }

    #[test]
    fn test_option_count_sums_all_questions() {
        let mut first = Question::new("one");
        first.options.push(AnswerOption::new("a", true));
        let mut second = Question::new("two");
        second.options.push(AnswerOption::new("b", false));
        second.options.push(AnswerOption::new("c", true));
        let document = Document::from(vec![first, second, Question::new("three")]);

        assert_eq!(document.len(), 3);
        assert_eq!(document.option_count(), 3);
        assert_eq!(document[1].correct_indices(), vec![1]);
    }
}
