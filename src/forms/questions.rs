use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::question::NewQuestion;
use crate::domain::types::{AnswerText, CategoryId, Difficulty, QuestionText, TypeConstraintError};
use crate::forms::integer_from_json;

/// Body of `POST /questions`.
///
/// `category` and `difficulty` are kept as raw JSON so that a value of the
/// wrong type can be told apart from a missing one.
#[derive(Debug, Deserialize, Validate)]
pub struct AddQuestionForm {
    #[validate(required, length(min = 1))]
    pub question: Option<String>,
    #[validate(required, length(min = 1))]
    pub answer: Option<String>,
    #[validate(required)]
    pub category: Option<Value>,
    #[validate(required)]
    pub difficulty: Option<Value>,
}

impl AddQuestionForm {
    pub fn from_slice(body: &[u8]) -> Result<Self, AddQuestionFormError> {
        serde_json::from_slice(body).map_err(|e| AddQuestionFormError::Malformed(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddQuestionFormPayload {
    pub question: QuestionText,
    pub answer: AnswerText,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

impl AddQuestionFormPayload {
    pub fn into_new_question(self) -> NewQuestion {
        NewQuestion {
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddQuestionFormError {
    #[error("Add question body is not a valid JSON object: {0}")]
    Malformed(String),
    #[error("Add question form validation failed: {0}")]
    Validation(String),
    #[error("Add question form field `{0}` is not an integer")]
    NotAnInteger(&'static str),
    #[error("Add question form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddQuestionFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddQuestionFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn required_integer(
    value: Option<Value>,
    field: &'static str,
) -> Result<i32, AddQuestionFormError> {
    value
        .as_ref()
        .and_then(integer_from_json)
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(AddQuestionFormError::NotAnInteger(field))
}

impl TryFrom<AddQuestionForm> for AddQuestionFormPayload {
    type Error = AddQuestionFormError;

    fn try_from(value: AddQuestionForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let category = required_integer(value.category, "category")?;
        let difficulty = required_integer(value.difficulty, "difficulty")?;

        Ok(Self {
            question: QuestionText::new(value.question.unwrap_or_default())?,
            answer: AnswerText::new(value.answer.unwrap_or_default())?,
            category: CategoryId::new(category)?,
            difficulty: Difficulty::new(difficulty)?,
        })
    }
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuestionsForm {
    #[serde(rename = "searchTerm")]
    #[validate(required)]
    pub search_term: Option<String>,
}

impl SearchQuestionsForm {
    pub fn from_slice(body: &[u8]) -> Result<Self, SearchQuestionsFormError> {
        serde_json::from_slice(body)
            .map_err(|e| SearchQuestionsFormError::Malformed(e.to_string()))
    }
}

/// Validated search request. The term may be empty, which matches every
/// question.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuestionsFormPayload {
    pub search_term: String,
}

#[derive(Debug, Error)]
pub enum SearchQuestionsFormError {
    #[error("Search body is not a valid JSON object: {0}")]
    Malformed(String),
    #[error("Search form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for SearchQuestionsFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<SearchQuestionsForm> for SearchQuestionsFormPayload {
    type Error = SearchQuestionsFormError;

    fn try_from(value: SearchQuestionsForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            search_term: value.search_term.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<AddQuestionFormPayload, AddQuestionFormError> {
        AddQuestionForm::from_slice(body.as_bytes()).and_then(AddQuestionFormPayload::try_from)
    }

    #[test]
    fn accepts_complete_form() {
        let payload = parse(
            r#"{"question": "What is acrophobia a fear of?", "answer": "Heights", "category": 2, "difficulty": "3"}"#,
        )
        .unwrap();
        assert_eq!(payload.category.get(), 2);
        assert_eq!(payload.difficulty.get(), 3);
        assert_eq!(payload.answer.as_str(), "Heights");
    }

    #[test]
    fn non_integer_difficulty_is_a_type_error() {
        let err = parse(
            r#"{"question": "What is acrophobia a fear of?", "answer": "Heights", "category": 2, "difficulty": "three"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AddQuestionFormError::NotAnInteger("difficulty")));
    }

    #[test]
    fn missing_answer_fails_validation() {
        let err = parse(
            r#"{"question": "Who was the Ancient Greek God of the Sun?", "category": 4, "difficulty": 2}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AddQuestionFormError::Validation(_)));
    }

    #[test]
    fn null_category_counts_as_missing() {
        let err = parse(r#"{"question": "Q", "answer": "A", "category": null, "difficulty": 2}"#)
            .unwrap_err();
        assert!(matches!(err, AddQuestionFormError::Validation(_)));
    }

    #[test]
    fn blank_question_is_rejected() {
        let err = parse(r#"{"question": "   ", "answer": "A", "category": 1, "difficulty": 2}"#)
            .unwrap_err();
        assert!(matches!(err, AddQuestionFormError::TypeConstraint(_)));
    }

    #[test]
    fn list_body_is_malformed() {
        let err = parse(r#"["question", "answer"]"#).unwrap_err();
        assert!(matches!(err, AddQuestionFormError::Malformed(_)));
    }

    #[test]
    fn search_term_may_be_empty_but_not_missing() {
        let payload = SearchQuestionsForm::from_slice(br#"{"searchTerm": ""}"#)
            .and_then(SearchQuestionsFormPayload::try_from)
            .unwrap();
        assert_eq!(payload.search_term, "");

        let err = SearchQuestionsForm::from_slice(br#"{}"#)
            .and_then(SearchQuestionsFormPayload::try_from)
            .unwrap_err();
        assert!(matches!(err, SearchQuestionsFormError::Validation(_)));
    }
}
