use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{QuestionId, QuizScope, TypeConstraintError};
use crate::forms::integer_from_json;

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize, Validate)]
pub struct QuizForm {
    #[validate(required)]
    pub previous_questions: Option<Vec<i64>>,
    #[validate(required)]
    pub quiz_category: Option<QuizCategoryForm>,
}

/// Category selected by the quiz client. Clients also send a `type` label
/// which is not needed to pick a question.
#[derive(Debug, Deserialize, Serialize)]
pub struct QuizCategoryForm {
    pub id: Option<Value>,
}

impl QuizForm {
    pub fn from_slice(body: &[u8]) -> Result<Self, QuizFormError> {
        serde_json::from_slice(body).map_err(|e| QuizFormError::Malformed(e.to_string()))
    }
}

/// Validated quiz request: where to draw from and what was already served.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizFormPayload {
    pub scope: QuizScope,
    pub previous_questions: HashSet<QuestionId>,
}

#[derive(Debug, Error)]
pub enum QuizFormError {
    #[error("Quiz body is not a valid JSON object: {0}")]
    Malformed(String),
    #[error("Quiz form validation failed: {0}")]
    Validation(String),
    #[error("Quiz form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for QuizFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for QuizFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<QuizForm> for QuizFormPayload {
    type Error = QuizFormError;

    fn try_from(value: QuizForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let raw_id = value
            .quiz_category
            .and_then(|category| category.id)
            .as_ref()
            .and_then(integer_from_json)
            .ok_or_else(|| {
                TypeConstraintError::InvalidValue("quiz category id is required".to_string())
            })?;

        // Ids that can never be assigned cannot be excluded either.
        let previous_questions = value
            .previous_questions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| i32::try_from(id).ok())
            .filter_map(|id| QuestionId::new(id).ok())
            .collect();

        Ok(Self {
            scope: QuizScope::from_raw(raw_id),
            previous_questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CategoryId;

    fn parse(body: &str) -> Result<QuizFormPayload, QuizFormError> {
        QuizForm::from_slice(body.as_bytes()).and_then(QuizFormPayload::try_from)
    }

    #[test]
    fn parses_category_scope_and_history() {
        let payload = parse(
            r#"{"previous_questions": [1, 3], "quiz_category": {"id": 1, "type": "Science"}}"#,
        )
        .unwrap();
        assert_eq!(
            payload.scope,
            QuizScope::Category(CategoryId::new(1).unwrap())
        );
        assert!(payload.previous_questions.contains(&QuestionId::new(3).unwrap()));
        assert_eq!(payload.previous_questions.len(), 2);
    }

    #[test]
    fn string_id_zero_selects_all_categories() {
        let payload =
            parse(r#"{"previous_questions": [], "quiz_category": {"id": "0", "type": "click"}}"#)
                .unwrap();
        assert_eq!(payload.scope, QuizScope::AllCategories);
    }

    #[test]
    fn negative_category_is_a_scope_without_questions() {
        let payload =
            parse(r#"{"previous_questions": [], "quiz_category": {"id": -5, "type": "Art"}}"#)
                .unwrap();
        assert_eq!(payload.scope, QuizScope::Unassignable(-5));
    }

    #[test]
    fn missing_previous_questions_is_not_an_empty_history() {
        let err = parse(r#"{"quiz_category": {"id": 1, "type": "Science"}}"#).unwrap_err();
        assert!(matches!(err, QuizFormError::Validation(_)));
    }

    #[test]
    fn missing_quiz_category_is_rejected() {
        let err = parse(r#"{"previous_questions": []}"#).unwrap_err();
        assert!(matches!(err, QuizFormError::Validation(_)));
    }

    #[test]
    fn category_without_id_is_rejected() {
        let err = parse(r#"{"previous_questions": [], "quiz_category": {"type": "Art"}}"#)
            .unwrap_err();
        assert!(matches!(err, QuizFormError::TypeConstraint(_)));
    }

    #[test]
    fn unparseable_and_wrong_shape_bodies_are_malformed() {
        assert!(matches!(
            parse("previous_questions=1").unwrap_err(),
            QuizFormError::Malformed(_)
        ));
        assert!(matches!(
            parse(r#"[1, 2, 3]"#).unwrap_err(),
            QuizFormError::Malformed(_)
        ));
    }
}
