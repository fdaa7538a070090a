//! Error conversion glue between the form and service layers.
//!
//! Each form error decides the status class of the rejection: type coercion
//! failures on question creation are reported as bad requests, missing fields
//! as unprocessable, and every quiz body problem as unprocessable.

use crate::forms::questions::{AddQuestionFormError, SearchQuestionsFormError};
use crate::forms::quizzes::QuizFormError;
use crate::services::ServiceError;

impl From<AddQuestionFormError> for ServiceError {
    fn from(val: AddQuestionFormError) -> Self {
        match val {
            AddQuestionFormError::Malformed(_) | AddQuestionFormError::NotAnInteger(_) => {
                ServiceError::BadRequest
            }
            AddQuestionFormError::Validation(_) | AddQuestionFormError::TypeConstraint(_) => {
                ServiceError::Unprocessable
            }
        }
    }
}

impl From<SearchQuestionsFormError> for ServiceError {
    fn from(_: SearchQuestionsFormError) -> Self {
        ServiceError::BadRequest
    }
}

// Unparseable quiz bodies map to 422, not 400.
impl From<QuizFormError> for ServiceError {
    fn from(_: QuizFormError) -> Self {
        ServiceError::Unprocessable
    }
}
