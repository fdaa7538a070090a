use serde::Serialize;

use crate::domain::question::Question;
use crate::dto::categories::CategoryMap;

/// Outward representation of a question.
///
/// `category` is rendered as text even though it is stored as an integer
/// reference; existing clients compare it against string ids.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(value: Question) -> Self {
        Self {
            id: value.id.get(),
            question: value.question.into_inner(),
            answer: value.answer.into_inner(),
            category: value.category.to_string(),
            difficulty: value.difficulty.get(),
        }
    }
}

/// Response for page listings, searches and category listings.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<String>,
}

impl QuestionListResponse {
    pub fn new(questions: Vec<Question>, total_questions: usize) -> Self {
        Self {
            success: true,
            questions: questions.into_iter().map(QuestionDto::from).collect(),
            total_questions,
            categories: None,
            current_category: None,
        }
    }

    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_current_category(mut self, current_category: impl Into<String>) -> Self {
        self.current_category = Some(current_category.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatedQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeletedQuestionResponse {
    pub success: bool,
    pub deleted: i32,
}

/// Next quiz question. `question` is `null` once the scope is exhausted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionDto>,
}

impl QuizResponse {
    pub fn new(question: Option<Question>) -> Self {
        Self {
            success: true,
            question: question.map(QuestionDto::from),
        }
    }
}
