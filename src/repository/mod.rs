use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::question::{NewQuestion, Question};
use crate::domain::types::{CategoryId, QuestionId};
use crate::pagination::Pagination;

pub mod category;
pub mod errors;
pub mod question;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching questions.
///
/// Results are always ordered by ascending question id.
#[derive(Debug, Clone, Default)]
pub struct QuestionListQuery {
    /// Restrict to questions of a single category.
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring of the question text.
    pub search: Option<String>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl QuestionListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

/// Read-only operations for question entities.
pub trait QuestionReader {
    /// List questions matching the supplied query. The first element is the
    /// number of matching questions before pagination.
    fn list_questions(&self, query: QuestionListQuery) -> RepositoryResult<(usize, Vec<Question>)>;
    /// Count every stored question.
    fn count_questions(&self) -> RepositoryResult<usize>;
    /// Retrieve a question by its identifier.
    fn get_question_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>>;
}

/// Write operations for question entities.
pub trait QuestionWriter {
    /// Persist a new question and return it with its assigned id.
    fn create_question(&self, question: &NewQuestion) -> RepositoryResult<Question>;
    /// Delete a question, returning the number of removed rows.
    fn delete_question(&self, id: QuestionId) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category ordered by id.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}
