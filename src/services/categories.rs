use crate::domain::types::CategoryId;
use crate::dto::categories::{CategoriesResponse, category_map};
use crate::dto::questions::QuestionListResponse;
use crate::repository::{CategoryReader, QuestionListQuery, QuestionReader};

use super::{ServiceError, ServiceResult};

/// Parse a category id taken from the request path. Ids that cannot exist are
/// reported as not found.
pub fn parse_category_id(raw: &str) -> ServiceResult<CategoryId> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(|id| CategoryId::new(id).ok())
        .ok_or(ServiceError::NotFound)
}

/// Every category keyed by id. An empty store is `NotFound`.
pub fn list_categories<R>(repo: &R) -> ServiceResult<CategoriesResponse>
where
    R: CategoryReader,
{
    let categories = repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })?;

    if categories.is_empty() {
        return Err(ServiceError::NotFound);
    }

    Ok(CategoriesResponse::new(category_map(categories)))
}

/// Every question of one category. A known category without questions is an
/// empty success, unlike an empty listing page.
pub fn list_category_questions<R>(raw_id: &str, repo: &R) -> ServiceResult<QuestionListResponse>
where
    R: CategoryReader + QuestionReader,
{
    let category_id = parse_category_id(raw_id)?;

    let category = match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.list_questions(QuestionListQuery::default().category(category.id)) {
        Ok((total, questions)) => Ok(QuestionListResponse::new(questions, total)
            .with_current_category(category.kind.into_inner())),
        Err(e) => {
            log::error!("Failed to list questions for category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::{TestRepository, sample_categories, sample_repository};

    #[test]
    fn lists_all_categories() {
        let repo = sample_repository();

        let response = list_categories(&repo).unwrap();

        assert_eq!(response.categories.len(), 6);
        assert_eq!(response.categories.get(&4).map(String::as_str), Some("History"));
    }

    #[test]
    fn no_categories_is_not_found() {
        let repo = TestRepository::default();
        assert_eq!(list_categories(&repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn lists_questions_of_one_category() {
        let repo = sample_repository();

        let response = list_category_questions("1", &repo).unwrap();

        assert_eq!(response.total_questions, 10);
        assert!(response.questions.iter().all(|q| q.category == "1"));
        assert_eq!(response.current_category.as_deref(), Some("Science"));
    }

    #[test]
    fn category_without_questions_is_an_empty_success() {
        let repo = TestRepository::new(sample_categories(), vec![]);

        let response = list_category_questions("3", &repo).unwrap();

        assert!(response.questions.is_empty());
        assert_eq!(response.total_questions, 0);
    }

    #[test]
    fn unknown_category_is_not_found() {
        let repo = sample_repository();
        assert_eq!(
            list_category_questions("1000", &repo).unwrap_err(),
            ServiceError::NotFound
        );
        assert_eq!(
            list_category_questions("science", &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }
}
