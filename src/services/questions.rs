use crate::domain::types::QuestionId;
use crate::dto::categories::category_map;
use crate::dto::questions::{
    CreatedQuestionResponse, DeletedQuestionResponse, QuestionListResponse,
};
use crate::forms::questions::{AddQuestionFormPayload, SearchQuestionsFormPayload};
use crate::pagination::QUESTIONS_PER_PAGE;
use crate::repository::{CategoryReader, QuestionListQuery, QuestionReader, QuestionWriter};

use super::{ServiceError, ServiceResult};

/// Label reported as `current_category` on the unfiltered listing.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Parse the raw `page` query parameter. Absent means the first page.
///
/// Anything that is not an integer of at least 1 is unprocessable.
pub fn parse_page(raw: Option<&str>) -> ServiceResult<usize> {
    let Some(raw) = raw else {
        return Ok(1);
    };

    let raw = raw.trim();
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::Unprocessable);
    }

    // Overflow is still a page past the data.
    match digits.parse::<usize>().unwrap_or(usize::MAX) {
        0 => Err(ServiceError::Unprocessable),
        page => Ok(page),
    }
}

/// Parse a question id taken from the request path. Ids that cannot exist are
/// reported as not found.
pub fn parse_question_id(raw: &str) -> ServiceResult<QuestionId> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(|id| QuestionId::new(id).ok())
        .ok_or(ServiceError::NotFound)
}

/// One page of questions ordered by id, with every category for navigation.
///
/// A page without questions is `NotFound`, even on an empty store. Search and
/// category listings return empty results as success instead; keep the two
/// policies apart.
pub fn list_questions<R>(page: Option<&str>, repo: &R) -> ServiceResult<QuestionListResponse>
where
    R: QuestionReader + CategoryReader,
{
    let page = parse_page(page)?;

    let (total, questions) = repo
        .list_questions(QuestionListQuery::default().paginate(page, QUESTIONS_PER_PAGE))
        .map_err(|e| {
            log::error!("Failed to list questions: {e}");
            ServiceError::Internal
        })?;

    if questions.is_empty() {
        return Err(ServiceError::NotFound);
    }

    let categories = repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })?;

    Ok(QuestionListResponse::new(questions, total)
        .with_categories(category_map(categories))
        .with_current_category(ALL_CATEGORIES_LABEL))
}

/// Every question whose text contains the term, ignoring case. Not paginated.
pub fn search_questions<R>(
    payload: SearchQuestionsFormPayload,
    repo: &R,
) -> ServiceResult<QuestionListResponse>
where
    R: QuestionReader,
{
    match repo.list_questions(QuestionListQuery::default().search(payload.search_term)) {
        Ok((total, questions)) => Ok(QuestionListResponse::new(questions, total)),
        Err(e) => {
            log::error!("Failed to search questions: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Insert a question and report its id together with the new total.
pub fn create_question<R>(
    payload: AddQuestionFormPayload,
    repo: &R,
) -> ServiceResult<CreatedQuestionResponse>
where
    R: QuestionReader + QuestionWriter,
{
    let question = match repo.create_question(&payload.into_new_question()) {
        Ok(question) => question,
        Err(e) => {
            log::error!("Failed to create question: {e}");
            return Err(ServiceError::Unprocessable);
        }
    };

    let total_questions = repo.count_questions().map_err(|e| {
        log::error!("Failed to count questions: {e}");
        ServiceError::Internal
    })?;

    log::info!("Created question {}", question.id);

    Ok(CreatedQuestionResponse {
        success: true,
        created: question.id.get(),
        total_questions,
    })
}

/// Permanently remove a question.
pub fn delete_question<R>(raw_id: &str, repo: &R) -> ServiceResult<DeletedQuestionResponse>
where
    R: QuestionReader + QuestionWriter,
{
    let id = parse_question_id(raw_id)?;

    match repo.get_question_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get question: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_question(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Deleted question {id}");
            Ok(DeletedQuestionResponse {
                success: true,
                deleted: id.get(),
            })
        }
        Err(e) => {
            log::error!("Failed to delete question: {e}");
            Err(ServiceError::Unprocessable)
        }
    }
}
