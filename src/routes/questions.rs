use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;

use crate::forms::questions::{
    AddQuestionForm, AddQuestionFormPayload, SearchQuestionsForm, SearchQuestionsFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::questions::{
    create_question as create_question_service, delete_question as delete_question_service,
    list_questions as list_questions_service, search_questions as search_questions_service,
};

#[derive(Deserialize)]
pub struct QuestionsQueryParams {
    page: Option<String>,
}

/// `GET /questions?page=N`
pub async fn list_questions(
    params: web::Query<QuestionsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_questions_service(params.page.as_deref(), repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}

/// `POST /questions`
pub async fn create_question(
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = match AddQuestionForm::from_slice(&body).and_then(AddQuestionFormPayload::try_from)
    {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("Rejected question: {e}");
            return error_response(&ServiceError::from(e));
        }
    };

    match create_question_service(payload, repo.get_ref()) {
        Ok(response) => HttpResponse::Created().json(response),
        Err(err) => error_response(&err),
    }
}

/// `POST /questions/search`
pub async fn search_questions(
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = match SearchQuestionsForm::from_slice(&body)
        .and_then(SearchQuestionsFormPayload::try_from)
    {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("Rejected search: {e}");
            return error_response(&ServiceError::from(e));
        }
    };

    match search_questions_service(payload, repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}

/// `DELETE /questions/{question_id}`
pub async fn delete_question(
    question_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_question_service(&question_id, repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}
