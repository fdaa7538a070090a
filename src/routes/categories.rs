use actix_web::{HttpResponse, Responder, web};

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::categories::{
    list_categories as list_categories_service,
    list_category_questions as list_category_questions_service,
};

/// `GET /categories`
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}

/// `GET /categories/{category_id}/questions`
pub async fn list_category_questions(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_category_questions_service(&category_id, repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}
