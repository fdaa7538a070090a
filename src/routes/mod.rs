use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{Method, StatusCode};
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpResponse, Resource, web};

use crate::dto::ErrorResponse;
use crate::repository::DieselRepository;
use crate::services::ServiceError;

pub mod categories;
pub mod questions;
pub mod quizzes;

/// Render a service failure as the JSON error envelope.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let status = match err {
        ServiceError::BadRequest => StatusCode::BAD_REQUEST,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ServiceError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    HttpResponse::build(status).json(ErrorResponse::new(status.as_u16(), err.to_string()))
}

pub async fn not_found() -> HttpResponse {
    error_response(&ServiceError::NotFound)
}

pub async fn method_not_allowed() -> HttpResponse {
    error_response(&ServiceError::MethodNotAllowed)
}

pub async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// A resource that answers CORS preflight requests and rejects unknown
/// methods with the error envelope.
fn resource(path: &str) -> Resource {
    web::resource(path)
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
}

/// Register every endpoint of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        resource("/questions")
            .route(web::get().to(questions::list_questions))
            .route(web::post().to(questions::create_question)),
    )
    // Must precede `/questions/{question_id}`.
    .service(resource("/questions/search").route(web::post().to(questions::search_questions)))
    .service(
        resource("/questions/{question_id}").route(web::delete().to(questions::delete_question)),
    )
    .service(resource("/categories").route(web::get().to(categories::list_categories)))
    .service(
        resource("/categories/{category_id}/questions")
            .route(web::get().to(categories::list_category_questions)),
    )
    .service(resource("/quizzes").route(web::post().to(quizzes::next_question)));
}

/// Build the application around a repository. Shared by `main` and the
/// integration tests.
pub fn build_app(
    repo: DieselRepository,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(
            DefaultHeaders::new()
                .add(("Access-Control-Allow-Origin", "*"))
                .add((
                    "Access-Control-Allow-Headers",
                    "Content-Type,Authorization,true",
                ))
                .add((
                    "Access-Control-Allow-Methods",
                    "GET,POST,PATCH,DELETE,OPTIONS",
                )),
        )
        .wrap(Logger::default())
        .app_data(web::Data::new(repo))
        .configure(configure)
        .default_service(web::to(not_found))
}
