use actix_web::{HttpResponse, Responder, web};

use crate::forms::quizzes::{QuizForm, QuizFormPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::quizzes::next_quiz_question;

/// `POST /quizzes`
pub async fn next_question(body: web::Bytes, repo: web::Data<DieselRepository>) -> impl Responder {
    let payload = match QuizForm::from_slice(&body).and_then(QuizFormPayload::try_from) {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("Rejected quiz request: {e}");
            return error_response(&ServiceError::from(e));
        }
    };

    let mut rng = rand::thread_rng();
    match next_quiz_question(payload, repo.get_ref(), &mut rng) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}
