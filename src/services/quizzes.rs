//! Quiz question selection.
//!
//! No quiz state is kept between requests. Clients send the category scope
//! and the ids they were already served, and each call draws from whatever is
//! left, so a scope of `n` questions is exhausted after at most `n` calls.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::question::Question;
use crate::domain::types::{QuestionId, QuizScope};
use crate::dto::questions::QuizResponse;
use crate::forms::quizzes::QuizFormPayload;
use crate::repository::{QuestionListQuery, QuestionReader};

use super::{ServiceError, ServiceResult};

/// Pick one question uniformly at random among `candidates` whose id is not
/// in `excluded`. `None` means every candidate has been served.
pub fn select_question<G>(
    candidates: Vec<Question>,
    excluded: &HashSet<QuestionId>,
    rng: &mut G,
) -> Option<Question>
where
    G: Rng + ?Sized,
{
    let eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !excluded.contains(&q.id))
        .collect();

    eligible.choose(rng).cloned()
}

/// Serve the next question of a quiz round, or `null` once the scope is
/// exhausted.
///
/// The scope category is not checked for existence; an unknown category
/// simply has no questions.
pub fn next_quiz_question<R, G>(
    payload: QuizFormPayload,
    repo: &R,
    rng: &mut G,
) -> ServiceResult<QuizResponse>
where
    R: QuestionReader,
    G: Rng + ?Sized,
{
    let query = match payload.scope {
        QuizScope::AllCategories => QuestionListQuery::default(),
        QuizScope::Category(category_id) => QuestionListQuery::default().category(category_id),
        QuizScope::Unassignable(raw) => {
            log::debug!("Quiz category {raw} cannot hold questions");
            return Ok(QuizResponse::new(None));
        }
    };

    let (_total, candidates) = repo.list_questions(query).map_err(|e| {
        log::error!("Failed to list quiz candidates: {e}");
        ServiceError::Internal
    })?;

    let question = select_question(candidates, &payload.previous_questions, rng);
    if question.is_none() {
        log::debug!("Quiz scope {:?} exhausted", payload.scope);
    }

    Ok(QuizResponse::new(question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CategoryId;
    use crate::repository::test::{sample_questions, sample_repository};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn payload(scope: QuizScope, previous: &[i32]) -> QuizFormPayload {
        QuizFormPayload {
            scope,
            previous_questions: previous
                .iter()
                .map(|id| QuestionId::new(*id).unwrap())
                .collect(),
        }
    }

    #[test]
    fn never_returns_an_excluded_question() {
        let mut rng = StdRng::seed_from_u64(7);
        let excluded: HashSet<QuestionId> =
            (1..=11).map(|id| QuestionId::new(id).unwrap()).collect();

        for _ in 0..20 {
            let picked = select_question(sample_questions(), &excluded, &mut rng).unwrap();
            assert_eq!(picked.id, 12);
        }
    }

    #[test]
    fn empty_candidate_set_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_question(vec![], &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn selection_reaches_every_candidate() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let picked = select_question(sample_questions(), &HashSet::new(), &mut rng).unwrap();
            seen.insert(picked.id);
        }

        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn category_round_exhausts_after_each_question_once() {
        let repo = sample_repository();
        let mut rng = StdRng::seed_from_u64(1);
        let science = QuizScope::Category(CategoryId::new(1).unwrap());
        let mut previous: Vec<i32> = vec![];

        for _ in 0..10 {
            let response =
                next_quiz_question(payload(science, &previous), &repo, &mut rng).unwrap();
            let question = response.question.expect("questions remain in scope");
            assert_eq!(question.category, "1");
            assert!(!previous.contains(&question.id));
            previous.push(question.id);
        }

        let response = next_quiz_question(payload(science, &previous), &repo, &mut rng).unwrap();
        assert!(response.success);
        assert!(response.question.is_none());
    }

    #[test]
    fn all_categories_scope_draws_from_everything() {
        let repo = sample_repository();
        let mut rng = StdRng::seed_from_u64(3);
        let previous: Vec<i32> = (1..=10).collect();

        let response =
            next_quiz_question(payload(QuizScope::AllCategories, &previous), &repo, &mut rng)
                .unwrap();

        let question = response.question.unwrap();
        assert_eq!(question.category, "2");
    }

    #[test]
    fn unknown_category_is_immediately_exhausted() {
        let repo = sample_repository();
        let mut rng = StdRng::seed_from_u64(3);
        let scope = QuizScope::Category(CategoryId::new(999).unwrap());

        let response = next_quiz_question(payload(scope, &[]), &repo, &mut rng).unwrap();

        assert!(response.question.is_none());
    }

    #[test]
    fn unassignable_category_is_immediately_exhausted() {
        let repo = sample_repository();
        let mut rng = StdRng::seed_from_u64(3);

        let response =
            next_quiz_question(payload(QuizScope::Unassignable(-5), &[]), &repo, &mut rng)
                .unwrap();

        assert!(response.success);
        assert!(response.question.is_none());
    }
}
