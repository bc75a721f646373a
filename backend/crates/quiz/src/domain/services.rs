//! Domain Services
//!
//! Pure domain logic for quiz selection.

use crate::domain::catalog::QuizCatalog;
use crate::domain::entities::{Quiz, Session};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a quiz uniformly at random among those the session has not solved.
///
/// Once every quiz is solved the whole catalog is eligible again.
pub fn pick_quiz<'a, R>(
    catalog: &'a QuizCatalog,
    session: &Session,
    rng: &mut R,
) -> Option<&'a Quiz>
where
    R: Rng + ?Sized,
{
    let unseen: Vec<&Quiz> = catalog
        .iter()
        .filter(|quiz| !session.has_answered(quiz.id))
        .collect();

    if unseen.is_empty() {
        catalog.all().choose(rng)
    } else {
        unseen.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::QuizId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn catalog(n: u64) -> QuizCatalog {
        let quizzes = (1..=n)
            .map(|id| Quiz::new(QuizId::new(id), format!("q{id}"), format!("a{id}"), ""))
            .collect();
        QuizCatalog::new(quizzes).unwrap()
    }

    #[test]
    fn test_never_offers_answered_quiz_while_unseen_remain() {
        let catalog = catalog(5);
        let mut session = Session::new();
        session.record_correct(QuizId::new(1));
        session.record_correct(QuizId::new(3));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let quiz = pick_quiz(&catalog, &session, &mut rng).unwrap();
            assert!(!session.has_answered(quiz.id));
        }
    }

    #[test]
    fn test_single_unseen_quiz_is_always_picked() {
        let catalog = catalog(3);
        let mut session = Session::new();
        session.record_correct(QuizId::new(1));
        session.record_correct(QuizId::new(2));
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            assert_eq!(
                pick_quiz(&catalog, &session, &mut rng).unwrap().id,
                QuizId::new(3)
            );
        }
    }

    #[test]
    fn test_falls_back_to_full_catalog_when_all_answered() {
        let catalog = catalog(3);
        let mut session = Session::new();
        for quiz in catalog.iter() {
            session.record_correct(quiz.id);
        }
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<QuizId> = (0..200)
            .map(|_| pick_quiz(&catalog, &session, &mut rng).unwrap().id)
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_selection_covers_every_unseen_quiz() {
        let catalog = catalog(4);
        let session = Session::new();
        let mut rng = StdRng::seed_from_u64(3);

        let seen: HashSet<QuizId> = (0..400)
            .map(|_| pick_quiz(&catalog, &session, &mut rng).unwrap().id)
            .collect();
        assert_eq!(seen.len(), 4);
    }
}
