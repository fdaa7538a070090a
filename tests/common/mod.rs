//! Helpers for integration tests.
#![allow(dead_code)]

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_trivia::db::{DbPool, establish_connection_pool};
use pushkind_trivia::schema::{categories, questions};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    /// Database holding six categories and twelve questions: ten in
    /// "Science" (id 1) followed by two in "Art" (id 2).
    pub fn seeded() -> Self {
        let test_db = Self::new();
        test_db.seed_categories();
        test_db.seed_questions();
        test_db
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn seed_categories(&self) {
        let mut conn = self.pool.get().expect("should acquire DB connection");
        let rows = [
            (1, "Science"),
            (2, "Art"),
            (3, "Geography"),
            (4, "History"),
            (5, "Sports"),
            (6, "Entertainment"),
        ];
        for (id, kind) in rows {
            diesel::insert_into(categories::table)
                .values((categories::id.eq(id), categories::type_.eq(kind)))
                .execute(&mut conn)
                .expect("should insert category");
        }
    }

    pub fn seed_questions(&self) {
        let mut conn = self.pool.get().expect("should acquire DB connection");
        let rows = [
            ("What is the largest planet in our solar system?", "Jupiter", 1, 1),
            ("What force keeps the planets in orbit around the Sun?", "Gravity", 1, 2),
            ("The chemical symbol for water is...", "H2O", 1, 1),
            ("How many degrees are in a full circle?", "360", 1, 1),
            (
                "What is the only element that appears in all four types of biomolecules?",
                "Carbon",
                1,
                3,
            ),
            (
                "The process by which plants make their own food is called...",
                "Photosynthesis",
                1,
                2,
            ),
            ("What is the most abundant gas in Earth's atmosphere?", "Nitrogen", 1, 2),
            ("How many bones are in the adult human body?", "206", 1, 3),
            ("Which particle is negatively charged?", "Electron", 1, 1),
            (
                "What is the speed of light in a vacuum (approximately)?",
                "299,792,458 m/s",
                1,
                4,
            ),
            ("Who painted the Mona Lisa?", "Leonardo da Vinci", 2, 1),
            ("What city is home to the Louvre Museum?", "Paris", 2, 2),
        ];
        for (question, answer, category, difficulty) in rows {
            diesel::insert_into(questions::table)
                .values((
                    questions::question.eq(question),
                    questions::answer.eq(answer),
                    questions::category.eq(category),
                    questions::difficulty.eq(difficulty),
                ))
                .execute(&mut conn)
                .expect("should insert question");
        }
    }
}
