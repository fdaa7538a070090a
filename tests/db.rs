mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn foreign_keys_are_enforced() {
    use diesel::prelude::*;
    use pushkind_trivia::schema::questions;

    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    let result = diesel::insert_into(questions::table)
        .values((
            questions::question.eq("Orphan?"),
            questions::answer.eq("Yes"),
            questions::category.eq(42),
            questions::difficulty.eq(1),
        ))
        .execute(&mut conn);

    assert!(result.is_err());
}
