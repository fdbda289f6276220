
/// `true` when no database is reachable for this test run.
pub(crate) fn skip_db_tests() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}
