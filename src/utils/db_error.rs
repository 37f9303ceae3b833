/// Returns true when `e` is a unique-constraint violation on `urls.short_code`.
///
/// SQLite reports no constraint name, only a message of the form
/// `UNIQUE constraint failed: urls.short_code`.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("urls.short_code")
}
