//! SQL building and column conversion helpers shared by the repositories.

use crate::error::DatabaseError;

/// Numbered placeholders `?{start}, ?{start+1}, ...` for an `IN (...)` list.
///
/// Returns an empty string for `count == 0`; callers must not emit an
/// `IN ()` clause in that case.
#[must_use]
pub fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convert a row count or window bound to the `i64` SQLite expects.
///
/// Values beyond `i64::MAX` saturate, which SQLite treats as "no rows" for
/// `OFFSET` and "unbounded" for `LIMIT`.
#[must_use]
pub fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Read a single `COUNT(*)` value from the first row of a result set.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` for an empty result and
/// `DatabaseError::InvalidState` for a negative count.
pub async fn read_count(mut rows: libsql::Rows) -> Result<u64, DatabaseError> {
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let count = row.get::<i64>(0)?;
    u64::try_from(count)
        .map_err(|_| DatabaseError::InvalidState(format!("negative row count: {count}")))
}

/// Wrap a list of integer ids as libSQL parameter values.
#[must_use]
pub fn int_values(ids: &[i64]) -> Vec<libsql::Value> {
    ids.iter().copied().map(libsql::Value::Integer).collect()
}
