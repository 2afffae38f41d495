//! Creation and update timestamps as stored in the database.

use rusqlite::{Row, types::Type};
use time::OffsetDateTime;

use crate::Error;

/// Convert a timestamp into the integer nanoseconds stored in the database.
///
/// # Errors
///
/// Returns [Error::Validation] for dates outside the range representable by an
/// `i64` number of nanoseconds (roughly the years 1678 to 2262).
pub fn to_nanos(timestamp: OffsetDateTime) -> Result<i64, Error> {
    i64::try_from(timestamp.unix_timestamp_nanos())
        .map_err(|_| Error::Validation(format!("{timestamp} is out of range")))
}

/// Convert a range bound into integer nanoseconds, clamping it to the storable range.
///
/// Dates before roughly 1678 become [i64::MIN] and dates after roughly 2262
/// become [i64::MAX], so such a bound excludes nothing on its side.
pub fn to_nanos_saturating(timestamp: OffsetDateTime) -> i64 {
    let nanos = timestamp.unix_timestamp_nanos();

    match i64::try_from(nanos) {
        Ok(nanos) => nanos,
        Err(_) if nanos < 0 => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Read the timestamp stored in column `index` of `row`.
pub fn get_timestamp(row: &Row, index: usize) -> Result<OffsetDateTime, rusqlite::Error> {
    let nanos: i64 = row.get(index)?;

    OffsetDateTime::from_unix_timestamp_nanos(i128::from(nanos)).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(error))
    })
}

/// The current time in UTC.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
