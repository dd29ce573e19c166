//! Timestamps of mount and location actions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::well_known::Rfc3339};

/// An instant on a registry timeline, always in UTC.
///
/// SQLite has no timezone-aware column type, so the offset is normalized away
/// before storage and restored as UTC when read back. Because every stored
/// value shares the same offset, ordering by the column orders the timeline.
/// Documents carry the value in RFC 3339 form.
///
/// ```
/// # use sms_sqlite::types::DateTime;
/// # use time::macros::datetime;
/// let deployed = DateTime::from(datetime!(2023-05-04 14:00 +02:00));
/// assert_eq!(deployed.to_string(), "2023-05-04T12:00:00Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct DateTime(PrimitiveDateTime);

impl From<OffsetDateTime> for DateTime {
    fn from(value: OffsetDateTime) -> Self {
        let utc = value.to_offset(UtcOffset::UTC);
        Self(PrimitiveDateTime::new(utc.date(), utc.time()))
    }
}

impl From<DateTime> for OffsetDateTime {
    fn from(value: DateTime) -> Self {
        value.0.assume_utc()
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = OffsetDateTime::from(*self)
            .format(&Rfc3339)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::serialize(&OffsetDateTime::from(*self), serializer)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        time::serde::rfc3339::deserialize(deserializer).map(Self::from)
    }
}
