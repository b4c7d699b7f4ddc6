use sqlx::{
    Decode, Encode, Sqlite, Type,
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef},
};
use std::fmt::Display;
use time::{
    Date, PrimitiveDateTime, Time, format_description::BorrowedFormatItem,
    macros::format_description,
};

/// A timestamp as Northwind stores it: SQLite TEXT, no offset.
///
/// Values are written as `YYYY-MM-DD HH:MM:SS`. On read, fractional seconds,
/// minute precision, a `T` separator and bare dates (taken as midnight) are
/// also accepted, which covers the shapes found in the usual Northwind SQLite
/// dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(PrimitiveDateTime);

const WRITE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

// Tried in order until one parses.
const READ_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    WRITE_FORMAT,
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

impl DateTime {
    /// The calendar date, dropping the time of day.
    pub fn date(self) -> Date {
        self.0.date()
    }

    /// Parse any of the accepted textual forms.
    pub fn parse(text: &str) -> Result<Self, time::error::Parse> {
        let text = text.trim();
        for format in READ_FORMATS {
            if let Ok(value) = PrimitiveDateTime::parse(text, format) {
                return Ok(Self(value));
            }
        }
        let date = Date::parse(text, DATE_FORMAT)?;
        Ok(Self(PrimitiveDateTime::new(date, Time::MIDNIGHT)))
    }
}

impl From<PrimitiveDateTime> for DateTime {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(value)
    }
}

impl From<Date> for DateTime {
    fn from(value: Date) -> Self {
        Self(PrimitiveDateTime::new(value, Time::MIDNIGHT))
    }
}

impl From<DateTime> for PrimitiveDateTime {
    fn from(value: DateTime) -> Self {
        value.0
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.0.format(WRITE_FORMAT).map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl Type<Sqlite> for DateTime {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <String as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for DateTime {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        let text = self.0.format(WRITE_FORMAT)?;
        <String as Encode<Sqlite>>::encode(text, buf)
    }
}

impl<'r> Decode<'r, Sqlite> for DateTime {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        Ok(Self::parse(text)?)
    }
}
