use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime, Time,
};

pub(crate) fn primitive_now_utc() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

pub(crate) fn format_primitive(value: PrimitiveDateTime) -> String {
    value.assume_utc().format(&Rfc3339).unwrap_or_else(|_| value.assume_utc().to_string())
}

/// Accepts `YYYY-MM-DD`, ignoring any `T...` suffix a browser date picker may append.
pub(crate) fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    let day = value.trim().split('T').next().unwrap_or_default();
    Date::parse(day, format_description!("[year]-[month]-[day]"))
}

/// Accepts `HH:MM` or `HH:MM:SS`.
pub(crate) fn parse_clock(value: &str) -> Result<Time, time::error::Parse> {
    let value = value.trim();
    if value.len() <= 5 {
        Time::parse(value, format_description!("[hour]:[minute]"))
    } else {
        Time::parse(value, format_description!("[hour]:[minute]:[second]"))
    }
}

pub(crate) fn format_date(value: Date) -> String {
    value
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| value.to_string())
}

pub(crate) fn format_clock(value: Time) -> String {
    value
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| value.to_string())
}
