use crate::config::DEFAULT_CONFIG;
use crate::patterns::RE_PDF_DATE;
use crate::Error;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Signing date as declared in the document.
///
/// The offset is only carried along, the wall clock time is not shifted by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDate {
    /// Display form, see `Config::date_display_format`.
    pub formatted: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub iso: String,
    /// `+HH:MM` or `-HH:MM`
    pub timezone: String,
}

/// Parse a pdf date literal of the form `YYYYMMDDHHmmSS+HH'mm'` (without the `D:` prefix).
///
/// Returns `None` when the literal does not have exactly that shape, or when the
/// components do not form a valid date. The latter is logged as a warning.
pub fn parse_pdf_date(literal: &str) -> Option<ParsedDate> {
    parse_pdf_date_with_format(literal, &DEFAULT_CONFIG.date_display_format)
}

pub(crate) fn parse_pdf_date_with_format(literal: &str, display_format: &str) -> Option<ParsedDate> {
    match try_parse_pdf_date(literal, display_format) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::warn!("Could not parse signing date `{}`: {}", literal, err);
            None
        }
    }
}

fn try_parse_pdf_date(literal: &str, display_format: &str) -> Result<Option<ParsedDate>, Error> {
    let caps = match RE_PDF_DATE.captures(literal) {
        Some(caps) => caps,
        None => return Ok(None),
    };
    let (year, month, day) = (&caps[1], &caps[2], &caps[3]);
    let (hour, minute, second) = (&caps[4], &caps[5], &caps[6]);
    let (sign, tz_hour, tz_minute) = (&caps[7], &caps[8], &caps[9]);

    let iso = format!("{}-{}-{} {}:{}:{}", year, month, day, hour, minute, second);
    let timezone = format!("{}{}:{}", sign, tz_hour, tz_minute);

    let date = NaiveDate::from_ymd_opt(year.parse()?, month.parse()?, day.parse()?);
    let date_time = date
        .and_then(|date| date.and_hms_opt(hour.parse().ok()?, minute.parse().ok()?, second.parse().ok()?))
        .ok_or_else(|| Error::InvalidDate(iso.clone()))?;

    Ok(Some(ParsedDate {
        formatted: format_date_time(&date_time, display_format)?,
        iso,
        timezone,
    }))
}

// `DelayedFormat` reports unknown specifiers through `fmt::Error`, `to_string()` would panic.
fn format_date_time(date_time: &NaiveDateTime, display_format: &str) -> Result<String, Error> {
    let mut formatted = String::new();
    write!(formatted, "{}", date_time.format(display_format))?;
    Ok(formatted)
}
