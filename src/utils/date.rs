// src/utils/date.rs

//! Date/time string normalization.

use crate::error::{AppError, Result};
use crate::utils::patterns::DATETIME_RE;

/// Normalize a loosely formatted date/time into
/// `YYYY-MM-DDTHH:MM:SS[Z|±HH:MM]`, or `YYYY-MM-DD` when there is no time.
///
/// Numeric components are zero-padded, fractional seconds are dropped,
/// and a trailing short token such as a weekday abbreviation is ignored.
///
/// # Errors
/// Returns [`AppError::DateFormat`] when the string does not match the
/// recognized grammar.
///
/// # Examples
/// ```
/// use mf2util::utils::date::normalize_dt;
///
/// assert_eq!(normalize_dt("2022-1-5").unwrap(), "2022-01-05");
/// assert_eq!(normalize_dt("2022-01-15 9:05 +0100").unwrap(), "2022-01-15T09:05:00+01:00");
/// assert!(normalize_dt("next tuesday").is_err());
/// ```
pub fn normalize_dt(input: &str) -> Result<String> {
    let caps = DATETIME_RE
        .captures(input)
        .ok_or_else(|| AppError::date_format(input))?;

    let pad = |name: &str| caps.name(name).map(|m| format!("{:0>2}", m.as_str()));
    // year/month/day are mandatory in the pattern
    let (Some(year), Some(month), Some(day)) = (pad("year"), pad("month"), pad("day")) else {
        return Err(AppError::date_format(input));
    };
    let date = format!("{year}-{month}-{day}");

    let Some(hour) = pad("hour") else {
        return Ok(date);
    };
    let minute = pad("minute").unwrap_or_else(|| "00".to_string());
    let second = pad("second").unwrap_or_else(|| "00".to_string());
    let datetime = format!("{date}T{hour}:{minute}:{second}");

    if caps.name("tzz").is_some() {
        return Ok(format!("{datetime}Z"));
    }
    match (caps.name("tzsign"), pad("tzhour")) {
        (Some(sign), Some(tzhour)) => {
            let tzminute = pad("tzminute").unwrap_or_else(|| "00".to_string());
            Ok(format!("{datetime}{}{tzhour}:{tzminute}", sign.as_str()))
        }
        _ => Ok(datetime),
    }
}
