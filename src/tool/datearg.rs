use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateArgError {
    #[error("'{0}' is not a YYYY-MM-DD date")]
    Malformed(String)
}

/// Parses a tool argument written as `YYYY-MM-DD`.
///
/// The year takes four digits, month and day one or two (`2024-1-1` is
/// accepted). Other separators and impossible dates such as `2024-02-30`
/// are rejected.
pub fn parse_date(arg: &str) -> Result<NaiveDate, DateArgError> {
    let malformed = || DateArgError::Malformed(arg.to_owned());
    let fields: Vec<&str> = arg.split('-').collect();
    let [year, month, day] = fields[..] else {
        return Err(malformed());
    };
    let all_digits = |field: &str, widths: std::ops::RangeInclusive<usize>| {
        widths.contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
    };
    if !(all_digits(year, 4..=4) && all_digits(month, 1..=2) && all_digits(day, 1..=2)) {
        return Err(malformed());
    }
    let year: i32 = year.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}
