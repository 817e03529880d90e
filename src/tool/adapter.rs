use std::sync::Arc;

use chrono::NaiveDate;

use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::tool::datearg::{format_date, parse_date, DateArgError};
use crate::tool::outcome::{DetailOutcome, SentenceOutcome};

/// The five date queries behind the MCP tools.
///
/// Argument parsing is the only failure handled here: a malformed date turns
/// into the `ParseError` outcome. Calendar errors (a year without arrangement
/// data) are returned as `Err` for the caller to surface.
#[derive(Clone)]
pub struct ToolAdapter {
    calendar: Arc<dyn HolidayCalendar>
}

impl ToolAdapter {
    pub fn new(calendar: Arc<dyn HolidayCalendar>) -> ToolAdapter {
        ToolAdapter { calendar }
    }

    pub fn check_is_holiday(&self, date: &str) -> Result<SentenceOutcome, CalendarError> {
        let Ok(d) = parse_date(date) else {
            return Ok(SentenceOutcome::ParseError);
        };
        let text = if self.calendar.is_holiday(d)? {
            format!("{} 是节假日", date)
        } else {
            format!("{} 不是节假日", date)
        };
        Ok(SentenceOutcome::Success(text))
    }

    pub fn check_is_workday(&self, date: &str) -> Result<SentenceOutcome, CalendarError> {
        let Ok(d) = parse_date(date) else {
            return Ok(SentenceOutcome::ParseError);
        };
        let text = if self.calendar.is_workday(d)? {
            format!("{} 是工作日", date)
        } else {
            format!("{} 不是工作日", date)
        };
        Ok(SentenceOutcome::Success(text))
    }

    pub fn get_holiday_detail(&self, date: &str) -> Result<DetailOutcome, CalendarError> {
        let Ok(d) = parse_date(date) else {
            return Ok(DetailOutcome::ParseError);
        };
        Ok(DetailOutcome::from(self.calendar.holiday_detail(d)?))
    }

    pub fn get_holidays(&self,
                        start: &str,
                        end: &str,
                        include_weekend: bool) -> Result<SentenceOutcome, CalendarError> {
        let Ok((start, end)) = parse_range(start, end) else {
            return Ok(SentenceOutcome::ParseError);
        };
        let holidays = self.calendar.holidays_between(start, end, include_weekend)?;
        Ok(SentenceOutcome::Success(join_dates(&holidays)))
    }

    pub fn get_workdays(&self,
                        start: &str,
                        end: &str,
                        include_weekend: bool) -> Result<SentenceOutcome, CalendarError> {
        let Ok((start, end)) = parse_range(start, end) else {
            return Ok(SentenceOutcome::ParseError);
        };
        let workdays = self.calendar.workdays_between(start, end, include_weekend)?;
        Ok(SentenceOutcome::Success(join_dates(&workdays)))
    }
}

fn parse_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), DateArgError> {
    Ok((parse_date(start)?, parse_date(end)?))
}

fn join_dates(dates: &[NaiveDate]) -> String {
    dates.iter()
        .map(|&d| format_date(d))
        .collect::<Vec<String>>()
        .join(", ")
}
