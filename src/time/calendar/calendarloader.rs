use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use tracing::debug;

use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::chinesecalendar::ChineseCalendar;
use crate::time::calendar::holiday::Holiday;
use crate::time::rangeofdates::RangeOfDates;

/// Built-in arrangement data, State Council notices 2019 to 2026.
const CHINA_ARRANGEMENTS_JSON: &str = include_str!("../../../data/china.json");

#[derive(Deserialize)]
struct ArrangementJsonProp {
    holiday: Holiday,
    /// Inclusive `[start, end]` spans of rest days.
    rest: Vec<(NaiveDate, NaiveDate)>,
    #[serde(default)]
    makeup_workdays: Vec<NaiveDate>
}

#[derive(Deserialize)]
struct ChineseCalendarJsonProp {
    name: String,
    weekends: HashSet<Weekday>,
    start_year: i32,
    end_year: i32,
    arrangements: Vec<ArrangementJsonProp>
}

fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, CalendarError>
    where T: for<'a> Deserialize<'a> {
    serde_json::from_value(json_value).map_err(CalendarError::Json)
}

fn insert_unique(table: &mut HashMap<NaiveDate, Holiday>,
                 d: NaiveDate,
                 holiday: Holiday) -> Result<(), CalendarError> {
    match table.insert(d, holiday) {
        Some(previous) => Err(CalendarError::invalid_data(format!(
            "{} listed twice ({} and {})", d, previous, holiday
        ))),
        None => Ok(())
    }
}

fn build_calendar(json_prop: ChineseCalendarJsonProp) -> Result<ChineseCalendar, CalendarError> {
    if json_prop.start_year > json_prop.end_year {
        return Err(CalendarError::invalid_data(format!(
            "start_year {} is after end_year {}", json_prop.start_year, json_prop.end_year
        )));
    }

    let mut holidays: HashMap<NaiveDate, Holiday> = HashMap::new();
    let mut makeup_workdays: HashMap<NaiveDate, Holiday> = HashMap::new();

    for arrangement in json_prop.arrangements.iter() {
        for &(start, end) in arrangement.rest.iter() {
            let span = RangeOfDates::new(start, end);
            if span.is_empty() {
                return Err(CalendarError::invalid_data(format!(
                    "{} rest span {} to {} is reversed", arrangement.holiday, start, end
                )));
            }
            for d in span.iter() {
                insert_unique(&mut holidays, d, arrangement.holiday)?;
            }
        }
        for &d in arrangement.makeup_workdays.iter() {
            if !json_prop.weekends.contains(&d.weekday()) {
                return Err(CalendarError::invalid_data(format!(
                    "{} make-up workday {} is not a weekend day", arrangement.holiday, d
                )));
            }
            insert_unique(&mut makeup_workdays, d, arrangement.holiday)?;
        }
    }

    if let Some(d) = makeup_workdays.keys().find(|d| holidays.contains_key(d)) {
        return Err(CalendarError::invalid_data(format!(
            "{} is listed both as a rest day and as a make-up workday", d
        )));
    }

    debug!(
        name = %json_prop.name,
        rest_days = holidays.len(),
        makeup_workdays = makeup_workdays.len(),
        "holiday arrangements loaded"
    );

    Ok(ChineseCalendar::new(
        json_prop.name,
        json_prop.weekends,
        json_prop.start_year,
        json_prop.end_year,
        holidays,
        makeup_workdays
    ))
}

/// Builds calendars from arrangement JSON.
///
/// ```text
/// {
///   "name": "China",
///   "weekends": ["Sat", "Sun"],
///   "start_year": 2024,
///   "end_year": 2024,
///   "arrangements": [
///     { "holiday": "SpringFestival",
///       "rest": [["2024-02-10", "2024-02-17"]],
///       "makeup_workdays": ["2024-02-04", "2024-02-18"] }
///   ]
/// }
/// ```
pub struct CalendarLoader;

impl CalendarLoader {
    pub fn from_json(json_value: serde_json::Value) -> Result<ChineseCalendar, CalendarError> {
        let json_prop: ChineseCalendarJsonProp = parse_json_value(json_value)?;
        build_calendar(json_prop)
    }

    pub fn from_str(json: &str) -> Result<ChineseCalendar, CalendarError> {
        let json_value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json(json_value)
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<ChineseCalendar, CalendarError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_json(json_value)
    }
}

/// Process-wide calendar built from the embedded arrangement data.
///
/// Built on first use and shared read-only afterwards.
pub fn china() -> Arc<ChineseCalendar> {
    static CHINA: OnceLock<Arc<ChineseCalendar>> = OnceLock::new();
    CHINA
        .get_or_init(|| {
            let calendar = CalendarLoader::from_str(CHINA_ARRANGEMENTS_JSON)
                .expect("embedded holiday arrangements are valid");
            Arc::new(calendar)
        })
        .clone()
}
