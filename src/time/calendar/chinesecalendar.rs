use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::time::calendar::holiday::{DayDesignation, Holiday};
use crate::time::calendar::holidaycalendar::HolidayCalendar;

/// Weekend days as a bitmask, Mon(0) to Sun(6).
#[derive(Clone, Copy)]
struct WeekendMask(u8);

impl WeekendMask {
    fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }
}

/// Table-backed calendar of the mainland China public holiday system.
///
/// Rest days and make-up workdays come straight from the State Council
/// arrangement published for each year; nothing is derived by rule. Dates
/// outside `[start_year, end_year]` are rejected by the queries of
/// [`HolidayCalendar`].
pub struct ChineseCalendar {
    name: String,
    weekends: WeekendMask,
    start_year: i32,
    end_year: i32,
    holidays: HashMap<NaiveDate, Holiday>,
    makeup_workdays: HashMap<NaiveDate, Holiday>
}

impl ChineseCalendar {
    /// Creates a calendar from already validated tables.
    ///
    /// # Arguments
    /// * `weekends` - Weekdays that are days off unless rearranged
    /// * `start_year`, `end_year` - Inclusive years the tables cover
    /// * `holidays` - Rest days, each tied to its holiday period
    /// * `makeup_workdays` - Weekend days worked in lieu, tied to their period
    pub fn new(
        name: String,
        weekends: HashSet<Weekday>,
        start_year: i32,
        end_year: i32,
        holidays: HashMap<NaiveDate, Holiday>,
        makeup_workdays: HashMap<NaiveDate, Holiday>
    ) -> ChineseCalendar {
        ChineseCalendar {
            name,
            weekends: WeekendMask::new(&weekends),
            start_year,
            end_year,
            holidays,
            makeup_workdays
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn statutory_holiday(&self, d: NaiveDate) -> Option<Holiday> {
        self.holidays.get(&d).copied()
    }

    pub fn makeup_workday(&self, d: NaiveDate) -> Option<Holiday> {
        self.makeup_workdays.get(&d).copied()
    }

    /// Number of rest days and make-up workdays listed for `year`.
    pub fn arrangement_count(&self, year: i32) -> (usize, usize) {
        let rest = self.holidays.keys().filter(|d| d.year() == year).count();
        let makeup = self.makeup_workdays.keys().filter(|d| d.year() == year).count();
        (rest, makeup)
    }
}

impl HolidayCalendar for ChineseCalendar {
    fn supported_years(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year
    }

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    fn designation(&self, d: NaiveDate) -> Option<DayDesignation> {
        // Make-up workdays win; the loader never lets a date sit in both tables.
        if let Some(holiday) = self.makeup_workday(d) {
            return Some(DayDesignation::MakeupWorkday(holiday));
        }
        self.statutory_holiday(d).map(DayDesignation::StatutoryHoliday)
    }
}
