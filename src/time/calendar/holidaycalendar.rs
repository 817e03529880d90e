use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::holiday::{DayDesignation, HolidayDetail};
use crate::time::rangeofdates::RangeOfDates;

/// Working-day calendar driven by published holiday arrangements.
///
/// Implementors supply the weekend rule, the per-date designation table and
/// the years the table covers. Every provided query refuses dates outside
/// those years with [`CalendarError::UnsupportedDate`] instead of guessing.
pub trait HolidayCalendar: Send + Sync {
    fn supported_years(&self) -> RangeInclusive<i32>;

    fn is_weekend(&self, d: NaiveDate) -> bool;

    /// Arrangement entry for `d`, without checking the supported years.
    fn designation(&self, d: NaiveDate) -> Option<DayDesignation>;

    fn ensure_supported(&self, d: NaiveDate) -> Result<(), CalendarError> {
        let years = self.supported_years();
        if years.contains(&d.year()) {
            Ok(())
        } else {
            Err(CalendarError::UnsupportedDate {
                date: d,
                start_year: *years.start(),
                end_year: *years.end()
            })
        }
    }

    fn is_workday(&self, d: NaiveDate) -> Result<bool, CalendarError> {
        self.ensure_supported(d)?;
        Ok(is_workday_unchecked(self, d))
    }

    fn is_holiday(&self, d: NaiveDate) -> Result<bool, CalendarError> {
        Ok(!self.is_workday(d)?)
    }

    fn holiday_detail(&self, d: NaiveDate) -> Result<Option<HolidayDetail>, CalendarError> {
        self.ensure_supported(d)?;
        Ok(self.designation(d).map(HolidayDetail::from))
    }

    /// Non-working days in `[start, end]`, ascending.
    ///
    /// With `include_weekend` every day off is returned; without it only the
    /// rest days listed in the arrangement table.
    fn holidays_between(&self,
                        start: NaiveDate,
                        end: NaiveDate,
                        include_weekend: bool) -> Result<Vec<NaiveDate>, CalendarError> {
        self.ensure_supported(start)?;
        self.ensure_supported(end)?;
        let range = RangeOfDates::new(start, end);
        let holidays = range
            .iter()
            .filter(|&d| {
                if include_weekend {
                    !is_workday_unchecked(self, d)
                } else {
                    matches!(self.designation(d), Some(DayDesignation::StatutoryHoliday(_)))
                }
            })
            .collect();
        Ok(holidays)
    }

    /// Working days in `[start, end]`, ascending.
    ///
    /// Without `include_weekend`, make-up workdays falling on a weekend are
    /// left out.
    fn workdays_between(&self,
                        start: NaiveDate,
                        end: NaiveDate,
                        include_weekend: bool) -> Result<Vec<NaiveDate>, CalendarError> {
        self.ensure_supported(start)?;
        self.ensure_supported(end)?;
        let range = RangeOfDates::new(start, end);
        let workdays = range
            .iter()
            .filter(|&d| is_workday_unchecked(self, d) && (include_weekend || !self.is_weekend(d)))
            .collect();
        Ok(workdays)
    }
}

fn is_workday_unchecked<C: HolidayCalendar + ?Sized>(calendar: &C, d: NaiveDate) -> bool {
    match calendar.designation(d) {
        Some(DayDesignation::MakeupWorkday(_)) => true,
        Some(DayDesignation::StatutoryHoliday(_)) => false,
        None => !calendar.is_weekend(d)
    }
}
