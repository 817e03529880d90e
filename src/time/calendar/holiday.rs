use std::fmt;

use serde::Deserialize;

/// Named holiday periods of the mainland China public holiday system.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Deserialize)]
pub enum Holiday {
    NewYearsDay,
    SpringFestival,
    TombSweepingDay,
    LabourDay,
    DragonBoatFestival,
    NationalDay,
    MidAutumnFestival
}

impl Holiday {
    /// English name, as reported by holiday detail lookups.
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::SpringFestival => "Spring Festival",
            Holiday::TombSweepingDay => "Tomb-sweeping Day",
            Holiday::LabourDay => "Labour Day",
            Holiday::DragonBoatFestival => "Dragon Boat Festival",
            Holiday::NationalDay => "National Day",
            Holiday::MidAutumnFestival => "Mid-autumn Festival"
        }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the published arrangement says about a specific date.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum DayDesignation {
    /// A rest day belonging to the holiday period.
    StatutoryHoliday(Holiday),
    /// A weekend day turned into a working day to make up for the period.
    MakeupWorkday(Holiday)
}

/// Holiday period a date is tied to, and whether the date is a rest day of
/// that period (`false` for make-up workdays).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct HolidayDetail {
    holiday: Holiday,
    is_official_rest_day: bool
}

impl HolidayDetail {
    pub fn new(holiday: Holiday, is_official_rest_day: bool) -> HolidayDetail {
        HolidayDetail { holiday, is_official_rest_day }
    }

    pub fn holiday(&self) -> Holiday {
        self.holiday
    }

    pub fn name(&self) -> &'static str {
        self.holiday.name()
    }

    pub fn is_official_rest_day(&self) -> bool {
        self.is_official_rest_day
    }
}

impl From<DayDesignation> for HolidayDetail {
    fn from(designation: DayDesignation) -> HolidayDetail {
        match designation {
            DayDesignation::StatutoryHoliday(holiday) => HolidayDetail::new(holiday, true),
            DayDesignation::MakeupWorkday(holiday) => HolidayDetail::new(holiday, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holiday_deserializes_from_variant_name() {
        let holiday: Holiday = serde_json::from_str("\"SpringFestival\"").unwrap();
        assert_eq!(holiday, Holiday::SpringFestival);
        assert_eq!(holiday.to_string(), "Spring Festival");
    }

    #[test]
    fn test_detail_from_designation() {
        let rest: HolidayDetail = DayDesignation::StatutoryHoliday(Holiday::NationalDay).into();
        assert!(rest.is_official_rest_day());
        assert_eq!(rest.name(), "National Day");

        let makeup: HolidayDetail = DayDesignation::MakeupWorkday(Holiday::LabourDay).into();
        assert!(!makeup.is_official_rest_day());
        assert_eq!(makeup.holiday(), Holiday::LabourDay);
    }
}
