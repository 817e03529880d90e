use chrono::{
    Days,
    NaiveDate
};

/// Inclusive range of calendar dates.
///
/// The bounds are kept in the order given. A range whose start lies after
/// its end is empty, so enumerating `2024-01-10..2024-01-01` yields nothing.
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> RangeOfDates {
        RangeOfDates { start_date, end_date }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            ((self.end_date - self.start_date).num_days() + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_date > self.end_date
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0
        }
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates.start_date() + Days::new(self.index as u64);
            self.index += 1;
            Some(result)
        } else {
            None
        }
    }
}
