use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    /// The calendar holds no arrangement data for the year of `date`.
    #[error("no holiday data for {date}: supported years are {start_year} to {end_year}")]
    UnsupportedDate {
        date: NaiveDate,
        start_year: i32,
        end_year: i32
    },

    #[error("invalid holiday data: {0}")]
    InvalidData(String),

    #[error("failed to read holiday data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse holiday data: {0}")]
    Json(#[from] serde_json::Error)
}

impl CalendarError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}
