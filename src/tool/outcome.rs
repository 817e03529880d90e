use serde_json::json;

use crate::time::calendar::holiday::HolidayDetail;

/// Reply shown to the caller for malformed date arguments.
pub const MALFORMED_DATE_MESSAGE: &str = "错误：请输入正确的日期格式 (YYYY-MM-DD)";

/// Result of the four sentence-style operations.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SentenceOutcome {
    Success(String),
    ParseError
}

impl SentenceOutcome {
    pub fn render(&self) -> String {
        match self {
            SentenceOutcome::Success(text) => text.clone(),
            SentenceOutcome::ParseError => MALFORMED_DATE_MESSAGE.to_owned()
        }
    }
}

/// Result of the holiday detail operation.
///
/// `NotFound` (no named holiday on that date) and `ParseError` stay distinct
/// all the way to the wire.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum DetailOutcome {
    Found {
        name: String,
        is_official_rest_day: bool
    },
    NotFound,
    ParseError
}

impl DetailOutcome {
    /// `Found` as a JSON object, `NotFound` as JSON `null`, `ParseError` as
    /// the fixed message.
    pub fn render(&self) -> String {
        match self {
            DetailOutcome::Found { name, is_official_rest_day } => {
                json!({ "name": name, "is_official_rest_day": is_official_rest_day }).to_string()
            },
            DetailOutcome::NotFound => serde_json::Value::Null.to_string(),
            DetailOutcome::ParseError => MALFORMED_DATE_MESSAGE.to_owned()
        }
    }
}

impl From<Option<HolidayDetail>> for DetailOutcome {
    fn from(detail: Option<HolidayDetail>) -> DetailOutcome {
        match detail {
            Some(detail) => DetailOutcome::Found {
                name: detail.name().to_owned(),
                is_official_rest_day: detail.is_official_rest_day()
            },
            None => DetailOutcome::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::holiday::Holiday;

    #[test]
    fn test_sentence_render() {
        assert_eq!(SentenceOutcome::Success("2024-01-01 是节假日".to_owned()).render(), "2024-01-01 是节假日");
        assert_eq!(SentenceOutcome::ParseError.render(), MALFORMED_DATE_MESSAGE);
    }

    #[test]
    fn test_detail_render_found() {
        let outcome = DetailOutcome::from(Some(HolidayDetail::new(Holiday::SpringFestival, true)));
        let rendered: serde_json::Value = serde_json::from_str(&outcome.render()).unwrap();
        assert_eq!(rendered, json!({ "name": "Spring Festival", "is_official_rest_day": true }));
    }

    #[test]
    fn test_detail_render_distinguishes_absent_from_error() {
        let not_found = DetailOutcome::from(None).render();
        let parse_error = DetailOutcome::ParseError.render();
        assert_eq!(not_found, "null");
        assert_eq!(parse_error, MALFORMED_DATE_MESSAGE);
        assert_ne!(not_found, parse_error);
    }
}
