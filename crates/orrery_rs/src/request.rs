//! Loosely-typed chart requests, as a form or JSON body would deliver them.

use orrery_chart::{ChartError, ChartInput};
use serde::{Deserialize, Serialize};

/// Birth data with every field optional.
///
/// A missing `utc_offset_hours` means UTC; every other field is required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub utc_offset_hours: Option<f64>,
    pub latitude_deg: Option<f64>,
    pub longitude_deg: Option<f64>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ChartError> {
    value.ok_or(ChartError::Missing(field))
}

impl ChartRequest {
    /// Fill in a [`ChartInput`], reporting the first missing field, then
    /// validate its ranges.
    pub fn into_input(self) -> Result<ChartInput, ChartError> {
        let input = ChartInput {
            year: required(self.year, "year")?,
            month: required(self.month, "month")?,
            day: required(self.day, "day")?,
            hour: required(self.hour, "hour")?,
            minute: required(self.minute, "minute")?,
            utc_offset_hours: self.utc_offset_hours.unwrap_or(0.0),
            latitude_deg: required(self.latitude_deg, "latitude")?,
            longitude_deg: required(self.longitude_deg, "longitude")?,
        };
        input.validate()?;
        Ok(input)
    }
}

impl TryFrom<ChartRequest> for ChartInput {
    type Error = ChartError;

    fn try_from(request: ChartRequest) -> Result<Self, Self::Error> {
        request.into_input()
    }
}

impl From<ChartInput> for ChartRequest {
    fn from(input: ChartInput) -> Self {
        Self {
            year: Some(input.year),
            month: Some(input.month),
            day: Some(input.day),
            hour: Some(input.hour),
            minute: Some(input.minute),
            utc_offset_hours: Some(input.utc_offset_hours),
            latitude_deg: Some(input.latitude_deg),
            longitude_deg: Some(input.longitude_deg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> ChartRequest {
        ChartRequest {
            year: Some(1990),
            month: Some(6),
            day: Some(15),
            hour: Some(14),
            minute: Some(30),
            utc_offset_hours: Some(-5.0),
            latitude_deg: Some(40.7128),
            longitude_deg: Some(-74.006),
        }
    }

    #[test]
    fn complete_request_converts() {
        let input = full().into_input().unwrap();
        assert_eq!(input.year, 1990);
        assert_eq!(ChartRequest::from(input), full());
    }

    #[test]
    fn first_missing_field_is_reported() {
        let req = ChartRequest {
            hour: None,
            latitude_deg: None,
            ..full()
        };
        assert_eq!(req.into_input(), Err(ChartError::Missing("hour")));
    }

    #[test]
    fn missing_offset_means_utc() {
        let req = ChartRequest {
            utc_offset_hours: None,
            ..full()
        };
        assert_eq!(req.into_input().unwrap().utc_offset_hours, 0.0);
    }

    #[test]
    fn ranges_checked_after_presence() {
        let req = ChartRequest {
            month: Some(13),
            ..full()
        };
        assert!(matches!(
            ChartInput::try_from(req),
            Err(ChartError::OutOfRange { field: "month", .. })
        ));
    }

    #[test]
    fn deserializes_sparse_json() {
        let req: ChartRequest = serde_json::from_str(r#"{"year": 2000, "month": 1}"#).unwrap();
        assert_eq!(req.year, Some(2000));
        assert_eq!(req.into_input(), Err(ChartError::Missing("day")));
    }
}
