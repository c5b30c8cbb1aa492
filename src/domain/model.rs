use crate::utils::error::{FlightError, Result};
use crate::utils::validation::{validate_non_empty, Validate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Treats an explicit `null` like a missing field so that it reaches
/// validation instead of failing to decode.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Opaque, case-sensitive airport identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Airport(String);

impl Airport {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Airport {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Airport {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// A single direct flight from `source` to `dest`.
///
/// A resolved itinerary is also a `Segment`: the first source and the final
/// destination of the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: Airport,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dest: Airport,
}

impl Segment {
    pub fn new(source: impl Into<Airport>, dest: impl Into<Airport>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.dest)
    }
}

pub type Itinerary = Segment;

/// Request body of `POST /calculate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightsInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub flights: Vec<Segment>,
}

/// Response body of a successful `POST /calculate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightOutput {
    pub flight: Itinerary,
}

impl Validate for FlightsInput {
    // 遇到第一個錯誤就停止
    fn validate(&self) -> Result<()> {
        if self.flights.is_empty() {
            return Err(FlightError::ValidationError {
                message: "at least one flight expected".to_string(),
            });
        }

        for (i, flight) in self.flights.iter().enumerate() {
            validate_non_empty(&format!("flights[{}] source", i), flight.source.as_str())?;
            validate_non_empty(&format!("flights[{}] destination", i), flight.dest.as_str())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_json_round_trip() {
        let raw = r#"{"source":"SFO","dest":"EWR"}"#;
        let segment: Segment = serde_json::from_str(raw).unwrap();

        assert_eq!(segment, Segment::new("SFO", "EWR"));
        assert_eq!(serde_json::to_string(&segment).unwrap(), raw);
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let input: FlightsInput = serde_json::from_str("{}").unwrap();
        assert!(input.flights.is_empty());

        let input: FlightsInput = serde_json::from_str(r#"{"flights":[{"source":"SFO"}]}"#).unwrap();
        assert_eq!(input.flights[0].source, Airport::new("SFO"));
        assert!(input.flights[0].dest.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let input: FlightsInput = serde_json::from_str(r#"{"flights":null}"#).unwrap();
        assert!(input.flights.is_empty());
        assert_eq!(
            input.validate().unwrap_err().to_string(),
            "at least one flight expected"
        );

        let input: FlightsInput =
            serde_json::from_str(r#"{"flights":[{"source":null,"dest":"B"}]}"#).unwrap();
        assert!(input.flights[0].source.is_empty());
        assert_eq!(input.flights[0].dest, Airport::new("B"));
        assert_eq!(
            input.validate().unwrap_err().to_string(),
            "flights[0] source is empty"
        );
    }

    #[test]
    fn test_wrong_types_still_fail_to_decode() {
        assert!(serde_json::from_str::<FlightsInput>(r#"{"flights":"SFO"}"#).is_err());
        assert!(serde_json::from_str::<Segment>(r#"{"source":1,"dest":"B"}"#).is_err());
    }

    #[test]
    fn test_airport_is_case_sensitive() {
        assert_ne!(Airport::new("sfo"), Airport::new("SFO"));
    }

    #[test]
    fn test_validate_requires_flights() {
        let err = FlightsInput::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "at least one flight expected");
    }

    #[test]
    fn test_validate_reports_first_empty_field() {
        let input = FlightsInput {
            flights: vec![
                Segment::new("SFO", "ATL"),
                Segment::new("ATL", ""),
                Segment::new("", "EWR"),
            ],
        };

        let err = input.validate().unwrap_err();
        assert_eq!(err.to_string(), "flights[1] destination is empty");
    }

    #[test]
    fn test_validate_accepts_complete_segments() {
        let input = FlightsInput {
            flights: vec![Segment::new("SFO", "ATL"), Segment::new("ATL", "EWR")],
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_output_shape() {
        let output = FlightOutput {
            flight: Segment::new("SFO", "EWR"),
        };
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            serde_json::json!({"flight": {"source": "SFO", "dest": "EWR"}})
        );
    }
}
