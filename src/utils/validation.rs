use crate::utils::error::{FlightError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects only the empty string. Airport codes are opaque, so whitespace is
/// left for the resolver to treat as a regular identifier.
pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(FlightError::InvalidFieldValue {
            field: field_name.to_string(),
            reason: "is empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    if addr.is_empty() {
        return Err(FlightError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Address cannot be empty".to_string(),
        });
    }

    addr.parse::<SocketAddr>()
        .map_err(|e| FlightError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(FlightError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FlightError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FlightError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("flights[0] source", "SFO").is_ok());
        assert!(validate_non_empty("flights[0] source", " ").is_ok());

        let err = validate_non_empty("flights[0] source", "").unwrap_err();
        assert_eq!(err.to_string(), "flights[0] source is empty");
    }

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("server.addr", "0.0.0.0:8080").is_ok());
        assert!(validate_socket_addr("server.addr", "[::1]:3000").is_ok());
        assert!(validate_socket_addr("server.addr", "").is_err());
        assert!(validate_socket_addr("server.addr", ":8080").is_err());
        assert!(validate_socket_addr("server.addr", "localhost").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("server.max_body_bytes", 2048, 1024).is_ok());
        assert!(validate_positive_number("server.max_body_bytes", 10, 1024).is_err());
    }

    #[test]
    fn test_validate_range_and_one_of() {
        assert!(validate_range("server.request_timeout_seconds", 10, 1, 300).is_ok());
        assert!(validate_range("server.request_timeout_seconds", 0, 1, 300).is_err());
        assert!(validate_range("server.request_timeout_seconds", 301, 1, 300).is_err());

        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "xml", &["compact", "json"]).is_err());
    }
}
