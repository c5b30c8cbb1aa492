//! `POST /calculate`: collapses the posted flights into one itinerary.

use axum::http::Method;
use axum::Json;
use tracing::{debug, warn};

use super::error::ApiError;
use super::extract::ValidatedJson;
use crate::core::resolve;
use crate::domain::model::{FlightOutput, FlightsInput};

/// Calculate handler.
///
/// # Response
///
/// - 200 OK: `{"flight": {"source": "...", "dest": "..."}}`
/// - 400 Bad Request: body is not valid JSON
/// - 415 Unsupported Media Type: content type is not `application/json`
/// - 422 Unprocessable Entity: empty input, empty airport, loop or broken path
///
/// # Example
///
/// ```ignore
/// POST /calculate HTTP/1.1
/// Content-Type: application/json
///
/// {"flights": [{"source": "ATL", "dest": "EWR"}, {"source": "SFO", "dest": "ATL"}]}
///
/// HTTP/1.1 200 OK
///
/// {"flight": {"source": "SFO", "dest": "EWR"}}
/// ```
pub async fn calculate_handler(
    ValidatedJson(input): ValidatedJson<FlightsInput>,
) -> Result<Json<FlightOutput>, ApiError> {
    debug!(flights = input.flights.len(), "calculating itinerary");

    let flight = resolve(&input.flights).inspect_err(|e| {
        warn!(flights = input.flights.len(), error = %e, "flights do not form an itinerary");
    })?;

    Ok(Json(FlightOutput { flight }))
}

/// Any method other than POST on `/calculate`.
pub async fn method_not_allowed(method: Method) -> ApiError {
    debug!(method = %method, "method not allowed on /calculate");
    ApiError::MethodNotAllowed
}
