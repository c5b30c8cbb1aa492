//! Collapses an unordered list of direct flights into the single itinerary
//! they form.
//!
//! A valid chain has exactly one airport that is only ever departed from and
//! exactly one that is only ever arrived at. Both are found with a set
//! difference, so no traversal of the chain is needed. Interior airports are
//! not checked for balanced in/out degree, and connectivity is not verified
//! once both endpoints are found.

use crate::domain::model::{Airport, FlightsInput, Itinerary, Segment};
use crate::utils::error::{self, ResolveError};
use crate::utils::validation::Validate;
use std::collections::HashSet;

/// Returns the itinerary from the first source to the final destination.
///
/// A single segment is returned unchanged, even when it starts and ends at
/// the same airport.
///
/// # Errors
///
/// - [`ResolveError::NoSegments`] for an empty input
/// - [`ResolveError::Loop`] when every source is also a destination (or the
///   other way round)
/// - [`ResolveError::BrokenPath`] when there is more than one candidate start
///   or end: diverging, merging or disconnected flights
pub fn resolve(segments: &[Segment]) -> Result<Itinerary, ResolveError> {
    match segments {
        [] => return Err(ResolveError::NoSegments),
        [single] => return Ok(single.clone()),
        _ => {}
    }

    let sources: HashSet<&Airport> = segments.iter().map(|s| &s.source).collect();
    let destinations: HashSet<&Airport> = segments.iter().map(|s| &s.dest).collect();

    let start = exclusive_member(&sources, &destinations)?;
    let end = exclusive_member(&destinations, &sources)?;

    tracing::debug!(
        segments = segments.len(),
        source = %start,
        dest = %end,
        "resolved itinerary"
    );

    Ok(Segment::new(start.clone(), end.clone()))
}

/// Validates a decoded request and resolves its flights.
pub fn resolve_input(input: &FlightsInput) -> error::Result<Itinerary> {
    input.validate()?;
    Ok(resolve(&input.flights)?)
}

/// The one airport in `set` that never appears in `other`.
pub fn exclusive_member<'a>(
    set: &HashSet<&'a Airport>,
    other: &HashSet<&'a Airport>,
) -> Result<&'a Airport, ResolveError> {
    let mut candidates = set.difference(other).copied();

    match (candidates.next(), candidates.next()) {
        (None, _) => Err(ResolveError::Loop),
        (Some(airport), None) => Ok(airport),
        (Some(_), Some(_)) => Err(ResolveError::BrokenPath),
    }
}
