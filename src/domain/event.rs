//! Event entity with a surrogate numeric identifier.

use std::fmt;

use serde::Serialize;

/// Validation failures raised when constructing a [`NewEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// The event type was missing or blank.
    EmptyType,
    /// The host country name was missing or blank.
    EmptyCountry,
    /// The host city name was missing or blank.
    EmptyHost,
}

impl fmt::Display for EventValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyType => write!(f, "event type must not be empty"),
            Self::EmptyCountry => write!(f, "country must not be empty"),
            Self::EmptyHost => write!(f, "host must not be empty"),
        }
    }
}

impl std::error::Error for EventValidationError {}

/// Descriptive attributes shared by stored and not-yet-stored events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetails {
    /// Summer or winter games.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Year the games were held.
    pub year: i32,
    /// Host country.
    pub country: String,
    /// Host city.
    pub host: String,
    /// Opening date, free-format text from the source data.
    pub start: Option<String>,
    /// Closing date, free-format text from the source data.
    pub end: Option<String>,
    /// Total participant count.
    pub participants: Option<i32>,
    /// Free-text highlights.
    pub highlights: Option<String>,
}

/// A persisted event with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Surrogate primary key assigned at creation.
    pub id: i32,
    #[serde(flatten)]
    pub details: EventDetails,
}

/// A validated event payload awaiting persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent(EventDetails);

impl NewEvent {
    /// Validate the required descriptive fields.
    pub fn new(details: EventDetails) -> Result<Self, EventValidationError> {
        if details.event_type.trim().is_empty() {
            return Err(EventValidationError::EmptyType);
        }
        if details.country.trim().is_empty() {
            return Err(EventValidationError::EmptyCountry);
        }
        if details.host.trim().is_empty() {
            return Err(EventValidationError::EmptyHost);
        }
        Ok(Self(details))
    }

    /// The validated details.
    pub fn details(&self) -> &EventDetails {
        &self.0
    }

    /// Consume the wrapper, yielding the validated details.
    pub fn into_details(self) -> EventDetails {
        self.0
    }
}
