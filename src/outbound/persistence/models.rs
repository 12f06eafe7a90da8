//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; they exist to satisfy
//! Diesel's type requirements and are converted to domain types at the
//! repository boundary.

use diesel::prelude::*;

use crate::domain::{Error, Event, EventDetails, NocCode, Region};

use super::schema::{events, regions, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Row struct serving reads and inserts on the regions table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = regions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct RegionRow {
    pub noc: String,
    pub region: String,
    pub notes: Option<String>,
}

impl RegionRow {
    pub(crate) fn from_domain(region: &Region) -> Self {
        Self {
            noc: region.noc.as_str().to_owned(),
            region: region.region.clone(),
            notes: region.notes.clone(),
        }
    }

    pub(crate) fn into_domain(self) -> Result<Region, Error> {
        let noc = NocCode::new(&self.noc)
            .map_err(|err| Error::internal(format!("corrupt NOC code in store: {err}")))?;
        Ok(Region {
            noc,
            region: self.region,
            notes: self.notes,
        })
    }
}

/// Changeset applying only the fields present in a PATCH body.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = regions)]
pub(crate) struct RegionChangeset {
    pub region: Option<String>,
    pub notes: Option<String>,
}

impl RegionChangeset {
    pub(crate) fn is_empty(&self) -> bool {
        self.region.is_none() && self.notes.is_none()
    }
}

/// Row struct for reading from the events table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct EventRow {
    pub id: i32,
    pub event_type: String,
    pub year: i32,
    pub country: String,
    pub host: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub participants: Option<i32>,
    pub highlights: Option<String>,
}

impl EventRow {
    pub(crate) fn into_domain(self) -> Event {
        Event {
            id: self.id,
            details: EventDetails {
                event_type: self.event_type,
                year: self.year,
                country: self.country,
                host: self.host,
                start: self.start,
                end: self.end,
                participants: self.participants,
                highlights: self.highlights,
            },
        }
    }
}

/// Insertable struct for creating new event records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub(crate) struct NewEventRow<'a> {
    pub event_type: &'a str,
    pub year: i32,
    pub country: &'a str,
    pub host: &'a str,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
    pub participants: Option<i32>,
    pub highlights: Option<&'a str>,
}

impl<'a> NewEventRow<'a> {
    pub(crate) fn from_details(details: &'a EventDetails) -> Self {
        Self {
            event_type: &details.event_type,
            year: details.year,
            country: &details.country,
            host: &details.host,
            start: details.start.as_deref(),
            end: details.end.as_deref(),
            participants: details.participants,
            highlights: details.highlights.as_deref(),
        }
    }
}

/// Changeset applying only the fields present in a PATCH body.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = events)]
pub(crate) struct EventChangeset {
    #[diesel(column_name = event_type)]
    pub event_type: Option<String>,
    pub year: Option<i32>,
    pub country: Option<String>,
    pub host: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub participants: Option<i32>,
    pub highlights: Option<String>,
}

impl EventChangeset {
    pub(crate) fn is_empty(&self) -> bool {
        self.event_type.is_none()
            && self.year.is_none()
            && self.country.is_none()
            && self.host.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.participants.is_none()
            && self.highlights.is_none()
    }
}
