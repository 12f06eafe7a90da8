//! Diesel-backed event repository.

use diesel::prelude::*;

use crate::domain::{Event, NewEvent};

use super::error::PersistenceError;
use super::models::{EventChangeset, EventRow, NewEventRow};
use super::pool::DbPool;
use super::schema::events;

/// Repository for event rows with store-assigned identifiers.
#[derive(Clone)]
pub struct EventRepository {
    pool: DbPool,
}

impl EventRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Fetch every event. An empty table yields an empty vector.
    pub fn list(&self) -> Result<Vec<Event>, PersistenceError> {
        let mut conn = self.pool.get()?;
        let rows = events::table
            .select(EventRow::as_select())
            .order(events::id.asc())
            .load::<EventRow>(&mut conn)?;
        Ok(rows.into_iter().map(EventRow::into_domain).collect())
    }

    /// Fetch one event by id.
    pub fn find(&self, id: i32) -> Result<Option<Event>, PersistenceError> {
        let mut conn = self.pool.get()?;
        let row = events::table
            .find(id)
            .select(EventRow::as_select())
            .first::<EventRow>(&mut conn)
            .optional()?;
        Ok(row.map(EventRow::into_domain))
    }

    /// Insert a new event, returning it with its assigned id.
    pub fn insert(&self, event: &NewEvent) -> Result<Event, PersistenceError> {
        let mut conn = self.pool.get()?;
        let row = NewEventRow::from_details(event.details());
        let stored = conn.transaction(|conn| {
            diesel::insert_into(events::table)
                .values(&row)
                .returning(EventRow::as_returning())
                .get_result::<EventRow>(conn)
        })?;
        Ok(stored.into_domain())
    }

    /// Delete an event by id. Returns `false` when no row matched.
    pub fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get()?;
        let deleted =
            conn.transaction(|conn| diesel::delete(events::table.find(id)).execute(conn))?;
        Ok(deleted > 0)
    }

    /// Apply a partial update inside one transaction.
    ///
    /// Returns `false` without touching the row when the target is absent.
    pub fn update(&self, id: i32, changes: EventChangeset) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get()?;
        let updated = conn.transaction(|conn| -> Result<bool, diesel::result::Error> {
            let exists = events::table
                .find(id)
                .select(EventRow::as_select())
                .first::<EventRow>(conn)
                .optional()?;
            if exists.is_none() {
                return Ok(false);
            }
            if !changes.is_empty() {
                diesel::update(events::table.find(id))
                    .set(&changes)
                    .execute(conn)?;
            }
            Ok(true)
        })?;
        Ok(updated)
    }
}
