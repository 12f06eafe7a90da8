//! Diesel-backed region repository.

use diesel::prelude::*;

use crate::domain::{Error, NocCode, Region};

use super::error::PersistenceError;
use super::models::{RegionChangeset, RegionRow};
use super::pool::DbPool;
use super::schema::regions;

/// Repository for region rows, keyed by NOC code.
#[derive(Clone)]
pub struct RegionRepository {
    pool: DbPool,
}

impl RegionRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Fetch every region. An empty table yields an empty vector.
    pub fn list(&self) -> Result<Vec<Region>, PersistenceError> {
        let mut conn = self.pool.get()?;
        let rows = regions::table
            .select(RegionRow::as_select())
            .order(regions::noc.asc())
            .load::<RegionRow>(&mut conn)?;
        rows.into_iter()
            .map(|row| row.into_domain().map_err(corrupt_row))
            .collect()
    }

    /// Fetch one region by its NOC code.
    pub fn find(&self, noc: &NocCode) -> Result<Option<Region>, PersistenceError> {
        let mut conn = self.pool.get()?;
        let row = regions::table
            .find(noc.as_str())
            .select(RegionRow::as_select())
            .first::<RegionRow>(&mut conn)
            .optional()?;
        row.map(|found| found.into_domain().map_err(corrupt_row))
            .transpose()
    }

    /// Insert a new region. A duplicate NOC surfaces as a unique violation.
    pub fn insert(&self, region: &Region) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get()?;
        let row = RegionRow::from_domain(region);
        conn.transaction(|conn| {
            diesel::insert_into(regions::table)
                .values(&row)
                .execute(conn)
                .map(|_| ())
        })?;
        Ok(())
    }

    /// Delete a region by NOC code. Returns `false` when no row matched.
    pub fn delete(&self, noc: &NocCode) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get()?;
        let deleted = conn.transaction(|conn| {
            diesel::delete(regions::table.find(noc.as_str())).execute(conn)
        })?;
        Ok(deleted > 0)
    }

    /// Apply a partial update inside one transaction.
    ///
    /// Returns `false` without touching the row when the target is absent;
    /// the merge never proceeds against a missing region.
    pub fn update(
        &self,
        noc: &NocCode,
        changes: RegionChangeset,
    ) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get()?;
        let updated = conn.transaction(|conn| -> Result<bool, diesel::result::Error> {
            let existing = regions::table
                .find(noc.as_str())
                .select(RegionRow::as_select())
                .first::<RegionRow>(conn)
                .optional()?;
            if existing.is_none() {
                return Ok(false);
            }
            if !changes.is_empty() {
                diesel::update(regions::table.find(noc.as_str()))
                    .set(&changes)
                    .execute(conn)?;
            }
            Ok(true)
        })?;
        Ok(updated)
    }
}

/// A stored row failed domain validation; report it as a query-level fault.
fn corrupt_row(error: Error) -> PersistenceError {
    PersistenceError::Query(error.message)
}
