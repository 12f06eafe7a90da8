//! SQLite persistence adapters using the Diesel ORM.
//!
//! Thin adapters only: repositories translate between Diesel row structs and
//! domain types, with no business logic. Row structs (`models`) and table
//! definitions (`schema`) stay internal to this module, and every database
//! failure is classified through [`error`] so handlers report store errors
//! uniformly.

pub mod error;
mod events;
mod models;
mod pool;
mod regions;
mod schema;
mod users;

pub use self::error::{map_store_error, PersistenceError};
pub use self::events::EventRepository;
pub use self::pool::{DbPool, PoolConfig, PoolError};
pub use self::regions::RegionRepository;
pub use self::users::{StoredUser, UserRepository};

pub(crate) use self::models::{EventChangeset, RegionChangeset};
