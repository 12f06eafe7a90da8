//! Domain primitives and aggregates.
//!
//! Strongly typed entities shared by the API and persistence layers. Types
//! are immutable once constructed; invariants are enforced in constructors
//! and documented on each type.

pub mod credentials;
pub mod error;
pub mod event;
pub mod region;

pub use self::credentials::{CredentialsValidationError, LoginCredentials};
pub use self::error::{Error, ErrorCode};
pub use self::event::{Event, EventDetails, EventValidationError, NewEvent};
pub use self::region::{NocCode, NocCodeError, Region, RegionValidationError};

/// Convenient result alias for fallible handler and service code.
pub type ApiResult<T> = Result<T, Error>;
