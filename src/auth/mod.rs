//! Authentication building blocks.
//!
//! Password hashing, token issuance, and token validation. Stateless by
//! design: a token cannot be revoked before its expiry, only outlived.

pub mod password;
pub mod token;

pub use self::token::{Claims, TokenService};
