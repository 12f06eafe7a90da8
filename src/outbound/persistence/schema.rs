//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered API users.
    users (id) {
        /// Surrogate primary key, assigned by the store.
        id -> Integer,
        /// Login key; unique.
        email -> Text,
        /// Salted scrypt hash in PHC string format. Never plaintext.
        password_hash -> Text,
    }
}

diesel::table! {
    /// Regions keyed by their three-letter NOC code.
    regions (noc) {
        /// Natural primary key: 3-character NOC code.
        noc -> Text,
        /// Display name.
        region -> Text,
        /// Free-text notes.
        notes -> Nullable<Text>,
    }
}

diesel::table! {
    /// Paralympic games events.
    events (id) {
        /// Surrogate primary key, assigned by the store.
        id -> Integer,
        #[sql_name = "type"]
        event_type -> Text,
        year -> Integer,
        country -> Text,
        host -> Text,
        start -> Nullable<Text>,
        end -> Nullable<Text>,
        participants -> Nullable<Integer>,
        highlights -> Nullable<Text>,
    }
}
