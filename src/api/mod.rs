//! REST API modules.
//!
//! Handler registration is shared by the binary and the test harness through
//! [`configure`], so both exercise the same routing table.

pub mod events;
pub mod extract;
pub mod health;
pub mod regions;
pub mod users;

use actix_web::web;
use serde::Serialize;

use crate::domain::Error;
use crate::outbound::persistence::{map_store_error, PersistenceError};

pub use self::extract::AuthenticatedUser;

/// Plain confirmation body returned by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Register every route on the given service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(regions::list_regions)
        .service(regions::get_region)
        .service(regions::add_region)
        .service(regions::delete_region)
        .service(regions::update_region)
        .service(events::list_events)
        .service(events::get_event)
        .service(events::add_event)
        .service(events::delete_event)
        .service(events::update_event)
        .service(users::login)
        .service(users::register)
        .service(health::live)
        .service(health::ready);
}

/// JSON extractor configuration producing the standard error envelope for
/// malformed bodies.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(format!("invalid JSON body: {err}")).into())
}

/// Path extractor configuration producing the standard error envelope for
/// unparseable path parameters.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| Error::invalid_request(format!("invalid path parameter: {err}")).into())
}

/// Run a repository operation on the blocking thread pool, classifying every
/// store failure through the shared persistence mapping.
pub(crate) async fn run_query<T, F>(f: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, PersistenceError> + Send + 'static,
    T: Send + 'static,
{
    run_query_raw(f).await?.map_err(map_store_error)
}

/// Like [`run_query`] but hands the raw [`PersistenceError`] back so callers
/// can attach context to unique violations.
pub(crate) async fn run_query_raw<T, F>(f: F) -> Result<Result<T, PersistenceError>, Error>
where
    F: FnOnce() -> Result<T, PersistenceError> + Send + 'static,
    T: Send + 'static,
{
    actix_web::web::block(f)
        .await
        .map_err(|err| Error::internal(format!("blocking task failed: {err}")))
}
