//! Request extractors.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::TokenService;
use crate::domain::Error;

/// Proof that the request carried a valid bearer token.
///
/// Every mutating handler takes this extractor as an argument, so the
/// authentication decision is visible in the handler signature rather than
/// buried in middleware. The token is the raw `Authorization` header value,
/// no scheme prefix.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    /// Subject claim of the validated token.
    pub user_id: i32,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| Error::internal("token service is not registered as app data"))?;
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::unauthorized("Authentication token missing"))?;
    let user_id = tokens.validate(token)?;
    Ok(AuthenticatedUser { user_id })
}
