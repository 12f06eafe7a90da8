//! Registration and login endpoints.

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{password, TokenService};
use crate::domain::{ApiResult, Error, LoginCredentials};
use crate::outbound::persistence::{map_store_error, PersistenceError, UserRepository};

use super::{run_query, run_query_raw, Message};

/// Body accepted by both `POST /register` and `POST /login`.
///
/// Fields are optional so that missing keys produce the credential error
/// responses rather than a generic deserialisation failure.
#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, Serialize)]
struct TokenBody {
    token: String,
}

#[post("/register")]
pub async fn register(
    repo: web::Data<UserRepository>,
    payload: web::Json<CredentialsPayload>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let credentials =
        LoginCredentials::try_from_parts(payload.email.as_deref(), payload.password.as_deref())
            .map_err(|_| Error::invalid_request("Missing email or password"))?;
    let email = credentials.email().to_owned();

    let store = repo.get_ref().clone();
    let probe = email.clone();
    if run_query(move || store.find_by_email(&probe)).await?.is_some() {
        return Err(Error::conflict("User already exists. Please Log in."));
    }

    // Scrypt is deliberately slow; keep it off the async workers.
    let plain = credentials.password().to_owned();
    let hash = web::block(move || password::hash_password(&plain))
        .await
        .map_err(|err| Error::internal(format!("blocking task failed: {err}")))??;

    let store = repo.get_ref().clone();
    let insert_email = email.clone();
    let outcome = run_query_raw(move || store.insert(&insert_email, &hash)).await?;
    match outcome {
        Ok(user) => {
            info!(email = %email, user_id = user.id, "user registered");
            Ok(HttpResponse::Created().json(Message::new("Successfully registered.")))
        }
        // Lost a registration race after the existence probe.
        Err(PersistenceError::UniqueViolation(_)) => {
            Err(Error::conflict("User already exists. Please Log in."))
        }
        Err(err) => Err(map_store_error(err)),
    }
}

#[post("/login")]
pub async fn login(
    repo: web::Data<UserRepository>,
    tokens: web::Data<TokenService>,
    payload: web::Json<CredentialsPayload>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let credentials =
        LoginCredentials::try_from_parts(payload.email.as_deref(), payload.password.as_deref())
            .map_err(|_| Error::unauthorized("Missing email or password"))?;
    let email = credentials.email().to_owned();

    let store = repo.get_ref().clone();
    let lookup = email.clone();
    let user = run_query(move || store.find_by_email(&lookup))
        .await?
        .ok_or_else(|| {
            Error::unauthorized("No account for that email address. Please register.")
        })?;

    let hash = user.password_hash.clone();
    let candidate = credentials.password().to_owned();
    let verified = web::block(move || password::verify_password(&hash, &candidate))
        .await
        .map_err(|err| Error::internal(format!("blocking task failed: {err}")))?;
    if !verified {
        return Err(Error::forbidden("Incorrect password."));
    }

    let token = tokens.issue(user.id)?;
    info!(email = %email, user_id = user.id, "user logged in");
    Ok(HttpResponse::Created().json(TokenBody { token }))
}
