//! Shared harness for endpoint tests.
//!
//! Each test builds the full application against a fresh temp-file SQLite
//! database, so tests exercise the real routing table, extractors, and
//! migrations rather than hand-wired fixtures.

#![allow(dead_code)]

use std::fmt;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App, Error};
use serde_json::Value;
use tempfile::NamedTempFile;

use paralympics_api::api::{self, health::HealthState};
use paralympics_api::auth::TokenService;
use paralympics_api::outbound::persistence::{
    DbPool, EventRepository, PoolConfig, RegionRepository, UserRepository,
};

const TEST_SECRET: &[u8] = b"integration-test-signing-secret!";

/// Application state backed by a throwaway database file.
///
/// The temp file must outlive the pool, hence the guard field.
pub struct TestContext {
    pub pool: DbPool,
    pub tokens: web::Data<TokenService>,
    regions: web::Data<RegionRepository>,
    events: web::Data<EventRepository>,
    users: web::Data<UserRepository>,
    health: web::Data<HealthState>,
    _db: NamedTempFile,
}

impl TestContext {
    pub fn new() -> Self {
        let db = NamedTempFile::new().expect("temp database file");
        let url = db.path().to_string_lossy().into_owned();
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(2)).expect("pool builds");
        pool.run_migrations().expect("migrations apply");

        let health = web::Data::new(HealthState::default());
        health.mark_ready();

        Self {
            tokens: web::Data::new(TokenService::new(TEST_SECRET)),
            regions: web::Data::new(RegionRepository::new(pool.clone())),
            events: web::Data::new(EventRepository::new(pool.clone())),
            users: web::Data::new(UserRepository::new(pool.clone())),
            health,
            pool,
            _db: db,
        }
    }

    /// Initialise the application with the same wiring the binary uses.
    pub async fn app(
        &self,
    ) -> impl Service<
        Request,
        Response = ServiceResponse<impl MessageBody<Error: fmt::Debug>>,
        Error = Error,
    > {
        test::init_service(
            App::new()
                .app_data(api::json_config())
                .app_data(api::path_config())
                .app_data(self.tokens.clone())
                .app_data(self.regions.clone())
                .app_data(self.events.clone())
                .app_data(self.users.clone())
                .app_data(self.health.clone())
                .configure(api::configure),
        )
        .await
    }
}

pub async fn get<S, B>(app: &S, path: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get().uri(path).to_request();
    test::call_service(app, req).await
}

pub async fn post_json<S, B>(app: &S, path: &str, body: Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(path)
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn post_json_auth<S, B>(
    app: &S,
    path: &str,
    token: &str,
    body: Value,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(path)
        .insert_header(("Authorization", token))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn patch_json_auth<S, B>(
    app: &S,
    path: &str,
    token: &str,
    body: Value,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::patch()
        .uri(path)
        .insert_header(("Authorization", token))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn delete_auth<S, B>(app: &S, path: &str, token: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::delete()
        .uri(path)
        .insert_header(("Authorization", token))
        .to_request();
    test::call_service(app, req).await
}

/// Register a fresh user and log in, returning a valid bearer token.
pub async fn token_for<S, B>(app: &S, email: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
    B::Error: fmt::Debug,
{
    let resp = post_json(
        app,
        "/register",
        serde_json::json!({"email": email, "password": password}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED, "registration succeeds");

    let resp = post_json(
        app,
        "/login",
        serde_json::json!({"email": email, "password": password}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED, "login succeeds");

    let body: Value = test::read_body_json(resp).await;
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_owned()
}

/// Read the response body as JSON.
pub async fn body_json<B>(resp: ServiceResponse<B>) -> Value
where
    B: MessageBody,
    B::Error: fmt::Debug,
{
    test::read_body_json(resp).await
}
