//! Liveness and readiness probes.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

/// Shared readiness flag flipped once startup work has finished.
#[derive(Debug, Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// Mark the service ready to receive traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Liveness probe. Answers as soon as the process can serve requests.
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HttpResponse::Ok().json(HealthBody { status: "live" })
}

/// Readiness probe. Reports 503 until migrations have run and the listener
/// is bound.
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    if state.is_ready() {
        HttpResponse::Ok().json(HealthBody { status: "ready" })
    } else {
        HttpResponse::ServiceUnavailable().json(HealthBody { status: "starting" })
    }
}
