//! Region endpoints.
//!
//! Reads are open; every mutation requires a valid bearer token, which the
//! [`AuthenticatedUser`] extractor makes explicit in each handler signature.

use actix_web::{delete, get, patch, post, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{ApiResult, Error, NocCode, Region};
use crate::outbound::persistence::{
    map_store_error, PersistenceError, RegionChangeset, RegionRepository,
};

use super::{run_query, run_query_raw, AuthenticatedUser, Message};

/// Body accepted by `POST /regions`.
#[derive(Debug, Deserialize)]
pub struct NewRegionPayload {
    #[serde(rename = "NOC")]
    noc: String,
    region: String,
    #[serde(default)]
    notes: Option<String>,
}

/// Body accepted by `PATCH /regions/{code}`. Absent fields are left alone.
#[derive(Debug, Default, Deserialize)]
pub struct RegionPatchPayload {
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

fn region_not_found(code: &str) -> Error {
    Error::not_found(format!("Region {code} not found."))
}

/// A code that cannot be a NOC code cannot name a stored region either.
fn parse_path_code(code: &str) -> Result<NocCode, Error> {
    NocCode::new(code).map_err(|_| region_not_found(code))
}

#[get("/regions")]
pub async fn list_regions(
    repo: web::Data<RegionRepository>,
) -> ApiResult<web::Json<Vec<Region>>> {
    let repo = repo.get_ref().clone();
    let regions = run_query(move || repo.list()).await?;
    Ok(web::Json(regions))
}

#[get("/regions/{code}")]
pub async fn get_region(
    repo: web::Data<RegionRepository>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Region>> {
    let code = path.into_inner();
    let noc = parse_path_code(&code)?;
    let display = noc.clone();
    let repo = repo.get_ref().clone();
    let found = run_query(move || repo.find(&noc)).await?;
    found
        .map(web::Json)
        .ok_or_else(|| region_not_found(display.as_str()))
}

#[post("/regions")]
pub async fn add_region(
    _user: AuthenticatedUser,
    repo: web::Data<RegionRepository>,
    payload: web::Json<NewRegionPayload>,
) -> ApiResult<web::Json<Message>> {
    let payload = payload.into_inner();
    let noc =
        NocCode::new(&payload.noc).map_err(|err| Error::invalid_request(err.to_string()))?;
    let region = Region::new(noc, payload.region, payload.notes)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let code = region.noc.clone();

    let repo = repo.get_ref().clone();
    let outcome = run_query_raw(move || repo.insert(&region)).await?;
    match outcome {
        Ok(()) => {
            info!(noc = %code, "region created");
            Ok(web::Json(Message::new(format!(
                "Region added with NOC= {code}"
            ))))
        }
        Err(PersistenceError::UniqueViolation(_)) => Err(Error::conflict(format!(
            "Region {code} already exists."
        ))),
        Err(err) => Err(map_store_error(err)),
    }
}

#[delete("/regions/{code}")]
pub async fn delete_region(
    _user: AuthenticatedUser,
    repo: web::Data<RegionRepository>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Message>> {
    let code = path.into_inner();
    let noc = parse_path_code(&code)?;
    let shown = noc.clone();

    let repo = repo.get_ref().clone();
    let deleted = run_query(move || repo.delete(&noc)).await?;
    if deleted {
        info!(noc = %shown, "region deleted");
        Ok(web::Json(Message::new(format!("Region {shown} deleted."))))
    } else {
        Err(region_not_found(shown.as_str()))
    }
}

#[patch("/regions/{code}")]
pub async fn update_region(
    _user: AuthenticatedUser,
    repo: web::Data<RegionRepository>,
    path: web::Path<String>,
    payload: web::Json<RegionPatchPayload>,
) -> ApiResult<web::Json<Message>> {
    let code = path.into_inner();
    let noc = parse_path_code(&code)?;
    let patch = payload.into_inner();
    if let Some(name) = &patch.region {
        if name.trim().is_empty() {
            return Err(Error::invalid_request("region name must not be empty"));
        }
    }
    let changes = RegionChangeset {
        region: patch.region,
        notes: patch.notes,
    };
    let shown = noc.clone();

    let repo = repo.get_ref().clone();
    let updated = run_query(move || repo.update(&noc, changes)).await?;
    if updated {
        info!(noc = %shown, "region updated");
        Ok(web::Json(Message::new(format!("Region {shown} updated."))))
    } else {
        Err(region_not_found(shown.as_str()))
    }
}
