//! Event endpoints.
//!
//! Mirrors the region endpoints: open reads, token-gated mutations, with the
//! store assigning each event's numeric id at creation.

use actix_web::{delete, get, patch, post, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{ApiResult, Error, Event, EventDetails, NewEvent};
use crate::outbound::persistence::{EventChangeset, EventRepository};

use super::{run_query, AuthenticatedUser, Message};

/// Body accepted by `POST /events`. The id is never client-supplied.
#[derive(Debug, Deserialize)]
pub struct NewEventPayload {
    #[serde(rename = "type")]
    event_type: String,
    year: i32,
    country: String,
    host: String,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
    #[serde(default)]
    participants: Option<i32>,
    #[serde(default)]
    highlights: Option<String>,
}

impl NewEventPayload {
    fn into_details(self) -> EventDetails {
        EventDetails {
            event_type: self.event_type,
            year: self.year,
            country: self.country,
            host: self.host,
            start: self.start,
            end: self.end,
            participants: self.participants,
            highlights: self.highlights,
        }
    }
}

/// Body accepted by `PATCH /events/{id}`. Absent fields are left alone.
#[derive(Debug, Default, Deserialize)]
pub struct EventPatchPayload {
    #[serde(rename = "type", default)]
    event_type: Option<String>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
    #[serde(default)]
    participants: Option<i32>,
    #[serde(default)]
    highlights: Option<String>,
}

fn event_not_found(id: i32) -> Error {
    Error::not_found(format!("Event {id} not found."))
}

#[get("/events")]
pub async fn list_events(repo: web::Data<EventRepository>) -> ApiResult<web::Json<Vec<Event>>> {
    let repo = repo.get_ref().clone();
    let events = run_query(move || repo.list()).await?;
    Ok(web::Json(events))
}

#[get("/events/{id}")]
pub async fn get_event(
    repo: web::Data<EventRepository>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Event>> {
    let id = path.into_inner();
    let repo = repo.get_ref().clone();
    let found = run_query(move || repo.find(id)).await?;
    found.map(web::Json).ok_or_else(|| event_not_found(id))
}

#[post("/events")]
pub async fn add_event(
    _user: AuthenticatedUser,
    repo: web::Data<EventRepository>,
    payload: web::Json<NewEventPayload>,
) -> ApiResult<web::Json<Message>> {
    let event = NewEvent::new(payload.into_inner().into_details())
        .map_err(|err| Error::invalid_request(err.to_string()))?;

    let repo = repo.get_ref().clone();
    let stored = run_query(move || repo.insert(&event)).await?;
    info!(id = stored.id, "event created");
    Ok(web::Json(Message::new(format!(
        "Event added with id= {}",
        stored.id
    ))))
}

#[delete("/events/{id}")]
pub async fn delete_event(
    _user: AuthenticatedUser,
    repo: web::Data<EventRepository>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Message>> {
    let id = path.into_inner();
    let repo = repo.get_ref().clone();
    let deleted = run_query(move || repo.delete(id)).await?;
    if deleted {
        info!(id, "event deleted");
        Ok(web::Json(Message::new(format!("Event {id} deleted."))))
    } else {
        Err(event_not_found(id))
    }
}

#[patch("/events/{id}")]
pub async fn update_event(
    _user: AuthenticatedUser,
    repo: web::Data<EventRepository>,
    path: web::Path<i32>,
    payload: web::Json<EventPatchPayload>,
) -> ApiResult<web::Json<Message>> {
    let id = path.into_inner();
    let patch = payload.into_inner();
    for (field, value) in [
        ("event type", patch.event_type.as_deref()),
        ("country", patch.country.as_deref()),
        ("host", patch.host.as_deref()),
    ] {
        if value.is_some_and(|text| text.trim().is_empty()) {
            return Err(Error::invalid_request(format!(
                "{field} must not be empty"
            )));
        }
    }
    let changes = EventChangeset {
        event_type: patch.event_type,
        year: patch.year,
        country: patch.country,
        host: patch.host,
        start: patch.start,
        end: patch.end,
        participants: patch.participants,
        highlights: patch.highlights,
    };

    let repo = repo.get_ref().clone();
    let updated = run_query(move || repo.update(id, changes)).await?;
    if updated {
        info!(id, "event updated");
        Ok(web::Json(Message::new(format!(
            "Event with id={id} updated."
        ))))
    } else {
        Err(event_not_found(id))
    }
}
