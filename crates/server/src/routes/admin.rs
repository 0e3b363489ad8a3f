//! Content editing surface, mounted under `/admin` when enabled.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use models::content::RankPatch;
use models::{contact_info, contact_message, distributor_info, hero_section};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service::content_admin::{self, ContentKind};
use service::{contact, singletons};

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/content/:kind", get(list_content).post(create_content))
        .route(
            "/content/:kind/:id",
            get(get_content).put(replace_content).patch(patch_content).delete(delete_content),
        )
        .route("/contact-info", get(get_contact_info).put(put_contact_info))
        .route("/hero", get(get_hero).put(put_hero))
        .route("/distributor", get(get_distributor).put(put_distributor))
        .route("/contact-messages", get(list_messages))
        .route("/contact-messages/mark-read", post(mark_read))
        .route("/contact-messages/:id", axum::routing::delete(delete_message))
}

fn kind_of(raw: &str) -> Result<ContentKind, JsonApiError> {
    raw.parse::<ContentKind>().map_err(|e| JsonApiError::from_service(e, false))
}

async fn list_content(State(state): State<ServerState>, Path(kind): Path<String>) -> Result<Json<Value>, JsonApiError> {
    let kind = kind_of(&kind)?;
    let rows = content_admin::list(&state.db, kind).await.map_err(|e| state.reject(e))?;
    Ok(Json(rows))
}

async fn get_content(
    State(state): State<ServerState>,
    path: Result<Path<(String, i32)>, PathRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Path((kind, id)) = path?;
    let kind = kind_of(&kind)?;
    let row = content_admin::get(&state.db, kind, id).await.map_err(|e| state.reject(e))?;
    Ok(Json(row))
}

async fn create_content(
    State(state): State<ServerState>,
    Path(kind): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let kind = kind_of(&kind)?;
    let Json(body) = body?;
    let created = content_admin::create(&state.db, kind, body).await.map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn replace_content(
    State(state): State<ServerState>,
    path: Result<Path<(String, i32)>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Path((kind, id)) = path?;
    let kind = kind_of(&kind)?;
    let Json(body) = body?;
    let updated = content_admin::replace(&state.db, kind, id, body).await.map_err(|e| state.reject(e))?;
    Ok(Json(updated))
}

async fn patch_content(
    State(state): State<ServerState>,
    path: Result<Path<(String, i32)>, PathRejection>,
    body: Result<Json<RankPatch>, JsonRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Path((kind, id)) = path?;
    let kind = kind_of(&kind)?;
    let Json(patch) = body?;
    let updated = content_admin::patch(&state.db, kind, id, patch).await.map_err(|e| state.reject(e))?;
    Ok(Json(updated))
}

async fn delete_content(
    State(state): State<ServerState>,
    path: Result<Path<(String, i32)>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path((kind, id)) = path?;
    let kind = kind_of(&kind)?;
    content_admin::delete(&state.db, kind, id).await.map_err(|e| state.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_contact_info(State(state): State<ServerState>) -> Result<Json<contact_info::Model>, JsonApiError> {
    Ok(Json(singletons::get_contact_info(&state.db).await.map_err(|e| state.reject(e))?))
}

async fn put_contact_info(
    State(state): State<ServerState>,
    body: Result<Json<contact_info::ContactInfoUpdate>, JsonRejection>,
) -> Result<Json<contact_info::Model>, JsonApiError> {
    let Json(update) = body?;
    Ok(Json(singletons::update_contact_info(&state.db, update).await.map_err(|e| state.reject(e))?))
}

async fn get_hero(State(state): State<ServerState>) -> Result<Json<hero_section::Model>, JsonApiError> {
    Ok(Json(singletons::get_hero(&state.db).await.map_err(|e| state.reject(e))?))
}

async fn put_hero(
    State(state): State<ServerState>,
    body: Result<Json<hero_section::HeroSectionUpdate>, JsonRejection>,
) -> Result<Json<hero_section::Model>, JsonApiError> {
    let Json(update) = body?;
    Ok(Json(singletons::update_hero(&state.db, update).await.map_err(|e| state.reject(e))?))
}

async fn get_distributor(State(state): State<ServerState>) -> Result<Json<distributor_info::Model>, JsonApiError> {
    Ok(Json(singletons::get_distributor(&state.db).await.map_err(|e| state.reject(e))?))
}

async fn put_distributor(
    State(state): State<ServerState>,
    body: Result<Json<distributor_info::DistributorInfoUpdate>, JsonRejection>,
) -> Result<Json<distributor_info::Model>, JsonApiError> {
    let Json(update) = body?;
    Ok(Json(singletons::update_distributor(&state.db, update).await.map_err(|e| state.reject(e))?))
}

#[derive(Debug, Deserialize)]
struct InboxQuery {
    is_read: Option<bool>,
}

async fn list_messages(
    State(state): State<ServerState>,
    query: Result<Query<InboxQuery>, QueryRejection>,
) -> Result<Json<Vec<contact_message::Model>>, JsonApiError> {
    let Query(q) = query?;
    Ok(Json(contact::list_messages(&state.db, q.is_read).await.map_err(|e| state.reject(e))?))
}

#[derive(Debug, Deserialize)]
struct MarkReadInput {
    ids: Vec<i32>,
}

#[derive(Debug, Serialize)]
struct MarkReadOutput {
    updated: u64,
}

async fn mark_read(
    State(state): State<ServerState>,
    body: Result<Json<MarkReadInput>, JsonRejection>,
) -> Result<Json<MarkReadOutput>, JsonApiError> {
    let Json(input) = body?;
    let updated = contact::mark_read(&state.db, &input.ids).await.map_err(|e| state.reject(e))?;
    Ok(Json(MarkReadOutput { updated }))
}

async fn delete_message(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    contact::delete_message(&state.db, id).await.map_err(|e| state.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}
