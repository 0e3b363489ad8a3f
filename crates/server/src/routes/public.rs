//! Read-only endpoints consumed by the marketing site.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use service::dto::{CategoryOut, ClientOut, ContactAck, ContactInfoOut, ContactMessageIn, HardwareBundle, HomeBundle, ModuleOut};
use service::{clients, contact, hardware, home, modules};
use tracing::info;
use utoipa::IntoParams;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClientsQuery {
    /// Category id; blank or absent means every category.
    pub category: Option<String>,
}

#[utoipa::path(get, path = "/api/categories/", tag = "clients",
    responses((status = 200, body = [CategoryOut])))]
pub async fn categories(State(state): State<ServerState>) -> Result<Json<Vec<CategoryOut>>, JsonApiError> {
    let list = clients::list_categories(&state.db).await.map_err(|e| state.reject(e))?;
    Ok(Json(list))
}

#[utoipa::path(get, path = "/api/clients/", tag = "clients", params(ClientsQuery),
    responses((status = 200, body = [ClientOut]), (status = 400, description = "non-numeric category")))]
pub async fn clients_list(
    State(state): State<ServerState>,
    query: Result<Query<ClientsQuery>, QueryRejection>,
) -> Result<Json<Vec<ClientOut>>, JsonApiError> {
    let Query(q) = query?;
    let category = clients::parse_category_filter(q.category.as_deref()).map_err(|e| state.reject(e))?;
    let list = clients::list_clients(&state.db, &state.media, category).await.map_err(|e| state.reject(e))?;
    info!(count = list.len(), ?category, "list clients");
    Ok(Json(list))
}

#[utoipa::path(get, path = "/api/contact-info/", tag = "contact",
    responses((status = 200, body = ContactInfoOut)))]
pub async fn contact_info(State(state): State<ServerState>) -> Result<Json<ContactInfoOut>, JsonApiError> {
    let info = contact::contact_info(&state.db).await.map_err(|e| state.reject(e))?;
    Ok(Json(info))
}

#[utoipa::path(post, path = "/api/contact-message/", tag = "contact", request_body = ContactMessageIn,
    responses((status = 200, body = ContactAck), (status = 400, description = "All fields are required")))]
pub async fn contact_message(
    State(state): State<ServerState>,
    body: Result<Json<ContactMessageIn>, JsonRejection>,
) -> Result<Json<ContactAck>, JsonApiError> {
    let Json(input) = body?;
    let ack = contact::submit_message(&state.db, input.into()).await.map_err(|e| state.reject(e))?;
    Ok(Json(ack))
}

#[utoipa::path(get, path = "/api/hardware/", tag = "hardware",
    responses((status = 200, body = HardwareBundle)))]
pub async fn hardware_bundle(State(state): State<ServerState>) -> Result<Json<HardwareBundle>, JsonApiError> {
    let bundle = hardware::hardware_bundle(&state.db, &state.media).await.map_err(|e| state.reject(e))?;
    Ok(Json(bundle))
}

#[utoipa::path(get, path = "/api/home/", tag = "home",
    responses((status = 200, body = HomeBundle)))]
pub async fn home_bundle(State(state): State<ServerState>) -> Result<Json<HomeBundle>, JsonApiError> {
    let bundle = home::home_bundle(&state.db, &state.media).await.map_err(|e| state.reject(e))?;
    Ok(Json(bundle))
}

#[utoipa::path(get, path = "/api/modules/", tag = "modules",
    responses((status = 200, body = [ModuleOut])))]
pub async fn modules_list(State(state): State<ServerState>) -> Result<Json<Vec<ModuleOut>>, JsonApiError> {
    let list = modules::list_modules(&state.db, &state.media).await.map_err(|e| state.reject(e))?;
    Ok(Json(list))
}

#[utoipa::path(get, path = "/api/modules/{slug}/", tag = "modules",
    params(("slug" = String, Path, description = "module slug")),
    responses((status = 200, body = ModuleOut), (status = 404, description = "Module not found")))]
pub async fn module_detail(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> Result<Json<ModuleOut>, JsonApiError> {
    let module = modules::module_detail(&state.db, &state.media, &slug).await.map_err(|e| state.reject(e))?;
    Ok(Json(module))
}
