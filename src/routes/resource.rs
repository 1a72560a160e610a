use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{OriginalUri, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::Query;
use magnus_shared::{Crud, Error, Page, Pageable, Resource, merge_patch};
use serde::Deserialize;
use validator::Validate;

use crate::error::{ALERT_HEADER, APP_NAME, ApiError, PARAMS_HEADER, ResultExt};

/// REST handlers for one resource, served under `/api/{path}`.
pub struct ResourceState<C> {
    service: Arc<C>,
    path: &'static str,
}

impl<C> Clone for ResourceState<C> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            path: self.path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u64>,
    pub size: Option<u64>,
    #[serde(default)]
    pub sort: Vec<String>,
}

/// Collection and item routes of a resource. Methods not listed answer 405.
pub fn routes<C: Crud>(path: &'static str, service: C) -> Router {
    let state = ResourceState {
        service: Arc::new(service),
        path,
    };

    Router::new()
        .route(&format!("/api/{path}"), get(list::<C>).post(create::<C>))
        .route(
            &format!("/api/{path}/{{id}}"),
            get(find::<C>)
                .put(update::<C>)
                .patch(partial_update::<C>)
                .delete(delete::<C>),
        )
        .with_state(state)
}

/// Alert headers telling the client what happened to `param`.
pub fn alert_headers(alert: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(alert) {
        headers.insert(ALERT_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(param) {
        headers.insert(PARAMS_HEADER, value);
    }

    headers
}

fn entity_alert(entity: &str, action: &str, id: i64) -> HeaderMap {
    alert_headers(&format!("{APP_NAME}.{entity}.{action}"), &id.to_string())
}

fn parse<T: serde::de::DeserializeOwned>(entity: &'static str, body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).entity(entity)
}

/// `X-Total-Count` and RFC 5988 `Link` headers for a page.
pub fn pagination_headers<T>(uri: &str, page: &Page<T>, sort: &[String]) -> HeaderMap {
    let last = page.total_pages().saturating_sub(1);
    let link = |number: u64, rel: &str| {
        let mut target = format!("{uri}?page={number}&size={}", page.size);
        for order in sort {
            target.push_str("&sort=");
            target.push_str(order);
        }
        format!("<{target}>; rel=\"{rel}\"")
    };

    let mut links = vec![];
    if page.page < last {
        links.push(link(page.page + 1, "next"));
    }
    if page.page > 0 {
        links.push(link(page.page - 1, "prev"));
    }
    links.push(link(last, "last"));
    links.push(link(0, "first"));

    let mut headers = HeaderMap::new();
    headers.insert("x-total-count", HeaderValue::from(page.total));
    if let Ok(value) = HeaderValue::from_str(&links.join(",")) {
        headers.insert(header::LINK, value);
    }

    headers
}

#[tracing::instrument(skip_all, fields(entity = <C::Dto as Resource>::ENTITY_NAME))]
async fn create<C: Crud>(
    State(state): State<ResourceState<C>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let entity = <C::Dto as Resource>::ENTITY_NAME;
    let dto: C::Dto = parse(entity, &body)?;

    if dto.id().is_some() {
        return Err(ApiError::bad_request(
            entity,
            "idexists",
            format!("A new {entity} cannot already have an ID"),
        ));
    }

    dto.validate().entity(entity)?;

    let stored = state.service.save(dto).await.entity(entity)?;
    let id = stored.id().unwrap_or_default();

    let mut headers = entity_alert(entity, "created", id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/{}/{id}", state.path)) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(stored)).into_response())
}

#[tracing::instrument(skip_all, fields(entity = <C::Dto as Resource>::ENTITY_NAME))]
async fn list<C: Crud>(
    State(state): State<ResourceState<C>>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
) -> Result<Response, ApiError> {
    let entity = <C::Dto as Resource>::ENTITY_NAME;
    let pageable = Pageable::new(params.page, params.size, &params.sort).entity(entity)?;
    let page = state.service.find_all(&pageable).await.entity(entity)?;
    let headers = pagination_headers(uri.path(), &page, &params.sort);

    Ok((headers, Json(page.content)).into_response())
}

async fn find<C: Crud>(
    State(state): State<ResourceState<C>>,
    Path(id): Path<i64>,
) -> Result<Json<C::Dto>, ApiError> {
    let entity = <C::Dto as Resource>::ENTITY_NAME;

    match state.service.find_one(id).await.entity(entity)? {
        Some(dto) => Ok(Json(dto)),
        None => Err(Error::NotFound { entity }).entity(entity),
    }
}

fn check_id(entity: &'static str, body_id: Option<i64>, id: i64) -> Result<(), ApiError> {
    match body_id {
        None => Err(ApiError::bad_request(entity, "idnull", "Invalid id")),
        Some(body_id) if body_id != id => Err(ApiError::bad_request(entity, "idinvalid", "Invalid ID")),
        Some(_) => Ok(()),
    }
}

fn not_found(entity: &'static str) -> ApiError {
    ApiError::bad_request(entity, "idnotfound", "Entity not found")
}

#[tracing::instrument(skip_all, fields(entity = <C::Dto as Resource>::ENTITY_NAME))]
async fn update<C: Crud>(
    State(state): State<ResourceState<C>>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let entity = <C::Dto as Resource>::ENTITY_NAME;
    let dto: C::Dto = parse(entity, &body)?;

    check_id(entity, dto.id(), id)?;

    if !state.service.exists(id).await.entity(entity)? {
        return Err(not_found(entity));
    }

    dto.validate().entity(entity)?;

    let stored = state.service.update(dto).await.entity(entity)?;

    Ok((entity_alert(entity, "updated", id), Json(stored)).into_response())
}

#[tracing::instrument(skip_all, fields(entity = <C::Dto as Resource>::ENTITY_NAME))]
async fn partial_update<C: Crud>(
    State(state): State<ResourceState<C>>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let entity = <C::Dto as Resource>::ENTITY_NAME;
    let patch: serde_json::Value = parse(entity, &body)?;

    if !patch.is_object() {
        return Err(ApiError::bad_request(
            entity,
            "invalidpatch",
            "Patch body must be a JSON object",
        ));
    }

    let body_id = match patch.get("id") {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => Some(value.as_i64().ok_or_else(|| {
            ApiError::bad_request(entity, "idinvalid", "Invalid ID")
        })?),
    };

    check_id(entity, body_id, id)?;

    let Some(current) = state.service.find_one(id).await.entity(entity)? else {
        return Err(not_found(entity));
    };

    let merged = merge_patch(&current, patch).entity(entity)?;
    merged.validate().entity(entity)?;

    let stored = state.service.update(merged).await.entity(entity)?;

    Ok((entity_alert(entity, "updated", id), Json(stored)).into_response())
}

#[tracing::instrument(skip_all, fields(entity = <C::Dto as Resource>::ENTITY_NAME))]
async fn delete<C: Crud>(
    State(state): State<ResourceState<C>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let entity = <C::Dto as Resource>::ENTITY_NAME;
    state.service.delete(id).await.entity(entity)?;

    Ok((StatusCode::NO_CONTENT, entity_alert(entity, "deleted", id)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u64, total: u64) -> Page<u8> {
        Page {
            content: vec![],
            total,
            page,
            size: 20,
        }
    }

    #[test]
    fn link_header_on_middle_page() {
        let headers = pagination_headers("/api/budgets", &page(1, 45), &["name,desc".to_owned()]);

        assert_eq!(headers["x-total-count"], "45");
        assert_eq!(
            headers[header::LINK],
            "</api/budgets?page=2&size=20&sort=name,desc>; rel=\"next\",\
             </api/budgets?page=0&size=20&sort=name,desc>; rel=\"prev\",\
             </api/budgets?page=2&size=20&sort=name,desc>; rel=\"last\",\
             </api/budgets?page=0&size=20&sort=name,desc>; rel=\"first\""
        );
    }

    #[test]
    fn link_header_on_empty_collection() {
        let headers = pagination_headers("/api/menus", &page(0, 0), &[]);

        assert_eq!(headers["x-total-count"], "0");
        assert_eq!(
            headers[header::LINK],
            "</api/menus?page=0&size=20>; rel=\"last\",</api/menus?page=0&size=20>; rel=\"first\""
        );
    }

    #[test]
    fn body_id_must_match_path() {
        assert!(check_id("budget", Some(3), 3).is_ok());
        assert!(check_id("budget", None, 3).is_err());
        assert!(check_id("budget", Some(4), 3).is_err());
    }
}
