use arcade_shared::{CatalogItem, PLACEHOLDER_IMAGE};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    uploads::CatalogForm,
    validation::Validatable,
};

const ITEM_NOT_FOUND: &str = "Item not found.";

/// List every catalog item, in catalog order
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<CatalogItem>>> {
    let items = state.store.catalog().list().await?;
    Ok(Json(items))
}

/// Fetch one item. Unknown or malformed ids answer `null`.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<CatalogItem>>> {
    let item = state.store.catalog().get(&id).await?;
    Ok(Json(item))
}

pub async fn create_item(
    State(state): State<AppState>,
    form: CatalogForm,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let CatalogForm { fields, image } = form;
    let draft = fields.into_valid()?;

    let img = match &image {
        Some(upload) => upload.file_name.clone(),
        None => PLACEHOLDER_IMAGE.to_string(),
    };

    let catalog = state.store.catalog();
    let item = catalog.create(draft.into_new(img)).await?;

    // Files only land on disk once the store has accepted the item
    if let Some(upload) = &image {
        if let Err(err) = state.images.save(upload).await {
            let id = item.id.to_string();
            if let Err(remove_err) = catalog.remove(&id).await {
                tracing::error!(id = %id, error = %remove_err, "failed to roll back catalog item");
            }
            return Err(err.into());
        }
    }
    tracing::info!(id = %item.id, name = %item.name, "catalog item created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": item,
        })),
    ))
}

/// Replace an item's fields. The stored image is kept unless a new file is uploaded.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<CatalogForm, ApiError>,
) -> ApiResult<Json<Value>> {
    let catalog = state.store.catalog();
    if catalog.get(&id).await?.is_none() {
        return Err(ApiError::not_found(ITEM_NOT_FOUND));
    }

    let CatalogForm { fields, image } = form?;
    let draft = fields.into_valid()?;

    let img = image.as_ref().map(|upload| upload.file_name.clone());

    let item = catalog
        .update(&id, draft.into_changes(img))
        .await?
        .ok_or_else(|| ApiError::not_found(ITEM_NOT_FOUND))?;

    if let Some(upload) = &image {
        state.images.save(upload).await?;
    }
    tracing::info!(id = %item.id, "catalog item updated");

    Ok(Json(json!({
        "success": true,
        "message": "Item updated!",
        "data": item,
    })))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    if !state.store.catalog().remove(&id).await? {
        return Err(ApiError::not_found(ITEM_NOT_FOUND));
    }
    tracing::info!(id = %id, "catalog item deleted");

    Ok(Json(json!({
        "success": true,
        "message": "Item deleted!",
    })))
}
