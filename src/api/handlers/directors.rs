use crate::AppState;
use crate::api::error::AppError;
use crate::entities::{directors, prelude::*};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set, TransactionTrait};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct DirectorWrite {
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/directors/",
    responses(
        (status = 200, description = "List of directors", body = Vec<directors::Model>)
    ),
    tag = "directors"
)]
pub async fn list_directors(
    State(state): State<AppState>,
) -> Result<Json<Vec<directors::Model>>, AppError> {
    let directors = Directors::find().all(&state.db).await?;

    Ok(Json(directors))
}

#[utoipa::path(
    post,
    path = "/directors/",
    request_body = DirectorWrite,
    responses(
        (status = 201, description = "Director created")
    ),
    tag = "directors"
)]
pub async fn create_director(
    State(state): State<AppState>,
    Json(req): Json<DirectorWrite>,
) -> Result<StatusCode, AppError> {
    let new_director = directors::ActiveModel {
        name: Set(req.name),
        ..Default::default()
    };

    let txn = state.db.begin().await?;
    new_director.insert(&txn).await?;
    txn.commit().await?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/directors/{id}",
    params(
        ("id" = i32, Path, description = "Director ID")
    ),
    responses(
        (status = 200, description = "Director found", body = directors::Model),
        (status = 404, description = "Director not found")
    ),
    tag = "directors"
)]
pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<directors::Model>, AppError> {
    let director = Directors::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Director {} not found", id)))?;

    Ok(Json(director))
}

#[utoipa::path(
    put,
    path = "/directors/{id}",
    params(
        ("id" = i32, Path, description = "Director ID")
    ),
    request_body = DirectorWrite,
    responses(
        (status = 204, description = "Director replaced"),
        (status = 404, description = "Director not found")
    ),
    tag = "directors"
)]
pub async fn replace_director(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<DirectorWrite>,
) -> Result<StatusCode, AppError> {
    let director = Directors::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Director {} not found", id)))?;

    let mut active: directors::ActiveModel = director.into();
    active.name = Set(req.name);

    active.update(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/directors/{id}",
    params(
        ("id" = i32, Path, description = "Director ID")
    ),
    responses(
        (status = 204, description = "Director deleted"),
        (status = 404, description = "Director not found")
    ),
    tag = "directors"
)]
pub async fn delete_director(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let director = Directors::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Director {} not found", id)))?;

    director.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
