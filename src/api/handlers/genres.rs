use crate::AppState;
use crate::api::error::AppError;
use crate::entities::{genres, prelude::*};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set, TransactionTrait};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct GenreWrite {
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/genres/",
    responses(
        (status = 200, description = "List of genres", body = Vec<genres::Model>)
    ),
    tag = "genres"
)]
pub async fn list_genres(
    State(state): State<AppState>,
) -> Result<Json<Vec<genres::Model>>, AppError> {
    let genres = Genres::find().all(&state.db).await?;

    Ok(Json(genres))
}

#[utoipa::path(
    post,
    path = "/genres/",
    request_body = GenreWrite,
    responses(
        (status = 201, description = "Genre created")
    ),
    tag = "genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(req): Json<GenreWrite>,
) -> Result<StatusCode, AppError> {
    let new_genre = genres::ActiveModel {
        name: Set(req.name),
        ..Default::default()
    };

    let txn = state.db.begin().await?;
    new_genre.insert(&txn).await?;
    txn.commit().await?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/genres/{id}",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre found", body = genres::Model),
        (status = 404, description = "Genre not found")
    ),
    tag = "genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<genres::Model>, AppError> {
    let genre = Genres::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;

    Ok(Json(genre))
}

#[utoipa::path(
    put,
    path = "/genres/{id}",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    request_body = GenreWrite,
    responses(
        (status = 204, description = "Genre replaced"),
        (status = 404, description = "Genre not found")
    ),
    tag = "genres"
)]
pub async fn replace_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<GenreWrite>,
) -> Result<StatusCode, AppError> {
    let genre = Genres::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;

    let mut active: genres::ActiveModel = genre.into();
    active.name = Set(req.name);

    active.update(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/genres/{id}",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found")
    ),
    tag = "genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let genre = Genres::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;

    genre.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
