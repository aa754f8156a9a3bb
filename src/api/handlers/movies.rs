use crate::AppState;
use crate::api::error::AppError;
use crate::entities::{movies, prelude::*};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize)]
pub struct MovieListQuery {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

/// Write-side shape for create and replace. Every field is optional; a key
/// missing from the body is persisted as NULL.
#[derive(Deserialize, ToSchema)]
pub struct MovieWrite {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/movies/",
    params(
        ("director_id" = Option<String>, Query, description = "Only movies with this director id"),
        ("genre_id" = Option<String>, Query, description = "Only movies with this genre id")
    ),
    responses(
        (status = 200, description = "List of movies", body = Vec<movies::Model>)
    ),
    tag = "movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieListQuery>,
) -> Result<Json<Vec<movies::Model>>, AppError> {
    let mut cond = Condition::all();

    if let Some(raw) = query.director_id {
        match raw.parse::<i32>() {
            Ok(id) => cond = cond.add(movies::Column::DirectorId.eq(id)),
            // Same observable result as an equality test no row can satisfy
            Err(_) => return Ok(Json(Vec::new())),
        }
    }

    if let Some(raw) = query.genre_id {
        match raw.parse::<i32>() {
            Ok(id) => cond = cond.add(movies::Column::GenreId.eq(id)),
            Err(_) => return Ok(Json(Vec::new())),
        }
    }

    let movies = Movies::find().filter(cond).all(&state.db).await?;

    Ok(Json(movies))
}

#[utoipa::path(
    post,
    path = "/movies/",
    request_body = MovieWrite,
    responses(
        (status = 201, description = "Movie created")
    ),
    tag = "movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(req): Json<MovieWrite>,
) -> Result<StatusCode, AppError> {
    let new_movie = movies::ActiveModel {
        title: Set(req.title),
        description: Set(req.description),
        trailer: Set(req.trailer),
        year: Set(req.year),
        rating: Set(req.rating),
        genre_id: Set(req.genre_id),
        director_id: Set(req.director_id),
        ..Default::default()
    };

    let txn = state.db.begin().await?;
    new_movie.insert(&txn).await?;
    txn.commit().await?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie found", body = movies::Model),
        (status = 404, description = "Movie not found")
    ),
    tag = "movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<movies::Model>, AppError> {
    let movie = Movies::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))?;

    Ok(Json(movie))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body = MovieWrite,
    responses(
        (status = 204, description = "Movie replaced"),
        (status = 404, description = "Movie not found")
    ),
    tag = "movies"
)]
pub async fn replace_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<MovieWrite>,
) -> Result<StatusCode, AppError> {
    let movie = Movies::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))?;

    let mut active: movies::ActiveModel = movie.into();
    active.title = Set(req.title);
    active.description = Set(req.description);
    active.trailer = Set(req.trailer);
    active.year = Set(req.year);
    active.rating = Set(req.rating);
    active.genre_id = Set(req.genre_id);
    active.director_id = Set(req.director_id);

    active.update(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found")
    ),
    tag = "movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let movie = Movies::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))?;

    movie.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
