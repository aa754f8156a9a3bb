pub mod api;
pub mod config;
pub mod entities;
pub mod infrastructure;

use crate::config::AppConfig;
use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::health::health_check,
        api::handlers::movies::list_movies,
        api::handlers::movies::create_movie,
        api::handlers::movies::get_movie,
        api::handlers::movies::replace_movie,
        api::handlers::movies::delete_movie,
        api::handlers::directors::list_directors,
        api::handlers::directors::create_director,
        api::handlers::directors::get_director,
        api::handlers::directors::replace_director,
        api::handlers::directors::delete_director,
        api::handlers::genres::list_genres,
        api::handlers::genres::create_genre,
        api::handlers::genres::get_genre,
        api::handlers::genres::replace_genre,
        api::handlers::genres::delete_genre,
    ),
    components(
        schemas(
            api::handlers::health::HealthResponse,
            api::handlers::movies::MovieWrite,
            api::handlers::directors::DirectorWrite,
            api::handlers::genres::GenreWrite,
            entities::movies::Model,
            entities::directors::Model,
            entities::genres::Model,
        )
    ),
    tags(
        (name = "movies", description = "Movie catalog endpoints"),
        (name = "directors", description = "Director endpoints"),
        (name = "genres", description = "Genre endpoints"),
        (name = "system", description = "Service health")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
}

pub fn create_app(state: AppState) -> Router {
    // flask-restx style: collections answer with and without the trailing slash
    let movie_collection = get(api::handlers::movies::list_movies).post(api::handlers::movies::create_movie);
    let director_collection =
        get(api::handlers::directors::list_directors).post(api::handlers::directors::create_director);
    let genre_collection = get(api::handlers::genres::list_genres).post(api::handlers::genres::create_genre);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(api::handlers::health::health_check))
        .route("/movies", movie_collection.clone())
        .route("/movies/", movie_collection)
        .route(
            "/movies/:id",
            get(api::handlers::movies::get_movie)
                .put(api::handlers::movies::replace_movie)
                .delete(api::handlers::movies::delete_movie),
        )
        .route("/directors", director_collection.clone())
        .route("/directors/", director_collection)
        .route(
            "/directors/:id",
            get(api::handlers::directors::get_director)
                .put(api::handlers::directors::replace_director)
                .delete(api::handlers::directors::delete_director),
        )
        .route("/genres", genre_collection.clone())
        .route("/genres/", genre_collection)
        .route(
            "/genres/:id",
            get(api::handlers::genres::get_genre)
                .put(api::handlers::genres::replace_genre)
                .delete(api::handlers::genres::delete_genre),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
