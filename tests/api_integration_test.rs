use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_movie_backend::config::AppConfig;
use rust_movie_backend::infrastructure::database;
use rust_movie_backend::{AppState, create_app};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn setup_app() -> Router {
    // Single connection so every query sees the same in-memory database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    database::run_migrations(&db).await.unwrap();

    let state = AppState {
        db,
        config: AppConfig::default(),
    };
    create_app(state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Value {
    let (status, bytes) = send(app, method, uri, body).await;
    assert!(status.is_success(), "unexpected status {}", status);
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_genre_create_and_list() {
    let app = setup_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/genres/",
        Some(json!({"name": "Drama"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty());

    let listed = send_json(&app, Method::GET, "/genres/", None).await;
    assert_eq!(listed, json!([{"id": 1, "name": "Drama"}]));
}

#[tokio::test]
async fn test_movie_create_then_get_returns_supplied_fields() {
    let app = setup_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/genres/",
        Some(json!({"name": "Sci-Fi"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        Method::POST,
        "/movies/",
        Some(json!({
            "title": "Dune",
            "description": "Spice wars",
            "trailer": "http://x",
            "year": 2021,
            "rating": 8.0,
            "genre_id": 1,
            "director_id": null
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty());

    let movie = send_json(&app, Method::GET, "/movies/1", None).await;
    assert_eq!(movie["id"], 1);
    assert_eq!(movie["title"], "Dune");
    assert_eq!(movie["description"], "Spice wars");
    assert_eq!(movie["trailer"], "http://x");
    assert_eq!(movie["year"], 2021);
    assert_eq!(movie["rating"], 8.0);
    assert_eq!(movie["genre_id"], 1);
    assert_eq!(movie["director_id"], Value::Null);
}

#[tokio::test]
async fn test_movie_create_with_missing_fields_returns_nulls() {
    let app = setup_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/movies/",
        Some(json!({"title": "Untitled"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let movie = send_json(&app, Method::GET, "/movies/1", None).await;
    assert_eq!(movie["title"], "Untitled");
    assert_eq!(movie["description"], Value::Null);
    assert_eq!(movie["year"], Value::Null);
    assert_eq!(movie["rating"], Value::Null);
}

#[tokio::test]
async fn test_movie_list_filters() {
    let app = setup_app().await;

    for name in ["Lynch", "Villeneuve"] {
        send(
            &app,
            Method::POST,
            "/directors/",
            Some(json!({"name": name})),
        )
        .await;
    }
    send(&app, Method::POST, "/genres/", Some(json!({"name": "Sci-Fi"}))).await;

    let movies = [
        json!({"title": "Dune", "year": 1984, "director_id": 1, "genre_id": 1}),
        json!({"title": "Dune", "year": 2021, "director_id": 2, "genre_id": 1}),
        json!({"title": "Eraserhead", "year": 1977, "director_id": 1, "genre_id": null}),
    ];
    for movie in movies {
        let (status, _) = send(&app, Method::POST, "/movies/", Some(movie)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // No filter: everything
    let all = send_json(&app, Method::GET, "/movies/", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    // Single filter
    let by_director = send_json(&app, Method::GET, "/movies/?director_id=1", None).await;
    let titles: Vec<&str> = by_director
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Dune", "Eraserhead"]);

    // Both filters combine with AND
    let both = send_json(
        &app,
        Method::GET,
        "/movies/?director_id=1&genre_id=1",
        None,
    )
    .await;
    let arr = both.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["year"], 1984);

    // Zero matches is still 200 with an empty array
    let none = send_json(&app, Method::GET, "/movies/?director_id=42", None).await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_movie_list_unparsable_filter_is_empty_not_error() {
    let app = setup_app().await;

    send(&app, Method::POST, "/movies/", Some(json!({"title": "Solaris"}))).await;

    let (status, bytes) = send(&app, Method::GET, "/movies/?director_id=abc", None).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_movie_replace_overwrites_and_nulls_omitted_fields() {
    let app = setup_app().await;

    send(
        &app,
        Method::POST,
        "/movies/",
        Some(json!({
            "title": "Dune",
            "description": "Spice wars",
            "trailer": "http://x",
            "year": 2021,
            "rating": 8.0
        })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/movies/1",
        Some(json!({"title": "Dune: Part Two", "year": 2024})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let movie = send_json(&app, Method::GET, "/movies/1", None).await;
    assert_eq!(movie["title"], "Dune: Part Two");
    assert_eq!(movie["year"], 2024);
    // Fields omitted from the replace body are now null
    assert_eq!(movie["description"], Value::Null);
    assert_eq!(movie["trailer"], Value::Null);
    assert_eq!(movie["rating"], Value::Null);
}

#[tokio::test]
async fn test_get_missing_movie_is_404_empty() {
    let app = setup_app().await;

    let (status, body) = send(&app, Method::GET, "/movies/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_replace_missing_director_is_404_empty() {
    let app = setup_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/directors/999",
        Some(json!({"name": "Nobody"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_replace_missing_movie_is_404_empty() {
    let app = setup_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/movies/999",
        Some(json!({"title": "Ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = setup_app().await;

    send(&app, Method::POST, "/genres/", Some(json!({"name": "Drama"}))).await;

    let (status, body) = send(&app, Method::DELETE, "/genres/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, Method::GET, "/genres/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_missing_record_is_404() {
    let app = setup_app().await;

    let (status, body) = send(&app, Method::DELETE, "/movies/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_director_full_lifecycle() {
    let app = setup_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/directors/",
        Some(json!({"name": "Tarkovsky"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let director = send_json(&app, Method::GET, "/directors/1", None).await;
    assert_eq!(director, json!({"id": 1, "name": "Tarkovsky"}));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/directors/1",
        Some(json!({"name": "A. Tarkovsky"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let director = send_json(&app, Method::GET, "/directors/1", None).await;
    assert_eq!(director["name"], "A. Tarkovsky");

    let (status, _) = send(&app, Method::DELETE, "/directors/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let listed = send_json(&app, Method::GET, "/directors/", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_collection_reachable_without_trailing_slash() {
    let app = setup_app().await;

    let (status, _) = send(&app, Method::POST, "/genres", Some(json!({"name": "Noir"}))).await;
    assert_eq!(status, StatusCode::CREATED);

    let listed = send_json(&app, Method::GET, "/genres", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app().await;

    let body = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}
