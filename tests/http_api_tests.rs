//! HTTP client integration tests.
//!
//! Starts an in-process axum movies backend on an ephemeral port and
//! exercises `HttpMovieApi` and the controller against it with reqwest.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use moviedesk::{
    ApiConfig, ClientError, DraftField, FormMode, HttpMovieApi, Movie, MovieApi, MovieId,
    MoviePayload, connect,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct BackendState {
    movies: Vec<Movie>,
    next_id: i64,
    last_body: Option<Value>,
}

#[derive(Clone, Default)]
struct Backend {
    inner: Arc<Mutex<BackendState>>,
}

impl Backend {
    fn seeded(movies: Vec<Movie>) -> Self {
        let next_id = movies.iter().map(|m| m.id.0).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(BackendState {
                movies,
                next_id,
                last_body: None,
            })),
        }
    }

    fn movies(&self) -> Vec<Movie> {
        self.inner.lock().unwrap().movies.clone()
    }

    fn last_body(&self) -> Option<Value> {
        self.inner.lock().unwrap().last_body.clone()
    }
}

fn validate(payload: &MoviePayload) -> Result<i32, StatusCode> {
    if payload.title.is_empty() || payload.genre.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    if matches!(payload.rating, Some(r) if !(0.0..=10.0).contains(&r)) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    payload.year.ok_or(StatusCode::UNPROCESSABLE_ENTITY)
}

async fn list_movies(State(backend): State<Backend>) -> Json<Vec<Movie>> {
    let mut movies = backend.movies();
    movies.sort_by(|a, b| b.id.cmp(&a.id));
    Json(movies)
}

async fn create_movie(
    State(backend): State<Backend>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Movie>), StatusCode> {
    let payload: MoviePayload =
        serde_json::from_value(body.clone()).map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
    let year = validate(&payload)?;

    let mut state = backend.inner.lock().unwrap();
    state.last_body = Some(body);
    let movie = Movie {
        id: MovieId(state.next_id),
        title: payload.title,
        year,
        genre: payload.genre,
        rating: payload.rating,
    };
    state.next_id += 1;
    state.movies.push(movie.clone());
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Movie>, StatusCode> {
    let payload: MoviePayload =
        serde_json::from_value(body.clone()).map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
    let year = validate(&payload)?;

    let mut state = backend.inner.lock().unwrap();
    state.last_body = Some(body);
    let movie = state
        .movies
        .iter_mut()
        .find(|movie| movie.id == MovieId(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    movie.title = payload.title;
    movie.year = year;
    movie.genre = payload.genre;
    movie.rating = payload.rating;
    Ok(Json(movie.clone()))
}

async fn delete_movie(State(backend): State<Backend>, Path(id): Path<i64>) -> StatusCode {
    let mut state = backend.inner.lock().unwrap();
    let before = state.movies.len();
    state.movies.retain(|movie| movie.id != MovieId(id));
    if state.movies.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "db": "connected" }))
}

fn router(backend: Backend) -> Router {
    Router::new()
        .route("/api/movies", get(list_movies).post(create_movie))
        .route("/api/movies/:id", put(update_movie).delete(delete_movie))
        .route("/health", get(health))
        .with_state(backend)
}

/// Bind to port 0 and return the actual address.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start_backend(movies: Vec<Movie>) -> (String, Backend) {
    let backend = Backend::seeded(movies);
    let base = serve(router(backend.clone())).await;
    (base, backend)
}

fn api(base: &str) -> HttpMovieApi {
    HttpMovieApi::new(ApiConfig::new(base)).unwrap()
}

fn payload(title: &str, year: i32, genre: &str, rating: Option<f64>) -> MoviePayload {
    MoviePayload {
        title: title.to_string(),
        year: Some(year),
        genre: genre.to_string(),
        rating,
    }
}

#[tokio::test]
async fn test_list_returns_server_order() {
    let (base, _backend) = start_backend(vec![
        Movie::new(1, "Heat", 1995, "Crime", Some(8.3)),
        Movie::new(2, "Alien", 1979, "Horror", None),
    ])
    .await;

    let movies = api(&base).list().await.unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, MovieId(2));
    assert_eq!(movies[0].rating, None);
    assert_eq!(movies[1].title, "Heat");
}

#[tokio::test]
async fn test_create_sends_null_rating() {
    let (base, backend) = start_backend(Vec::new()).await;

    api(&base)
        .create(&payload("X", 1999, "Drama", None))
        .await
        .unwrap();

    assert_eq!(
        backend.last_body(),
        Some(json!({ "title": "X", "year": 1999, "genre": "Drama", "rating": null }))
    );
    assert_eq!(backend.movies().len(), 1);
}

#[tokio::test]
async fn test_rejected_create_is_status_error() {
    let (base, backend) = start_backend(Vec::new()).await;

    let result = api(&base)
        .create(&payload("X", 1999, "Drama", Some(11.0)))
        .await;

    match result {
        Err(ClientError::Status { status, .. }) => assert_eq!(status, 422),
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(backend.movies().is_empty());
}

#[tokio::test]
async fn test_update_missing_movie_is_status_error() {
    let (base, _backend) = start_backend(Vec::new()).await;

    let result = api(&base)
        .update(MovieId(42), &payload("X", 1999, "Drama", None))
        .await;

    match result {
        Err(ClientError::Status { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/movies/42"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_missing_movie_is_ok() {
    let (base, _backend) = start_backend(Vec::new()).await;

    assert!(api(&base).delete(MovieId(7)).await.is_ok());
}

#[tokio::test]
async fn test_health() {
    let (base, _backend) = start_backend(Vec::new()).await;

    let health = api(&base).health().await.unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.db.as_deref(), Some("connected"));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = api(&format!("http://{addr}")).list().await;

    assert!(matches!(result, Err(ClientError::Transport(_))));
}

#[tokio::test]
async fn test_malformed_list_is_decode_error() {
    let app = Router::new().route("/api/movies", get(|| async { "not json" }));
    let base = serve(app).await;

    let result = api(&base).list().await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn test_timeout_applies_to_requests() {
    let app = Router::new().route(
        "/api/movies",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(Vec::<Movie>::new())
        }),
    );
    let base = serve(app).await;
    let api = HttpMovieApi::new(ApiConfig::new(&base).timeout(Duration::from_millis(100))).unwrap();

    let result = api.list().await;

    assert!(matches!(result, Err(ClientError::Transport(_))));
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    assert!(matches!(
        HttpMovieApi::new(ApiConfig::new("ftp://127.0.0.1:8000")),
        Err(ClientError::Config(_))
    ));
}

#[tokio::test]
async fn test_controller_round_trip() {
    let (base, backend) = start_backend(Vec::new()).await;
    let mut controller = connect(ApiConfig::new(&base)).unwrap();

    controller.load().await.unwrap();
    assert!(controller.visible().is_empty());

    controller.set_field(DraftField::Title, "Interstellar");
    controller.set_field(DraftField::Year, "2014");
    controller.set_field(DraftField::Genre, "Sci-Fi");
    controller.set_field(DraftField::Rating, "8.7");
    controller.submit().await.unwrap();

    assert_eq!(controller.movies().len(), 1);
    let created = controller.movies()[0].clone();
    assert_eq!(created.title, "Interstellar");
    assert_eq!(created.rating, Some(8.7));

    controller.start_edit(&created);
    controller.set_field(DraftField::Rating, "");
    controller.submit().await.unwrap();

    assert_eq!(controller.mode(), FormMode::Create);
    assert_eq!(controller.movies()[0].rating, None);
    assert_eq!(controller.stats().average_label(), "—");

    controller.request_delete(created.id);
    controller.confirm_delete().await.unwrap();

    assert!(controller.movies().is_empty());
    assert!(backend.movies().is_empty());
}

#[tokio::test]
async fn test_controller_rejected_update_keeps_draft() {
    let (base, backend) = start_backend(vec![Movie::new(1, "Heat", 1995, "Crime", Some(8.3))]).await;
    let mut controller = connect(ApiConfig::new(&base)).unwrap();
    controller.load().await.unwrap();

    let heat = controller.movies()[0].clone();
    controller.start_edit(&heat);
    controller.set_field(DraftField::Year, "nineteen ninety-five");

    assert!(controller.submit().await.is_err());
    assert_eq!(controller.mode(), FormMode::Editing(MovieId(1)));
    assert_eq!(controller.draft().year, "nineteen ninety-five");
    assert_eq!(backend.movies()[0].year, 1995);
}
