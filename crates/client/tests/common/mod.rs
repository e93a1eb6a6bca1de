// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! In-process stub of the backend for end-to-end client tests.
//!
//! Serves the subset of the web API the tests exercise, with canned
//! payloads, a tiny amount of mutable state, and per-operation hit
//! counters for deduplication assertions.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::{Form, Multipart, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use mneme_client::webapi::WebEnv;

pub const SESSION_COOKIE: &str = "session=sekrit";
pub const USERNAME: &str = "gabe";
pub const PASSWORD: &str = "hunter2";

#[derive(Debug, Default)]
pub struct StubState {
    /// Recorded listens as `(track_id, unix)` pairs.
    pub listens: Mutex<Vec<(i64, i64)>>,
    /// Aliases of the one entity the tests edit: `(alias, source, is_primary)`.
    pub aliases: Mutex<Vec<(String, String, bool)>>,
    /// Api keys as `(id, key, label)`.
    pub api_keys: Mutex<Vec<(i64, String, String)>>,
    /// Per-operation request counters.
    pub hits: Mutex<HashMap<String, u32>>,
    /// When set, `/stats` responds with this status and raw body once.
    pub stats_failure: Mutex<Option<(u16, String)>>,
    /// Raw body served by `/config`.
    pub config_body: Mutex<Option<String>>,
    /// Recorded merge requests as `(path, query)` pairs.
    pub merges: Mutex<Vec<(String, String)>>,
    /// Recorded multipart uploads as field `(name, value-or-filename)` lists.
    pub uploads: Mutex<Vec<Vec<(String, String)>>>,
}

impl StubState {
    pub fn hit(&self, op: &str) {
        let mut hits = self.hits.lock().unwrap();
        *hits.entry(op.to_owned()).or_insert(0) += 1;
    }

    pub fn hits(&self, op: &str) -> u32 {
        let hits = self.hits.lock().unwrap();
        hits.get(op).copied().unwrap_or(0)
    }
}

pub struct TestServer {
    pub base_url: url::Url,
    pub state: Arc<StubState>,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let state = Arc::new(StubState::default());
        let app = router(Arc::clone(&state));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base_url: format!("http://{addr}").parse().unwrap(),
            state,
        }
    }

    pub fn env(&self) -> WebEnv {
        WebEnv::new(self.base_url.clone()).unwrap()
    }
}

fn router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/apis/web/v1/listens", get(get_listens))
        .route(
            "/apis/web/v1/listen",
            post(post_listen).delete(delete_listen),
        )
        .route("/apis/web/v1/listen-activity", get(get_listen_activity))
        .route("/apis/web/v1/stats", get(get_stats))
        .route("/apis/web/v1/search", get(get_search))
        .route(
            "/apis/web/v1/aliases",
            get(get_aliases).post(post_alias),
        )
        .route("/apis/web/v1/aliases/delete", post(post_alias_delete))
        .route("/apis/web/v1/aliases/primary", post(post_alias_primary))
        .route(
            "/apis/web/v1/user/apikeys",
            get(get_api_keys)
                .post(post_api_key)
                .patch(patch_api_key)
                .delete(delete_api_key),
        )
        .route("/apis/web/v1/login", post(post_login))
        .route("/apis/web/v1/logout", post(post_logout))
        .route("/apis/web/v1/user/me", get(get_me))
        .route("/apis/web/v1/config", get(get_config))
        .route("/apis/web/v1/merge/tracks", post(post_merge_tracks))
        .route("/apis/web/v1/merge/albums", post(post_merge_albums))
        .route("/apis/web/v1/merge/artists", post(post_merge_artists))
        .route("/apis/web/v1/replace-image", post(post_replace_image))
        .with_state(state)
}

pub fn track_json(track_id: i64) -> Value {
    json!({
        "id": track_id,
        "title": format!("Track {track_id}"),
        "artists": [{"id": 1, "name": "Stub Artist"}],
        "listen_count": 1,
        "image": "",
        "album_id": 5,
        "musicbrainz_id": "",
        "time_listened": 180,
        "first_listen": 1_700_000_000,
    })
}

fn album_json(album_id: i64) -> Value {
    json!({
        "id": album_id,
        "title": format!("Album {album_id}"),
        "image": "",
        "listen_count": 10,
        "is_various_artists": false,
        "artists": [{"id": 1, "name": "Stub Artist"}],
        "musicbrainz_id": "",
        "time_listened": 1_800,
        "first_listen": 1_700_000_000,
    })
}

fn iso(unix: i64) -> String {
    jiff::Timestamp::from_second(unix).unwrap().to_string()
}

fn error_json(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(json!({"error": message}))).into_response()
}

fn parse_i64(params: &HashMap<String, String>, name: &str) -> Option<i64> {
    params.get(name)?.parse().ok()
}

async fn get_listens(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hit("listens");
    let limit = parse_i64(&params, "limit").unwrap_or(100).max(1);
    let page = parse_i64(&params, "page").unwrap_or(1).max(1);
    let track_filter = parse_i64(&params, "track_id");
    let listens = state.listens.lock().unwrap();
    let matching: Vec<(i64, i64)> = listens
        .iter()
        .copied()
        .filter(|&(track_id, _)| track_filter.is_none_or(|filter| filter == track_id))
        .collect();
    drop(listens);
    let total = matching.len() as i64;
    let start = ((page - 1) * limit).min(total) as usize;
    let end = (start + limit as usize).min(matching.len());
    let items: Vec<Value> = matching[start..end]
        .iter()
        .map(|(track_id, unix)| json!({"time": iso(*unix), "track": track_json(*track_id)}))
        .collect();
    axum::Json(json!({
        "items": items,
        "total_record_count": total,
        "has_next_page": (end as i64) < total,
        "current_page": page,
        "items_per_page": limit,
    }))
    .into_response()
}

async fn post_listen(
    State(state): State<Arc<StubState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let (Some(track_id), Some(unix)) = (
        form.get("track_id").and_then(|v| v.parse().ok()),
        form.get("unix").and_then(|v| v.parse().ok()),
    ) else {
        return error_json(StatusCode::BAD_REQUEST, "invalid listen submission");
    };
    state.listens.lock().unwrap().push((track_id, unix));
    StatusCode::OK.into_response()
}

async fn delete_listen(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let (Some(track_id), Some(unix)) = (
        parse_i64(&params, "track_id"),
        parse_i64(&params, "unix"),
    ) else {
        return error_json(StatusCode::BAD_REQUEST, "invalid listen identity");
    };
    state
        .listens
        .lock()
        .unwrap()
        .retain(|entry| *entry != (track_id, unix));
    StatusCode::NO_CONTENT.into_response()
}

async fn get_listen_activity(State(state): State<Arc<StubState>>) -> Response {
    state.hit("listen-activity");
    axum::Json(json!([
        {"start_time": "2024-01-01T00:00:00Z", "listens": 4},
        {"start_time": "2024-01-02T00:00:00Z", "listens": 0},
        {"start_time": "2024-01-03T00:00:00Z", "listens": 7},
    ]))
    .into_response()
}

async fn get_stats(State(state): State<Arc<StubState>>) -> Response {
    state.hit("stats");
    if let Some((status, body)) = state.stats_failure.lock().unwrap().take() {
        return (
            StatusCode::from_u16(status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response();
    }
    axum::Json(json!({
        "listen_count": 12_043,
        "track_count": 2_911,
        "album_count": 402,
        "artist_count": 310,
        "minutes_listened": 41_830,
    }))
    .into_response()
}

async fn get_search(State(state): State<Arc<StubState>>) -> Response {
    state.hit("search");
    axum::Json(json!({
        "albums": [album_json(5), album_json(9)],
        "artists": [],
        "tracks": [track_json(42)],
    }))
    .into_response()
}

async fn get_aliases(State(state): State<Arc<StubState>>) -> Response {
    state.hit("aliases");
    let aliases = state.aliases.lock().unwrap();
    let items: Vec<Value> = aliases
        .iter()
        .enumerate()
        .map(|(index, (alias, source, is_primary))| {
            json!({
                "id": index as i64 + 1,
                "alias": alias,
                "source": source,
                "is_primary": is_primary,
            })
        })
        .collect();
    axum::Json(Value::Array(items)).into_response()
}

async fn post_alias(
    State(state): State<Arc<StubState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let Some(alias) = form.get("alias").filter(|alias| !alias.is_empty()) else {
        return error_json(StatusCode::BAD_REQUEST, "alias must be provided");
    };
    let mut aliases = state.aliases.lock().unwrap();
    if aliases.iter().any(|(existing, ..)| existing == alias) {
        return error_json(StatusCode::CONFLICT, "alias already exists");
    }
    aliases.push((alias.clone(), "Manual".to_owned(), false));
    StatusCode::OK.into_response()
}

async fn post_alias_delete(
    State(state): State<Arc<StubState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let Some(alias) = form.get("alias") else {
        return error_json(StatusCode::BAD_REQUEST, "alias must be provided");
    };
    state
        .aliases
        .lock()
        .unwrap()
        .retain(|(existing, ..)| existing != alias);
    StatusCode::OK.into_response()
}

async fn post_alias_primary(
    State(state): State<Arc<StubState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let Some(alias) = form.get("alias") else {
        return error_json(StatusCode::BAD_REQUEST, "alias must be provided");
    };
    let mut aliases = state.aliases.lock().unwrap();
    if !aliases.iter().any(|(existing, ..)| existing == alias) {
        return error_json(StatusCode::NOT_FOUND, "no such alias");
    }
    for (existing, _, is_primary) in aliases.iter_mut() {
        *is_primary = existing == alias;
    }
    StatusCode::OK.into_response()
}

async fn get_api_keys(State(state): State<Arc<StubState>>) -> Response {
    state.hit("apikeys");
    let api_keys = state.api_keys.lock().unwrap();
    let items: Vec<Value> = api_keys.iter().map(|key| api_key_json(key)).collect();
    axum::Json(Value::Array(items)).into_response()
}

async fn post_api_key(
    State(state): State<Arc<StubState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let Some(label) = form.get("label").filter(|label| !label.is_empty()) else {
        return error_json(StatusCode::BAD_REQUEST, "label must be provided");
    };
    let mut api_keys = state.api_keys.lock().unwrap();
    let id = api_keys.iter().map(|(id, ..)| *id).max().unwrap_or(0) + 1;
    let entry = (id, format!("mnm_{id:08x}"), label.clone());
    let body = axum::Json(api_key_json(&entry)).into_response();
    api_keys.push(entry);
    body
}

async fn patch_api_key(
    State(state): State<Arc<StubState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let (Some(id), Some(label)) = (
        form.get("id").and_then(|v| v.parse::<i64>().ok()),
        form.get("label"),
    ) else {
        return error_json(StatusCode::BAD_REQUEST, "invalid api key update");
    };
    let mut api_keys = state.api_keys.lock().unwrap();
    match api_keys.iter_mut().find(|(key_id, ..)| *key_id == id) {
        Some((_, _, existing)) => {
            *existing = label.clone();
            StatusCode::OK.into_response()
        }
        None => error_json(StatusCode::NOT_FOUND, "no such api key"),
    }
}

async fn delete_api_key(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(id) = parse_i64(&params, "id") else {
        return error_json(StatusCode::BAD_REQUEST, "invalid api key id");
    };
    state
        .api_keys
        .lock()
        .unwrap()
        .retain(|(key_id, ..)| *key_id != id);
    StatusCode::NO_CONTENT.into_response()
}

fn api_key_json((id, key, label): &(i64, String, String)) -> Value {
    json!({
        "id": id,
        "key": key,
        "label": label,
        "created_at": "2026-08-01T12:00:00Z",
    })
}

async fn post_login(Form(form): Form<HashMap<String, String>>) -> Response {
    let (Some(username), Some(password)) = (form.get("username"), form.get("password")) else {
        return error_json(StatusCode::BAD_REQUEST, "missing credentials");
    };
    if username != USERNAME || password != PASSWORD {
        return error_json(StatusCode::UNAUTHORIZED, "invalid credentials");
    }
    (
        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/"))],
        StatusCode::OK,
    )
        .into_response()
}

async fn post_logout() -> Response {
    (
        [(header::SET_COOKIE, "session=; Path=/; Max-Age=0".to_owned())],
        StatusCode::OK,
    )
        .into_response()
}

fn is_authenticated(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|cookies| cookies.contains(SESSION_COOKIE))
}

async fn get_me(headers: HeaderMap) -> Response {
    if !is_authenticated(&headers) {
        return error_json(StatusCode::UNAUTHORIZED, "unauthorized");
    }
    axum::Json(json!({
        "id": 1,
        "username": USERNAME,
        "role": "admin",
    }))
    .into_response()
}

async fn get_config(State(state): State<Arc<StubState>>) -> Response {
    state.hit("config");
    let body = state
        .config_body
        .lock()
        .unwrap()
        .clone()
        .unwrap_or_else(|| json!({"default_theme": "tokyo-night"}).to_string());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

async fn post_merge_tracks(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    record_merge(&state, "tracks", &params)
}

async fn post_merge_albums(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    record_merge(&state, "albums", &params)
}

async fn post_merge_artists(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    record_merge(&state, "artists", &params)
}

fn record_merge(state: &StubState, path: &str, params: &HashMap<String, String>) -> Response {
    let (Some(_), Some(_)) = (parse_i64(params, "from_id"), parse_i64(params, "to_id")) else {
        return error_json(StatusCode::BAD_REQUEST, "invalid merge request");
    };
    let mut query: Vec<String> = params
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    query.sort();
    state
        .merges
        .lock()
        .unwrap()
        .push((path.to_owned(), query.join("&")));
    StatusCode::OK.into_response()
}

async fn post_replace_image(
    State(state): State<Arc<StubState>>,
    mut multipart: Multipart,
) -> Response {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_owned();
        let value = match field.file_name() {
            Some(file_name) => file_name.to_owned(),
            None => field.text().await.unwrap_or_default(),
        };
        fields.push((name, value));
    }
    if fields.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "empty upload");
    }
    state.uploads.lock().unwrap().push(fields);
    StatusCode::OK.into_response()
}
