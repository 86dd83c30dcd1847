//! In-process chat server speaking the same contract as the real backend:
//! same routes, same status codes, same plain-text error bodies.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::{DateTime, FixedOffset, Utc};

use olha_client::{ApiConfig, ChatApi};
use olha_types::api::{AuthCredentials, CreateChannelRequest, DeleteChannelResponse, HealthStatus};
use olha_types::models::{Channel, ChannelId, Message, User, UserId};

pub type AppState = Arc<Mutex<Store>>;

#[derive(Default)]
pub struct Store {
    pub users: Vec<(User, String)>,
    pub channels: Vec<Channel>,
    pub messages: Vec<Message>,
    pub unhealthy: Option<String>,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().map(|(u, _)| u).find(|u| u.id == id)
    }

    pub fn add_user(&mut self, username: &str, password: &str) -> User {
        let user = User {
            id: self.next_id(),
            username: username.to_string(),
        };
        self.users.push((user.clone(), password.to_string()));
        user
    }

    pub fn add_message(
        &mut self,
        channel_id: ChannelId,
        user: &User,
        content: &str,
        color: Option<&str>,
        timestamp: DateTime<FixedOffset>,
    ) -> Message {
        let msg = Message {
            id: self.next_id(),
            channel_id,
            user_id: user.id,
            user_username: user.username.clone(),
            user_color: color.map(str::to_string),
            content: content.to_string(),
            timestamp,
        };
        self.messages.push(msg.clone());
        msg
    }
}

/// Mirrors `http.Error`: plain text with a trailing newline.
fn plain_error(status: StatusCode, msg: &str) -> Response {
    (status, format!("{}\n", msg)).into_response()
}

async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<AuthCredentials>,
) -> Response {
    if req.username.is_empty() || req.password.is_empty() {
        return plain_error(StatusCode::BAD_REQUEST, "Username and password cannot be empty");
    }

    let mut store = state.lock().unwrap();
    if store.users.iter().any(|(u, _)| u.username == req.username) {
        return plain_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user");
    }

    let user = store.add_user(&req.username, &req.password);
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn login_user(
    State(state): State<AppState>,
    Json(req): Json<AuthCredentials>,
) -> Response {
    if req.username.is_empty() || req.password.is_empty() {
        return plain_error(StatusCode::BAD_REQUEST, "Username and password cannot be empty");
    }

    let store = state.lock().unwrap();
    let Some((user, password)) = store.users.iter().find(|(u, _)| u.username == req.username)
    else {
        return plain_error(StatusCode::NOT_FOUND, "User not found");
    };

    if *password != req.password {
        return plain_error(StatusCode::UNAUTHORIZED, "Invalid username or password");
    }

    Json(user.clone()).into_response()
}

async fn get_all_channels(State(state): State<AppState>) -> Response {
    let store = state.lock().unwrap();
    Json(store.channels.clone()).into_response()
}

async fn create_channel(
    State(state): State<AppState>,
    Json(req): Json<CreateChannelRequest>,
) -> Response {
    if req.name.is_empty() || req.user_id == 0 {
        return plain_error(StatusCode::BAD_REQUEST, "Channel name and user ID are required");
    }

    let mut store = state.lock().unwrap();
    let Some(creator) = store.user(req.user_id).cloned() else {
        return plain_error(StatusCode::BAD_REQUEST, "User not found");
    };

    let channel = Channel {
        id: store.next_id(),
        name: req.name,
        description: req.description,
        created_by: creator.id,
        created_by_username: creator.username,
        created_at: Utc::now().fixed_offset(),
    };
    store.channels.push(channel.clone());

    (StatusCode::CREATED, Json(channel)).into_response()
}

async fn delete_channel(
    State(state): State<AppState>,
    Path((channel_id, user_id)): Path<(ChannelId, UserId)>,
) -> Response {
    let mut store = state.lock().unwrap();
    let Some(pos) = store.channels.iter().position(|c| c.id == channel_id) else {
        return plain_error(StatusCode::NOT_FOUND, "Channel not found");
    };

    if store.channels[pos].created_by != user_id {
        return plain_error(
            StatusCode::FORBIDDEN,
            "Only the channel creator can delete this channel",
        );
    }

    store.channels.remove(pos);
    store.messages.retain(|m| m.channel_id != channel_id);

    Json(DeleteChannelResponse {
        message: "Channel deleted successfully".into(),
        channel_id,
    })
    .into_response()
}

async fn history(
    State(state): State<AppState>,
    Path(channel_id): Path<ChannelId>,
) -> Response {
    let store = state.lock().unwrap();
    let mut messages: Vec<Message> = store
        .messages
        .iter()
        .filter(|m| m.channel_id == channel_id)
        .cloned()
        .collect();
    messages.sort_by_key(|m| m.timestamp);

    Json(messages).into_response()
}

async fn health(State(state): State<AppState>) -> Response {
    let store = state.lock().unwrap();
    match &store.unhealthy {
        None => Json(HealthStatus {
            status: "healthy".into(),
            error: None,
            version: "1.0.0".into(),
        })
        .into_response(),
        Some(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthStatus {
                status: "unhealthy".into(),
                error: Some(err.clone()),
                version: "1.0.0".into(),
            }),
        )
            .into_response(),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/users/login", post(login_user))
        .route("/api/channels", get(get_all_channels).post(create_channel))
        .route("/api/channels/{channel_id}/users/{user_id}", delete(delete_channel))
        .route("/api/messages/history/{channel_id}", get(history))
        .route("/api/health", get(health))
        .with_state(state)
}

/// Serve `app` on an ephemeral loopback port and return its origin.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Start a conforming server and a client pointed at it.
pub async fn start() -> (ChatApi, AppState) {
    let state: AppState = Arc::new(Mutex::new(Store::default()));
    let origin = serve(router(state.clone())).await;
    let api = ChatApi::new(ApiConfig::new(origin).unwrap()).unwrap();
    (api, state)
}

/// An origin nothing listens on.
pub async fn dead_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
