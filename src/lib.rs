pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::database::ConnectionProvider;
use crate::services::message_service::MessageService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub connections: ConnectionProvider,
    pub message_service: MessageService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let connections = ConnectionProvider::from_config(&config);
        let message_service = MessageService::new(connections.clone());

        Self {
            config: Arc::new(config),
            connections,
            message_service,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(routes::health::index).fallback(routes::method_not_allowed),
        )
        .route(
            "/health",
            get(routes::health::health).fallback(routes::method_not_allowed),
        )
        .route(
            "/echo",
            post(routes::echo::echo).fallback(routes::method_not_allowed),
        )
        .route(
            "/messages",
            get(routes::messages::list_messages)
                .post(routes::messages::create_message)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/save",
            post(routes::messages::save_message).fallback(routes::method_not_allowed),
        )
        .fallback(routes::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
