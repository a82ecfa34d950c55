// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) builds a client from the config and hands it to the menu.
//
// Module responsibilities:
// - `client`: Maps fetch/list/create/update/delete on users, posts and
//   comments to HTTP calls and normalizes the outcome.
// - `http`: Plain request/response types and the `Transport` trait, with
//   the reqwest-backed implementation.
// - `error`: `ApiError`, the single failure shape every operation returns.
// - `data`: Serializable `User`, `Post` and `Comment` records.
// - `config`: Base URL configuration.
// - `ui`: The numbered terminal menu.
pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod http;
pub mod ui;

pub use client::{ApiClient, ResourceKind};
pub use config::Config;
pub use data::{Comment, Post, Record, User};
pub use error::{ApiError, OperationResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
