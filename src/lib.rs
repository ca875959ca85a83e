//! Backend-access layer for the AidVine client.
//!
//! This crate is the data layer of a messaging/help-request client: typed
//! request values are mapped onto HTTP calls across the four CRUD
//! operations, dispatched asynchronously, and decoded into typed responses.
//!
//! - **Typed dispatch**: a request kind implements
//!   [`ApiRequest`](http::ApiRequest) and names its response type; the
//!   [`Backend`](http::Backend) handles the rest.
//! - **Auth-aware headers**: local-mode sessions carry the acting user in
//!   the `AV-User` header; live (token-backed) sessions never do.
//! - **Centralized 401 handling**: any unauthorized answer collapses to a
//!   failed outcome and, when the request asks for it, emits one
//!   [`LoginPrompt`](http::LoginPrompt) on a channel the app shell
//!   subscribes to.
//! - **Multipart upload**: the profile picture travels as a one-part
//!   multipart POST, outside the generic CRUD path.
//!
//! # Example
//!
//! ```ignore
//! use aidvine_backend::api::{InboxQuery, LocationUpdate};
//! use aidvine_backend::{Backend, Environment, Operation, login_channel};
//!
//! let (notifier, prompts) = login_channel();
//! let env = Environment::new("https://backend.aidvine.app", notifier)?;
//! env.sign_in_local("ana");
//! let backend = Backend::new(env);
//!
//! // Inbox listing with query parameters
//! let query = InboxQuery { limit: Some(20), before: None };
//! let inbox = backend.dispatch(&query, Operation::Read).await;
//!
//! // Fire-and-report location ping; a 401 here never prompts for login
//! let ping = LocationUpdate { latitude: 52.52, longitude: 13.4 };
//! let ack = backend.dispatch(&ping, Operation::Update).await;
//! ```
//!
//! The crate never touches presentation state: the login prompt is an event
//! the UI layer consumes, and every outcome is a plain value. Callers get a
//! success-or-failure [`Outcome`](http::Outcome) with no structured cause;
//! the cause is logged via `tracing` at the dispatch site.

pub mod api;
mod env;
mod error;
pub mod http;

pub use env::{AuthState, Environment};
pub use error::{BackendError, Result};

// Re-export commonly used types at the crate root
pub use http::{
    ApiRequest, Backend, LoginNotifier, LoginPrompt, LoginPrompts, Operation, Outcome,
    login_channel,
};
