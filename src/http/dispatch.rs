//! The transport dispatcher: one typed request in, one outcome out.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::operation::Operation;
use super::outcome::Outcome;
use super::request::{self, ApiRequest};
use crate::env::Environment;
use crate::error::{BackendError, Result};

/// Header identifying the acting user when the session is in local mode.
pub const USER_HEADER: &str = "AV-User";

/// The entry point the application layer calls.
///
/// Cheaply cloneable; clones share the same [`Environment`]. Each dispatched
/// call runs on its own single-use transport session. This layer owns no
/// connection pool, no retry policy, and no cancellation. Retry, if wanted,
/// belongs to the caller.
#[derive(Clone)]
pub struct Backend {
    env: Arc<Environment>,
}

impl Backend {
    /// Wrap an environment into a dispatcher.
    pub fn new(env: Environment) -> Self {
        Self { env: Arc::new(env) }
    }

    /// The shared environment, for auth mutation and endpoint inspection.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Dispatch `request` with the given operation and decode the answer.
    ///
    /// Resolves exactly once. Every failure cause (encoding, transport,
    /// 401, undecodable body) collapses to [`Outcome::Failure`]; a 401
    /// additionally emits a login prompt when the request asks for one on
    /// this operation.
    pub async fn dispatch<R: ApiRequest>(
        &self,
        request: &R,
        operation: Operation,
    ) -> Outcome<R::Response> {
        match self.call(request, operation).await {
            Ok(value) => Outcome::Success(value),
            Err(BackendError::Unauthorized) => {
                tracing::warn!(
                    target: "aidvine_backend::http",
                    resource = request.resource(),
                    %operation,
                    "call rejected as unauthorized"
                );
                if request.requests_login(operation) {
                    self.env.login().notify();
                }
                Outcome::Failure
            }
            Err(err) => {
                tracing::debug!(
                    target: "aidvine_backend::http",
                    resource = request.resource(),
                    %operation,
                    error = %err,
                    "call failed"
                );
                Outcome::Failure
            }
        }
    }

    async fn call<R: ApiRequest>(&self, request: &R, operation: Operation) -> Result<R::Response> {
        let url = request::build_url(
            self.env.endpoint(),
            request.resource(),
            &request.params(operation),
        )?;

        // One session per call, torn down once the response is consumed.
        let client = reqwest::Client::builder().build()?;
        let mut builder = client.request(operation.method(), url);

        if operation.sends_body() {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(request::encode_body(request, operation)?);
        }

        let auth = self.env.auth();
        if let Some(username) = auth.local_username() {
            builder = builder.header(USER_HEADER, username);
        }

        let response = builder.send().await?;
        decode(response).await
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("endpoint", &self.env.endpoint().as_str())
            .finish()
    }
}

/// Shared response tail for the CRUD and upload paths: 401 wins over
/// everything (its body is discarded even when well-formed), anything else
/// must decode as the expected type.
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    if response.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err(BackendError::Unauthorized);
    }
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| BackendError::Decoding(err.to_string()))
}
