//! Request descriptors: the capability trait, URL assembly, body encoding.

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::operation::Operation;
use crate::error::{BackendError, Result};

/// Body sent for a body-bearing operation that declares no payload.
const EMPTY_BODY: &[u8] = b"{}";

/// A typed backend request.
///
/// Implementors declare the resource path plus, per operation, the query
/// parameters, whether `self` is serialized as the JSON body, and whether a
/// 401 should surface the re-login flow. The defaults give every operation a
/// defined behavior, so a request kind only overrides what it actually uses.
///
/// Values are constructed per call site, handed to
/// [`Backend::dispatch`](super::Backend::dispatch) once, and discarded.
pub trait ApiRequest: Serialize {
    /// The response type the server answers with.
    type Response: DeserializeOwned;

    /// URL path segment identifying the target collection on the backend.
    fn resource(&self) -> &str;

    /// Query parameters for the given operation. Keys are unique per request
    /// kind; insertion order carries no meaning.
    fn params(&self, _operation: Operation) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Whether the given operation serializes `self` as the JSON body. When
    /// `false`, a body-bearing operation sends a literal `{}` instead.
    fn has_body(&self, _operation: Operation) -> bool {
        true
    }

    /// Whether a 401 on this operation should prompt the user to sign in
    /// again.
    fn requests_login(&self, _operation: Operation) -> bool {
        false
    }
}

/// Compose the final request URL from the base endpoint, the resource path,
/// and the operation's parameter set. An empty set never appends a `?`.
pub(crate) fn build_url(
    endpoint: &Url,
    resource: &str,
    params: &[(String, String)],
) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}/{}",
        endpoint.as_str().trim_end_matches('/'),
        resource.trim_start_matches('/'),
    ))?;
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// Encode the body for a body-bearing operation: the request itself as JSON,
/// or the two-byte empty object when the operation declares no payload.
pub(crate) fn encode_body<R: ApiRequest>(request: &R, operation: Operation) -> Result<Vec<u8>> {
    if request.has_body(operation) {
        serde_json::to_vec(request).map_err(BackendError::Encoding)
    } else {
        Ok(EMPTY_BODY.to_vec())
    }
}
