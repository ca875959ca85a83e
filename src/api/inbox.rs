//! Help-request inbox.

use serde::{Deserialize, Serialize};

use crate::http::{ApiRequest, Operation};

/// One help request as shown in the inbox.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HelpRequest {
    pub id: u64,
    pub sender: String,
    pub title: String,
    pub message: String,
    pub created_at: String,
}

/// List the inbox, newest first.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct InboxQuery {
    /// Maximum number of entries to return.
    pub limit: Option<u32>,
    /// Only entries older than this request id.
    pub before: Option<u64>,
}

impl ApiRequest for InboxQuery {
    type Response = Vec<HelpRequest>;

    fn resource(&self) -> &str {
        "requests"
    }

    fn params(&self, operation: Operation) -> Vec<(String, String)> {
        if operation != Operation::Read {
            return Vec::new();
        }
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(before) = self.before {
            params.push(("before".to_string(), before.to_string()));
        }
        params
    }

    fn has_body(&self, _operation: Operation) -> bool {
        false
    }

    fn requests_login(&self, _operation: Operation) -> bool {
        true
    }
}

/// A new help request composed by the user.
#[derive(Clone, Debug, Serialize)]
pub struct HelpRequestDraft {
    pub title: String,
    pub message: String,
}

impl ApiRequest for HelpRequestDraft {
    type Response = HelpRequest;

    fn resource(&self) -> &str {
        "requests"
    }

    fn requests_login(&self, _operation: Operation) -> bool {
        true
    }
}
