//! Background location updates.

use serde::{Deserialize, Serialize};

use crate::http::ApiRequest;

/// A location fix reported by the device.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LocationUpdate {
    pub latitude: f64,
    pub longitude: f64,
}

/// The server's acknowledgement of a location update.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct LocationAck {
    pub accepted: bool,
}

// A background ping must never interrupt the user with a login screen, so
// the default `requests_login` (false) stands.
impl ApiRequest for LocationUpdate {
    type Response = LocationAck;

    fn resource(&self) -> &str {
        "location"
    }
}
