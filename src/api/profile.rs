//! Profile resource: read, settings update, picture upload response.

use serde::{Deserialize, Serialize};

use crate::http::{ApiRequest, Operation};

/// The signed-in user's profile as the server stores it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Profile {
    pub username: String,
    pub fullname: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub picture_url: Option<String>,
}

/// Fetch the acting user's profile.
///
/// No parameters: the server resolves the user from the auth headers.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct ProfileQuery;

impl ApiRequest for ProfileQuery {
    type Response = Profile;

    fn resource(&self) -> &str {
        "profile"
    }

    fn has_body(&self, _operation: Operation) -> bool {
        false
    }

    fn requests_login(&self, _operation: Operation) -> bool {
        true
    }
}

/// Update the editable profile fields from the settings screen.
#[derive(Clone, Debug, Serialize)]
pub struct ProfileUpdate {
    pub fullname: String,
    pub phone: Option<String>,
}

impl ApiRequest for ProfileUpdate {
    type Response = Profile;

    fn resource(&self) -> &str {
        "profile"
    }

    fn requests_login(&self, _operation: Operation) -> bool {
        true
    }
}

/// Answer of the picture upload endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProfilePicture {
    /// Where the stored picture can be fetched from.
    pub url: String,
}
