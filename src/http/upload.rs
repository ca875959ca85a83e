//! Profile-picture upload: the one non-JSON request path.

use reqwest::multipart::{Form, Part};

use super::dispatch::{Backend, USER_HEADER, decode};
use super::outcome::Outcome;
use super::request;
use crate::api::ProfilePicture;
use crate::error::{BackendError, Result};

/// Fixed resource path of the upload endpoint.
const UPLOAD_RESOURCE: &str = "upload";

impl Backend {
    /// Upload the user's profile picture.
    ///
    /// Sends a POST with a multipart body holding exactly one part named
    /// `file` (filename `profile`, `application/octet-stream`); the form
    /// generates a fresh random boundary token per call. 401 and decode
    /// failures behave as in [`dispatch`](Self::dispatch), with the login
    /// prompt always requested. The upload is only reachable from a
    /// signed-in screen.
    pub async fn upload_profile_picture(&self, data: Vec<u8>) -> Outcome<ProfilePicture> {
        match self.upload(data).await {
            Ok(picture) => Outcome::Success(picture),
            Err(BackendError::Unauthorized) => {
                tracing::warn!(
                    target: "aidvine_backend::http",
                    resource = UPLOAD_RESOURCE,
                    "upload rejected as unauthorized"
                );
                self.env().login().notify();
                Outcome::Failure
            }
            Err(err) => {
                tracing::debug!(
                    target: "aidvine_backend::http",
                    resource = UPLOAD_RESOURCE,
                    error = %err,
                    "upload failed"
                );
                Outcome::Failure
            }
        }
    }

    async fn upload(&self, data: Vec<u8>) -> Result<ProfilePicture> {
        let url = request::build_url(self.env().endpoint(), UPLOAD_RESOURCE, &[])?;

        let part = Part::bytes(data)
            .file_name("profile")
            .mime_str("application/octet-stream")?;
        let form = Form::new().part("file", part);

        let client = reqwest::Client::builder().build()?;
        let mut builder = client.post(url).multipart(form);

        let auth = self.env().auth();
        if let Some(username) = auth.local_username() {
            builder = builder.header(USER_HEADER, username);
        }

        let response = builder.send().await?;
        decode(response).await
    }
}
