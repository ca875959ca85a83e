//! Typed REST dispatch for the AidVine backend.
//!
//! A request kind implements [`ApiRequest`]; the [`Backend`] turns it into
//! an HTTP call for one of the four CRUD [`Operation`]s and decodes the
//! answer into the kind's response type.
//!
//! # Example
//!
//! ```ignore
//! use aidvine_backend::api::ProfileQuery;
//! use aidvine_backend::http::{Backend, Operation};
//! use aidvine_backend::{Environment, login_channel};
//!
//! let (notifier, mut prompts) = login_channel();
//! let env = Environment::new("https://backend.aidvine.app", notifier)?;
//! env.sign_in_local("ana");
//!
//! let backend = Backend::new(env);
//! let outcome = backend.dispatch(&ProfileQuery, Operation::Read).await;
//! if let Some(profile) = outcome.value() {
//!     println!("signed in as {}", profile.username);
//! }
//!
//! // Elsewhere, the app shell listens for 401-triggered prompts:
//! while prompts.recv().await.is_some() {
//!     // present the re-login flow
//! }
//! ```

mod dispatch;
mod login;
mod operation;
mod outcome;
mod request;
mod upload;

pub use dispatch::{Backend, USER_HEADER};
pub use login::{LoginNotifier, LoginPrompt, LoginPrompts, login_channel};
pub use operation::Operation;
pub use outcome::Outcome;
pub use request::ApiRequest;
