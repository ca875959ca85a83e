//! Concrete request and response kinds the AidVine client exchanges.

mod inbox;
mod location;
mod profile;

pub use inbox::{HelpRequest, HelpRequestDraft, InboxQuery};
pub use location::{LocationAck, LocationUpdate};
pub use profile::{Profile, ProfilePicture, ProfileQuery, ProfileUpdate};
