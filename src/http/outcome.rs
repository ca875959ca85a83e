//! The caller-visible result of a dispatched call.

/// Result of a single backend call: a decoded value, or nothing.
///
/// The UI layer acts on "did it work", not on why it failed, so the failure
/// cause is logged at the dispatch site rather than propagated. Exactly one
/// outcome is produced per dispatched call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The call completed and the body decoded into the expected type.
    Success(T),
    /// The call failed: encoding, transport, 401, or an undecodable body.
    Failure,
}

impl<T> Outcome<T> {
    /// Whether a value is present.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The decoded value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure => None,
        }
    }

    /// Borrow the decoded value, if any.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure => None,
        }
    }
}
