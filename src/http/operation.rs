//! CRUD operations and their wire-method mapping.

/// The logical intent behind a backend call.
///
/// Each request kind defines its behavior per operation independently; the
/// [`ApiRequest`](super::ApiRequest) defaults make every operation defined
/// even for kinds that only ever use one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create a resource (POST).
    Create,
    /// Fetch a resource (GET).
    Read,
    /// Replace a resource (PUT).
    Update,
    /// Remove a resource (DELETE).
    Delete,
}

impl Operation {
    /// The wire method for this operation.
    pub fn method(self) -> reqwest::Method {
        match self {
            Self::Create => reqwest::Method::POST,
            Self::Read => reqwest::Method::GET,
            Self::Update => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }

    /// The inverse of [`method`](Self::method). Every wire method this layer
    /// uses maps back to exactly one operation; anything else is `None`.
    pub fn from_method(method: &reqwest::Method) -> Option<Self> {
        if *method == reqwest::Method::POST {
            Some(Self::Create)
        } else if *method == reqwest::Method::GET {
            Some(Self::Read)
        } else if *method == reqwest::Method::PUT {
            Some(Self::Update)
        } else if *method == reqwest::Method::DELETE {
            Some(Self::Delete)
        } else {
            None
        }
    }

    /// Whether this operation carries an HTTP body on the wire. Read encodes
    /// its parameters in the query string instead.
    pub fn sends_body(self) -> bool {
        !matches!(self, Self::Read)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Read => write!(f, "read"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}
