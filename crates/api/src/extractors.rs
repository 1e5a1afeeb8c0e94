//! Request extractors.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header naming the user on whose behalf a request acts.
pub const ACTING_USER_HEADER: &str = "incominguser";

/// User recorded when the header is absent or blank.
pub const DEFAULT_ACTING_USER: &str = "system";

/// The acting user taken from the `incominguser` header.
///
/// There is no authentication; the header is trusted as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingUser(pub String);

impl ActingUser {
    /// The user name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(ACTING_USER_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_ACTING_USER);
        Ok(Self(user.to_string()))
    }
}
