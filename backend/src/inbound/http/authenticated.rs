//! Request extractor exposing the authenticated traveller, if any.
//!
//! Authentication middleware stores a [`User`] in the request extensions.
//! Handlers take [`AuthenticatedRequest`] and decide for themselves whether
//! an anonymous caller is acceptable.

use std::convert::Infallible;

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::{DomainError, User};

/// An inbound request paired with the user resolved by authentication.
#[derive(Debug, Clone, Default)]
pub struct AuthenticatedRequest {
    user: Option<User>,
}

impl AuthenticatedRequest {
    /// Wrap an optional user.
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    /// The authenticated user, when one was attached.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Return the user or an `unauthorized` domain error.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::ErrorCode;
    /// use travel_backend::inbound::http::AuthenticatedRequest;
    ///
    /// let anonymous = AuthenticatedRequest::default();
    /// let err = anonymous.require_user().unwrap_err();
    /// assert_eq!(err.code(), ErrorCode::Unauthorized);
    /// ```
    pub fn require_user(&self) -> Result<&User, DomainError> {
        self.user
            .as_ref()
            .ok_or_else(|| DomainError::unauthorized("login required"))
    }

    /// Consume the wrapper, yielding the user.
    pub fn into_user(self) -> Option<User> {
        self.user
    }
}

impl FromRequest for AuthenticatedRequest {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<User>().cloned();
        ready(Ok(Self::new(user)))
    }
}
