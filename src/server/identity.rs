//! Authenticated account identity.
//!
//! Authentication happens upstream; the authenticating proxy forwards the
//! account id in the [`ACCOUNT_HEADER`] header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::StemLifeError;
use crate::property::AccountId;

/// Header carrying the authenticated account id
pub const ACCOUNT_HEADER: &str = "x-account-id";

/// Extractor for the calling account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account(pub AccountId);

impl<S> FromRequestParts<S> for Account
where
    S: Send + Sync,
{
    type Rejection = StemLifeError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(ACCOUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| raw.trim().parse::<AccountId>().ok())
            .map(Account)
            .ok_or(StemLifeError::Unauthenticated)
    }
}
