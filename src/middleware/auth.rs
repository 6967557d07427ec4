//! Authentication middleware
//!
//! The rental service is the only consumer: reads are open, mutations
//! require a bearer token naming an author. Tokens are parsed once per
//! request by `optional_auth_middleware`; handlers that require an
//! identity use the `AuthenticatedUser` extractor, which rejects with
//! 403 before any database work happens.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                AppError::Forbidden("Authentication credentials were not provided".to_string())
            })
    }
}

/// Optional authentication middleware (doesn't fail if no token)
///
/// A missing or invalid token simply leaves the request anonymous; the
/// extractor above decides whether that matters for the endpoint.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            match AuthService::verify_token(token, &state.config().jwt.secret) {
                Ok(claims) => match claims.sub.parse::<i64>() {
                    Ok(user_id) => {
                        let user = AuthenticatedUser {
                            id: user_id,
                            username: claims.username,
                        };
                        request.extensions_mut().insert(user);
                    }
                    Err(_) => {
                        debug!(sub = %claims.sub, "Ignoring token with non-numeric subject");
                    }
                },
                Err(e) => {
                    debug!(error = ?e, "Ignoring unverifiable bearer token");
                }
            }
        }
    }

    next.run(request).await
}
