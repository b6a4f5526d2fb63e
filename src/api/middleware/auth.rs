//! Bearer-token authentication pipeline.
//!
//! Three gates compose in a fixed order, each short-circuiting the request:
//!
//! 1. `authenticate` - verifies the bearer token and attaches a [`Principal`]
//!    (401 when the token is missing, 403 when it is invalid or expired)
//! 2. principal presence - the [`Principal`] extractor (401 when absent)
//! 3. `require_admin` - the admin flag (403 when not set)

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Authenticated identity decoded from a verified token.
///
/// Ephemeral: reconstructed per request, never persisted.
#[derive(Clone, Debug)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub is_admin: bool,
}

/// Token-verification middleware.
///
/// Extracts the bearer token from the Authorization header, verifies it,
/// and injects the [`Principal`] into the request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::MissingToken)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::MissingToken)?;

    let claims = state.auth_service.verify_token(token)?;

    let principal = Principal {
        id: claims.id,
        email: claims.email,
        is_admin: claims.is_admin,
    };

    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

/// Admin gate. Runs after `authenticate`; never on its own.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let principal = request
        .extensions()
        .get::<Principal>()
        .ok_or(AppError::Unauthorized)?;

    if !principal.is_admin {
        return Err(AppError::AdminRequired);
    }

    Ok(next.run(request).await)
}

/// Wrap a method router so its handlers require a verified token.
pub fn auth_guard(state: &AppState, routes: MethodRouter<AppState>) -> MethodRouter<AppState> {
    routes.route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
}

/// Wrap a method router so its handlers require an admin principal.
/// Token verification runs first, then the admin check.
pub fn admin_guard(state: &AppState, routes: MethodRouter<AppState>) -> MethodRouter<AppState> {
    auth_guard(state, routes.route_layer(middleware::from_fn(require_admin)))
}

/// Presence gate: handlers taking a [`Principal`] argument reject requests
/// that somehow reached them without an authenticated identity.
#[async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
