use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::{
    errors::{AppError, Result},
    handlers::AppState,
    models::{AppRole, UserInfo},
};

/// A request carrying a valid provider access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// An authenticated user holding the `admin` role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

impl AuthenticatedUser {
    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn authenticate(parts: &Parts, state: &AppState) -> Result<AuthenticatedUser> {
    let token = bearer_token(parts).ok_or(AppError::LoginRequired)?;

    let claims = state.jwt.verify_access_token(token).map_err(|e| {
        tracing::debug!("Rejected access token: {}", e);
        AppError::LoginRequired
    })?;

    let id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::debug!("Token subject is not a user id: {}", claims.sub);
        AppError::LoginRequired
    })?;

    Ok(AuthenticatedUser {
        id,
        email: claims.email,
    })
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        authenticate(parts, state)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let user = authenticate(parts, state)?;

        if !state.store.has_role(user.id, AppRole::Admin).await? {
            tracing::debug!("User {} lacks the admin role", user.id);
            return Err(AppError::LoginRequired);
        }

        Ok(AdminUser(user))
    }
}
