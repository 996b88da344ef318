use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sqlx::PgPool;
use time::Duration;
use uuid::Uuid;

use crate::error::ApiError;

pub const SESSION_COOKIE: &str = "sessionId";

/// Opaque session token taken from the `sessionId` cookie.
///
/// Extraction only proves the cookie was present; mapping the token to a
/// user is a separate step (`resolve_user`) so registration can run without
/// an existing session. A request with no cookie is rejected with 401.
#[derive(Clone)]
pub struct SessionToken(pub String);

// The token is the sole credential; keep it out of debug output and spans.
impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthorized)?;
        match jar.get(SESSION_COOKIE) {
            Some(cookie) => Ok(SessionToken(cookie.value().to_string())),
            None => Err(ApiError::Unauthorized),
        }
    }
}

/// Mints a fresh session token. Generated once per user, at registration.
pub fn mint_token() -> String {
    Uuid::new_v4().to_string()
}

pub fn session_cookie(token: String, ttl_days: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .max_age(Duration::days(ttl_days))
        .same_site(SameSite::Lax)
        .http_only(true)
        .build()
}

/// Maps a session token to the owning user id. `Ok(None)` means the token
/// belongs to no user, which callers surface as `ApiError::UnknownSession`
/// rather than the missing-cookie rejection.
pub async fn resolve_user(db: &PgPool, token: &str) -> anyhow::Result<Option<Uuid>> {
    let user_id = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id
        FROM users
        WHERE session_id = $1
        "#,
    )
    .bind(token)
    .fetch_optional(db)
    .await?;
    Ok(user_id)
}
