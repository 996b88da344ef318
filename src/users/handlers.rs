use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use axum_extra::extract::CookieJar;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::session;
use crate::state::AppState;
use crate::users::dto::{CreateUserRequest, UserResponse};
use crate::users::repo::User;

/// POST /users
///
/// Registers a user. A session cookie already on the request is reused;
/// otherwise a fresh token is minted and set as a 7-day cookie on the
/// response.
#[instrument(skip(state, jar, payload))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<UserResponse>), ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (session_id, jar) = match jar.get(session::SESSION_COOKIE) {
        Some(cookie) => (cookie.value().to_string(), jar),
        None => {
            let token = session::mint_token();
            let cookie = session::session_cookie(token.clone(), state.config.session_ttl_days);
            (token, jar.add(cookie))
        }
    };

    let user = User::create(
        &state.db,
        Uuid::new_v4(),
        payload.first_name.trim(),
        payload.last_name.trim(),
        payload.photo_url.trim(),
        &session_id,
    )
    .await?;

    info!(user_id = %user.id, "user registered");
    Ok((jar, Json(UserResponse { user })))
}
