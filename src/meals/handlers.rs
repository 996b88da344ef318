use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::meals::dto::{CreateMealRequest, MealResponse};
use crate::meals::repo::Meal;
use crate::session::{self, SessionToken};
use crate::state::AppState;

/// POST /meals
#[instrument(skip(state, token, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    token: SessionToken,
    payload: Result<Json<CreateMealRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MealResponse>), ApiError> {
    let Json(payload) = payload?;
    let new_meal = payload.validate()?;

    let user_id = session::resolve_user(&state.db, &token.0)
        .await?
        .ok_or_else(|| {
            warn!("meal logging with a session token that matches no user");
            ApiError::UnknownSession
        })?;

    let meal = Meal::create(&state.db, Uuid::new_v4(), &new_meal, user_id).await?;

    info!(meal_id = %meal.id, %user_id, on_diet = meal.on_diet, "meal logged");
    Ok((StatusCode::CREATED, Json(MealResponse { meal })))
}
