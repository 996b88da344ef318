use axum::{extract::State, Json};
use tracing::{instrument, warn};

use crate::error::ApiError;
use crate::meals::repo::Meal;
use crate::metrics::{compute, DietMetrics};
use crate::session::{self, SessionToken};
use crate::state::AppState;

/// GET /users/metrics
#[instrument(skip(state, token))]
pub async fn user_metrics(
    State(state): State<AppState>,
    token: SessionToken,
) -> Result<Json<DietMetrics>, ApiError> {
    let user_id = session::resolve_user(&state.db, &token.0)
        .await?
        .ok_or_else(|| {
            warn!("metrics request with a session token that matches no user");
            ApiError::UnknownSession
        })?;

    let meals = Meal::list_in_update_order(&state.db, user_id).await?;
    Ok(Json(compute(meals.iter().map(|m| m.on_diet))))
}
