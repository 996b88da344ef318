pub mod handlers;

use axum::{routing::get, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/users/metrics", get(handlers::user_metrics))
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietMetrics {
    pub total: i64,
    pub on_diet: i64,
    pub off_diet: i64,
    pub best_streak: i64,
}

/// Single pass over on-diet flags in update order. The run length resets on
/// any off-diet meal; the running maximum is the best streak. An empty
/// sequence yields all zeros.
pub fn compute(on_diet_flags: impl IntoIterator<Item = bool>) -> DietMetrics {
    let mut metrics = DietMetrics::default();
    let mut run = 0i64;
    for on_diet in on_diet_flags {
        metrics.total += 1;
        if on_diet {
            metrics.on_diet += 1;
            run += 1;
            metrics.best_streak = metrics.best_streak.max(run);
        } else {
            run = 0;
        }
    }
    metrics.off_diet = metrics.total - metrics.on_diet;
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_all_zeros() {
        assert_eq!(compute([]), DietMetrics::default());
    }

    #[test]
    fn streak_resets_on_off_diet_meal() {
        let metrics = compute([true, true, false, true]);
        assert_eq!(
            metrics,
            DietMetrics {
                total: 4,
                on_diet: 3,
                off_diet: 1,
                best_streak: 2,
            }
        );
    }

    #[test]
    fn unbroken_run_counts_to_the_end() {
        let metrics = compute([false, true, true, true]);
        assert_eq!(metrics.best_streak, 3);
        assert_eq!(metrics.off_diet, 1);
    }

    #[test]
    fn all_off_diet_has_zero_streak() {
        let metrics = compute([false, false]);
        assert_eq!(
            metrics,
            DietMetrics {
                total: 2,
                on_diet: 0,
                off_diet: 2,
                best_streak: 0,
            }
        );
    }

    #[test]
    fn later_streak_overtakes_an_earlier_one() {
        let metrics = compute([true, false, true, true, true]);
        assert_eq!(metrics.best_streak, 3);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(compute([true])).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["onDiet"], 1);
        assert_eq!(json["offDiet"], 0);
        assert_eq!(json["bestStreak"], 1);
    }
}
