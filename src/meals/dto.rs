use serde::{Deserialize, Serialize};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
};

use crate::error::{ApiError, FieldError};
use crate::meals::repo::Meal;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Raw string, coerced to a calendar date during validation.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub on_diet: Option<bool>,
}

/// A fully validated meal, ready to persist.
#[derive(Debug)]
pub struct NewMeal {
    pub name: String,
    pub description: String,
    pub date: Date,
    pub time: String,
    pub on_diet: bool,
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Meal,
}

/// Accepts a plain `YYYY-MM-DD` or a full RFC 3339 timestamp, keeping the
/// date part of the latter.
fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
    if let Ok(odt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(odt.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
}

impl CreateMealRequest {
    /// Checks every field and reports all failures together.
    pub fn validate(self) -> Result<NewMeal, ApiError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name cannot be empty"));
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Description cannot be empty"));
        }

        let raw_date = self.date.trim();
        let date = if raw_date.is_empty() {
            errors.push(FieldError::new("date", "Date is required"));
            None
        } else {
            match parse_date(raw_date) {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(FieldError::new("date", "Date must be a valid calendar date"));
                    None
                }
            }
        };

        if self.time.trim().is_empty() {
            errors.push(FieldError::new("time", "Time cannot be empty"));
        }

        let on_diet = self.on_diet;
        if on_diet.is_none() {
            errors.push(FieldError::new("onDiet", "onDiet is required"));
        }

        match (date, on_diet) {
            (Some(date), Some(on_diet)) if errors.is_empty() => Ok(NewMeal {
                name: self.name,
                description: self.description,
                date,
                time: self.time,
                on_diet,
            }),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}
