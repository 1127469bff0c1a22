use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::utils::parse_usd_cents;

pub const WAITLIST_ROLES: [&str; 8] = [
    "student",
    "business owner",
    "salary earner",
    "cryto trader",
    "job seeker",
    "founder",
    "developer",
    "Influencer",
];

/// A stored signup, as returned to the admin dashboard.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub price_per_scan_cents: i32,
    pub contacted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub price_per_scan_cents: i32,
}

/// Public signup form. Missing fields deserialize as empty strings so they
/// surface as validation messages rather than body errors.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    #[validate(custom(function = "validate_full_name"))]
    pub full_name: String,

    #[validate(
        email(message = "Please enter a valid email."),
        length(max = 255, message = "Email is too long.")
    )]
    pub email: String,

    #[validate(custom(function = "validate_role"))]
    pub role: String,

    #[validate(custom(function = "validate_price"))]
    pub price_per_scan_usd: String,
}

const FIELD_ORDER: [&str; 4] = ["full_name", "email", "role", "price_per_scan_usd"];

impl SignupRequest {
    /// Trim every field and lower-case the email, as the form would.
    pub fn normalized(self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            role: self.role.trim().to_string(),
            price_per_scan_usd: self.price_per_scan_usd.trim().to_string(),
        }
    }

    /// Normalize, validate and convert into a row to insert.
    ///
    /// The error is the first failing field's message, in form order.
    pub fn into_new_entry(self) -> Result<NewWaitlistEntry, String> {
        let request = self.normalized();
        request.validate().map_err(|errors| first_message(&errors))?;

        let cents = parse_usd_cents(&request.price_per_scan_usd).map_err(str::to_string)?;
        let price_per_scan_cents =
            i32::try_from(cents).map_err(|_| "Amount seems too high.".to_string())?;

        Ok(NewWaitlistEntry {
            email: request.email,
            full_name: request.full_name,
            role: request.role,
            price_per_scan_cents,
        })
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    match name.chars().count() {
        0..=1 => Err(invalid("length", "Please enter your name.")),
        2..=120 => Ok(()),
        _ => Err(invalid("length", "Name is too long.")),
    }
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if WAITLIST_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(invalid("role", "Please select a role."))
    }
}

fn validate_price(price: &str) -> Result<(), ValidationError> {
    parse_usd_cents(price)
        .map(|_| ())
        .map_err(|msg| invalid("price", msg))
}

fn first_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}

/// Body of `PATCH /api/admin/waitlist/{id}`.
#[derive(Debug, Deserialize)]
pub struct ContactedUpdate {
    pub contacted: bool,
}
