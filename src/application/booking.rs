//! Booking form
//!
//! Raw values collected by the front-end. Field rules are declared with
//! `validator`; [`BookingForm::check`] folds the field errors into the single
//! [`BookingError`] the user gets to see.

use chrono::NaiveDate;
use validator::Validate;

use crate::domain::validation::{validate_email, validate_not_blank, validate_time};
use crate::domain::{Reservation, Restaurant};
use crate::support::errors::{BookingError, BookingResult};

pub use crate::domain::reservation::{MAX_PARTY_SIZE, MIN_PARTY_SIZE};

/// Fields reported as empty, in the order they are checked.
const REQUIRED_TEXT_FIELDS: [&str; 3] = ["customer_name", "time", "email"];

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct BookingForm {
    #[validate(custom(function = "validate_not_blank"))]
    pub customer_name: String,
    #[validate(range(min = MIN_PARTY_SIZE, max = MAX_PARTY_SIZE))]
    pub party_size: u32,
    pub date: NaiveDate,
    #[validate(custom(function = "validate_time"))]
    pub time: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
}

impl BookingForm {
    pub fn new(
        customer_name: impl Into<String>,
        party_size: u32,
        date: NaiveDate,
        time: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            party_size,
            date,
            time: time.into(),
            email: email.into(),
        }
    }

    /// Validate every field and report the most relevant failure.
    ///
    /// Blank fields win over party size, which wins over a bad time, which
    /// wins over a bad email.
    pub fn check(&self) -> BookingResult<()> {
        let errors = match self.validate() {
            Ok(()) => return Ok(()),
            Err(errors) => errors,
        };
        let fields = errors.field_errors();
        let failed = |field: &str, code: Option<&str>| {
            fields.get(field).is_some_and(|errs| {
                errs.iter()
                    .any(|e| code.map_or(true, |code| e.code == code))
            })
        };

        for field in REQUIRED_TEXT_FIELDS {
            if failed(field, Some("blank")) {
                return Err(BookingError::EmptyField(field));
            }
        }
        if failed("party_size", None) {
            return Err(BookingError::InvalidPartySize(self.party_size));
        }
        if failed("time", None) {
            return Err(BookingError::InvalidTime(self.time.clone()));
        }
        Err(BookingError::InvalidEmail(self.email.clone()))
    }

    /// Turn a valid form into a reservation at `restaurant`.
    pub fn into_reservation(self, restaurant: &Restaurant) -> BookingResult<Reservation> {
        self.check()?;
        Ok(Reservation::new(
            restaurant.name.clone(),
            self.customer_name,
            self.party_size,
            self.date,
            self.time,
            self.email,
        ))
    }
}
