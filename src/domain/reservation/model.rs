//! Reservation entity

use std::fmt;

use chrono::NaiveDate;

/// Smallest bookable party
pub const MIN_PARTY_SIZE: u32 = 1;
/// Largest bookable party
pub const MAX_PARTY_SIZE: u32 = 20;

/// Table booking at a restaurant
///
/// Built only from a validated booking form, so every field already obeys
/// its rule by the time a value of this type exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Restaurant name, taken from the catalog
    pub restaurant: String,
    /// Guest name
    pub customer_name: String,
    /// Number of people, `MIN_PARTY_SIZE..=MAX_PARTY_SIZE`
    pub party_size: u32,
    /// Reservation date, past dates allowed
    pub date: NaiveDate,
    /// Arrival time, `HH:MM` 24-hour
    pub time: String,
    /// Contact email, also the cancellation key
    pub email: String,
}

impl Reservation {
    pub fn new(
        restaurant: impl Into<String>,
        customer_name: impl Into<String>,
        party_size: u32,
        date: NaiveDate,
        time: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            restaurant: restaurant.into(),
            customer_name: customer_name.into(),
            party_size,
            date,
            time: time.into(),
            email: email.into(),
        }
    }

    /// Case-insensitive email comparison used for cancellation.
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | {}",
            self.restaurant, self.customer_name, self.party_size, self.date, self.time, self.email
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reservation() -> Reservation {
        Reservation::new(
            "Zaitoon",
            "Asha",
            4,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            "19:30",
            "asha@example.com",
        )
    }

    #[test]
    fn email_match_ignores_case() {
        let r = sample_reservation();
        assert!(r.matches_email("asha@example.com"));
        assert!(r.matches_email("ASHA@EXAMPLE.COM"));
        assert!(r.matches_email("Asha@Example.Com"));
        assert!(!r.matches_email("asha@example.org"));
        assert!(!r.matches_email(""));
    }

    #[test]
    fn displays_as_table_row() {
        assert_eq!(
            sample_reservation().to_string(),
            "Zaitoon | Asha | 4 | 2024-05-01 | 19:30 | asha@example.com"
        );
    }
}
