//! In-memory reservation store
//!
//! One store per session. Records keep insertion order; nothing survives the
//! process.

use tracing::debug;

use super::model::Reservation;

#[derive(Debug, Default, Clone)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reservation. No capacity or duplicate checks.
    pub fn add(&mut self, reservation: Reservation) {
        debug!(
            restaurant = %reservation.restaurant,
            email = %reservation.email,
            "reservation stored"
        );
        self.reservations.push(reservation);
    }

    /// All reservations in insertion order.
    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Remove the first reservation whose email matches, ignoring case.
    ///
    /// At most one record is removed even when several share the address.
    pub fn take(&mut self, email: &str) -> Option<Reservation> {
        let idx = self.reservations.iter().position(|r| r.matches_email(email))?;
        let removed = self.reservations.remove(idx);
        debug!(email = %removed.email, position = idx, "reservation removed");
        Some(removed)
    }

    /// Like [`take`](Self::take), reporting only whether something was removed.
    pub fn cancel(&mut self, email: &str) -> bool {
        self.take(email).is_some()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}
