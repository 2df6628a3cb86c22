//! Reservation aggregate
//!
//! Contains the Reservation entity and the in-memory store that owns a
//! session's bookings.

pub mod model;
pub mod store;

pub use model::{Reservation, MAX_PARTY_SIZE, MIN_PARTY_SIZE};
pub use store::ReservationStore;
