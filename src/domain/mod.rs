pub mod catalog;
pub mod reservation;
pub mod validation;

// Re-export commonly used types
pub use catalog::{Catalog, Restaurant};
pub use reservation::{Reservation, ReservationStore};
pub use validation::{is_valid_email, is_valid_time};

// Re-export BookingError from support for convenience
pub use crate::support::errors::{BookingError, BookingResult};
