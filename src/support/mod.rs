pub mod errors;
pub mod logging;

pub use errors::{BookingError, BookingResult};
pub use logging::init_tracing;
