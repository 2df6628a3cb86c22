pub mod booking;
pub mod session;

// Re-export key types for convenience
pub use booking::{BookingForm, MAX_PARTY_SIZE, MIN_PARTY_SIZE};
pub use session::{Action, MenuItem, Notice, NoticeLevel, Screen, Session, Transition};
