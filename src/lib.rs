//! # Reservation Desk
//!
//! Single-session restaurant reservation desk: pick a restaurant, book a
//! table, list bookings, cancel by email. Everything lives in memory for
//! the length of one session.
//!
//! ## Architecture
//!
//! - **domain**: Reservation, restaurant catalog, reservation store and
//!   field validation
//! - **application**: Booking form and the session controller that turns
//!   user actions into screen transitions
//! - **interfaces**: Terminal front-end driving a session
//! - **support**: Errors and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod interfaces;
pub mod support;

pub use config::{default_config_path, AppConfig, ConfigError, LoggingConfig, CONFIG_ENV_VAR};

pub use application::{Action, BookingForm, MenuItem, Notice, Screen, Session, Transition};
pub use domain::{Catalog, Reservation, ReservationStore, Restaurant};
pub use interfaces::Console;
pub use support::{init_tracing, BookingError, BookingResult};
