//! Booking session
//!
//! A [`Session`] owns the catalog and the reservation store for one user.
//! The front-end keeps track of which [`Screen`] is showing and hands every
//! user [`Action`] to [`Session::handle`], which answers with the next screen
//! and a notice to display.

use std::fmt;

use tracing::{info, warn};

use super::booking::BookingForm;
use crate::domain::validation::is_valid_email;
use crate::domain::{Catalog, Reservation, ReservationStore};
use crate::support::errors::{BookingError, BookingResult};

/// What the front-end is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Restaurant picker
    Home,
    /// Booking form for the named restaurant
    Booking(String),
    /// All reservations
    List,
    /// Cancellation by email
    Cancel,
}

/// Entries of the top-level menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Home,
    ViewReservations,
    CancelReservation,
}

impl MenuItem {
    pub fn screen(self) -> Screen {
        match self {
            Self::Home => Screen::Home,
            Self::ViewReservations => Screen::List,
            Self::CancelReservation => Screen::Cancel,
        }
    }
}

/// User input, as interpreted by the front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Open(MenuItem),
    Reserve(String),
    Submit(BookingForm),
    GoBack,
    Cancel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl From<BookingError> for Notice {
    fn from(err: BookingError) -> Self {
        Notice::error(err.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warn",
            NoticeLevel::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

/// Result of handling an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub screen: Screen,
    pub notice: Option<Notice>,
}

impl Transition {
    fn to(screen: Screen) -> Self {
        Self {
            screen,
            notice: None,
        }
    }

    fn with(screen: Screen, notice: impl Into<Notice>) -> Self {
        Self {
            screen,
            notice: Some(notice.into()),
        }
    }
}

/// Message shown on the list screen when nothing is booked.
pub const NO_RESERVATIONS: &str = "No reservations yet.";

pub struct Session {
    catalog: Catalog,
    store: ReservationStore,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            store: ReservationStore::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current reservations in booking order.
    pub fn reservations(&self) -> &[Reservation] {
        self.store.list()
    }

    /// Open the booking form for a catalog restaurant.
    pub fn select(&self, restaurant: &str) -> BookingResult<Screen> {
        self.catalog
            .get(restaurant)
            .map(|r| Screen::Booking(r.name.clone()))
            .ok_or_else(|| BookingError::UnknownRestaurant(restaurant.to_string()))
    }

    /// Validate `form` and store the resulting reservation.
    pub fn submit(&mut self, restaurant: &str, form: BookingForm) -> BookingResult<Reservation> {
        let restaurant = self
            .catalog
            .get(restaurant)
            .ok_or_else(|| BookingError::UnknownRestaurant(restaurant.to_string()))?;
        let reservation = form.into_reservation(restaurant)?;

        info!(
            restaurant = %reservation.restaurant,
            party_size = reservation.party_size,
            date = %reservation.date,
            time = %reservation.time,
            "reservation added"
        );
        self.store.add(reservation.clone());
        Ok(reservation)
    }

    /// Cancel the first reservation booked under `email`, ignoring case.
    pub fn cancel(&mut self, email: &str) -> BookingResult<Reservation> {
        if email.trim().is_empty() {
            return Err(BookingError::EmptyField("email"));
        }
        if !is_valid_email(email) {
            return Err(BookingError::InvalidEmail(email.to_string()));
        }
        let removed = self
            .store
            .take(email)
            .ok_or_else(|| BookingError::NotFound(email.to_string()))?;
        info!(restaurant = %removed.restaurant, "reservation cancelled");
        Ok(removed)
    }

    /// Apply `action` on `screen` and say where to go next.
    pub fn handle(&mut self, screen: &Screen, action: Action) -> Transition {
        match (screen, action) {
            (_, Action::Open(item)) => Transition::to(item.screen()),

            (Screen::Home, Action::Reserve(name)) => match self.select(&name) {
                Ok(next) => Transition::to(next),
                Err(err) => Transition::with(Screen::Home, err),
            },

            (Screen::Booking(restaurant), Action::Submit(form)) => {
                match self.submit(restaurant, form) {
                    Ok(r) => Transition::with(
                        Screen::Home,
                        Notice::success(format!(
                            "Reservation added for {} at {} on {} at {}!",
                            r.customer_name, r.restaurant, r.date, r.time
                        )),
                    ),
                    Err(err) => Transition::with(screen.clone(), err),
                }
            }

            (Screen::Booking(_), Action::GoBack) => Transition::to(Screen::Home),

            (Screen::Cancel, Action::Cancel(email)) => match self.cancel(&email) {
                Ok(_) => Transition::with(
                    Screen::Cancel,
                    Notice::warning(format!(
                        "Reservation under {} has been cancelled.",
                        email
                    )),
                ),
                Err(err) => Transition::with(Screen::Cancel, err),
            },

            (screen, action) => {
                warn!(?screen, ?action, "action not available on this screen");
                Transition::with(screen.clone(), Notice::error("That action is not available here."))
            }
        }
    }

    /// Notice to show on the list screen, if any.
    pub fn list_notice(&self) -> Option<Notice> {
        self.store.is_empty().then(|| Notice::info(NO_RESERVATIONS))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn asha_form() -> BookingForm {
        BookingForm::new("Asha", 4, may_first(), "19:30", "asha@example.com")
    }

    fn booking(name: &str) -> Screen {
        Screen::Booking(name.to_string())
    }

    #[test]
    fn menu_opens_screens_from_anywhere() {
        let mut session = Session::default();
        for screen in [Screen::Home, booking("Zaitoon"), Screen::List, Screen::Cancel] {
            let t = session.handle(&screen, Action::Open(MenuItem::ViewReservations));
            assert_eq!(t, Transition::to(Screen::List));
        }
        let t = session.handle(&booking("Zaitoon"), Action::Open(MenuItem::Home));
        assert_eq!(t.screen, Screen::Home);
    }

    #[test]
    fn reserve_opens_booking_form() {
        let mut session = Session::default();
        let t = session.handle(&Screen::Home, Action::Reserve("Zaitoon".into()));
        assert_eq!(t, Transition::to(booking("Zaitoon")));
    }

    #[test]
    fn reserve_unknown_restaurant_stays_home() {
        let mut session = Session::default();
        let t = session.handle(&Screen::Home, Action::Reserve("Nowhere".into()));
        assert_eq!(t.screen, Screen::Home);
        assert_eq!(t.notice.unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn successful_submit_returns_home_with_confirmation() {
        let mut session = Session::default();
        let t = session.handle(&booking("Zaitoon"), Action::Submit(asha_form()));

        assert_eq!(t.screen, Screen::Home);
        assert_eq!(
            t.notice,
            Some(Notice::success(
                "Reservation added for Asha at Zaitoon on 2024-05-01 at 19:30!"
            ))
        );
        assert_eq!(session.reservations().len(), 1);
    }

    #[test]
    fn failed_submit_keeps_form_open() {
        let mut session = Session::default();
        let form = BookingForm {
            time: "7:45".into(),
            ..asha_form()
        };
        let t = session.handle(&booking("Zaitoon"), Action::Submit(form));

        assert_eq!(t.screen, booking("Zaitoon"));
        assert_eq!(
            t.notice,
            Some(Notice::from(BookingError::InvalidTime("7:45".into())))
        );
        assert!(session.reservations().is_empty());
    }

    #[test]
    fn go_back_leaves_booking() {
        let mut session = Session::default();
        let t = session.handle(&booking("Signature"), Action::GoBack);
        assert_eq!(t, Transition::to(Screen::Home));
    }

    #[test]
    fn cancel_flow() {
        let mut session = Session::default();
        session.submit("Zaitoon", asha_form()).unwrap();

        let t = session.handle(&Screen::Cancel, Action::Cancel("ASHA@EXAMPLE.COM".into()));
        assert_eq!(t.screen, Screen::Cancel);
        assert_eq!(
            t.notice,
            Some(Notice::warning(
                "Reservation under ASHA@EXAMPLE.COM has been cancelled."
            ))
        );
        assert!(session.reservations().is_empty());

        let t = session.handle(&Screen::Cancel, Action::Cancel("asha@example.com".into()));
        assert_eq!(
            t.notice,
            Some(Notice::from(BookingError::NotFound("asha@example.com".into())))
        );
    }

    #[test]
    fn cancel_checks_email_before_searching() {
        let mut session = Session::default();
        session.submit("Zaitoon", asha_form()).unwrap();

        assert_eq!(session.cancel(""), Err(BookingError::EmptyField("email")));
        assert_eq!(
            session.cancel("asha"),
            Err(BookingError::InvalidEmail("asha".into()))
        );
        assert_eq!(session.reservations().len(), 1);
    }

    #[test]
    fn submit_to_unknown_restaurant_is_rejected() {
        let mut session = Session::default();
        assert_eq!(
            session.submit("Nowhere", asha_form()),
            Err(BookingError::UnknownRestaurant("Nowhere".into()))
        );
        assert!(session.reservations().is_empty());
    }

    #[test]
    fn mismatched_action_keeps_screen() {
        let mut session = Session::default();
        let t = session.handle(&Screen::List, Action::Submit(asha_form()));
        assert_eq!(t.screen, Screen::List);
        assert_eq!(t.notice.unwrap().level, NoticeLevel::Error);
        assert!(session.reservations().is_empty());

        let t = session.handle(&Screen::Home, Action::GoBack);
        assert_eq!(t.screen, Screen::Home);
    }

    #[test]
    fn list_notice_only_when_empty() {
        let mut session = Session::default();
        assert_eq!(session.list_notice(), Some(Notice::info(NO_RESERVATIONS)));
        session.submit("Signature", asha_form()).unwrap();
        assert_eq!(session.list_notice(), None);
    }

    #[test]
    fn zaitoon_scenario() {
        let mut session = Session::default();
        let added = session.submit("Zaitoon", asha_form()).unwrap();
        assert_eq!(
            session.reservations(),
            [Reservation::new("Zaitoon", "Asha", 4, may_first(), "19:30", "asha@example.com")]
                .as_slice()
        );
        assert_eq!(session.cancel("ASHA@EXAMPLE.COM"), Ok(added));
        assert!(session.reservations().is_empty());
    }

    #[test]
    fn notice_display_is_tagged() {
        assert_eq!(Notice::success("done").to_string(), "[ok] done");
        assert_eq!(Notice::error("bad").to_string(), "[error] bad");
    }
}
