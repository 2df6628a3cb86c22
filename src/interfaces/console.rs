//! Line-oriented terminal front-end
//!
//! Renders the current [`Screen`], reads the user's answer, and feeds the
//! resulting [`Action`] to the [`Session`]. Input and output are generic so
//! the whole flow can be driven from a script.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::application::{Action, BookingForm, MenuItem, Screen, Session};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct Console<R, W> {
    session: Session,
    input: R,
    output: W,
    screen: Screen,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            screen: Screen::Home,
            today: Local::now().date_naive(),
        }
    }

    /// Date used when the user leaves the reservation date blank.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.output)
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let action = match self.screen.clone() {
                Screen::Home => self.home()?,
                Screen::Booking(restaurant) => self.booking(&restaurant)?,
                Screen::List => self.list()?,
                Screen::Cancel => self.cancel()?,
            };
            let Some(action) = action else {
                debug!("console closed");
                return Ok(());
            };

            let transition = self.session.handle(&self.screen, action);
            if let Some(notice) = transition.notice {
                writeln!(self.output, "{}", notice)?;
            }
            if transition.screen != self.screen {
                debug!(from = ?self.screen, to = ?transition.screen, "screen changed");
            }
            self.screen = transition.screen;
        }
    }

    fn home(&mut self) -> io::Result<Option<Action>> {
        writeln!(self.output)?;
        writeln!(self.output, "== Choose a Restaurant to Make a Reservation ==")?;
        for (idx, restaurant) in self.session.catalog().iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {} ({})",
                idx + 1,
                restaurant.name,
                restaurant.image
            )?;
        }
        let count = self.session.catalog().len();
        writeln!(
            self.output,
            "[1-{}] reserve  [v] view reservations  [c] cancel a reservation  [q] quit",
            count
        )?;

        loop {
            let Some(choice) = self.prompt(">")? else {
                return Ok(None);
            };
            match choice.trim() {
                "q" => return Ok(None),
                "v" => return Ok(Some(Action::Open(MenuItem::ViewReservations))),
                "c" => return Ok(Some(Action::Open(MenuItem::CancelReservation))),
                other => {
                    let picked = other
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| self.session.catalog().by_position(n));
                    match picked {
                        Some(restaurant) => {
                            return Ok(Some(Action::Reserve(restaurant.name.clone())))
                        }
                        None => writeln!(self.output, "[error] Unknown choice: {}", other)?,
                    }
                }
            }
        }
    }

    fn booking(&mut self, restaurant: &str) -> io::Result<Option<Action>> {
        writeln!(self.output)?;
        writeln!(self.output, "== Reserve a Table at {} ==", restaurant)?;

        let Some(customer_name) = self.prompt("Your Name:")? else {
            return Ok(None);
        };
        let Some(party_size) = self.read_party_size()? else {
            return Ok(None);
        };
        let Some(date) = self.read_date()? else {
            return Ok(None);
        };
        let Some(time) = self.prompt("Time (HH:MM - 24-hour format):")? else {
            return Ok(None);
        };
        let Some(email) = self.prompt("Email Address:")? else {
            return Ok(None);
        };
        let form = BookingForm::new(customer_name, party_size, date, time, email);

        loop {
            let Some(answer) = self.prompt("[y] confirm reservation  [b] go back >")? else {
                return Ok(None);
            };
            match answer.trim() {
                "y" => return Ok(Some(Action::Submit(form))),
                "b" => return Ok(Some(Action::GoBack)),
                other => writeln!(self.output, "[error] Unknown choice: {}", other)?,
            }
        }
    }

    fn read_party_size(&mut self) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt("Number of People [1]:")? else {
                return Ok(None);
            };
            let line = line.trim();
            if line.is_empty() {
                return Ok(Some(1));
            }
            match line.parse::<u32>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "[error] Enter a whole number of people.")?,
            }
        }
    }

    fn read_date(&mut self) -> io::Result<Option<NaiveDate>> {
        let label = format!("Reservation Date (YYYY-MM-DD) [{}]:", self.today);
        loop {
            let Some(line) = self.prompt(&label)? else {
                return Ok(None);
            };
            let line = line.trim();
            if line.is_empty() {
                return Ok(Some(self.today));
            }
            match NaiveDate::parse_from_str(line, DATE_FORMAT) {
                Ok(date) => return Ok(Some(date)),
                Err(_) => writeln!(self.output, "[error] Enter the date as YYYY-MM-DD.")?,
            }
        }
    }

    fn list(&mut self) -> io::Result<Option<Action>> {
        writeln!(self.output)?;
        writeln!(self.output, "== All Reservations ==")?;
        match self.session.list_notice() {
            Some(notice) => writeln!(self.output, "{}", notice)?,
            None => {
                writeln!(self.output, "Restaurant | Name | People | Date | Time | Email")?;
                for reservation in self.session.reservations() {
                    writeln!(self.output, "{}", reservation)?;
                }
            }
        }
        writeln!(self.output, "[h] home  [c] cancel a reservation  [q] quit")?;

        loop {
            let Some(choice) = self.prompt(">")? else {
                return Ok(None);
            };
            match choice.trim() {
                "h" => return Ok(Some(Action::Open(MenuItem::Home))),
                "c" => return Ok(Some(Action::Open(MenuItem::CancelReservation))),
                "q" => return Ok(None),
                other => writeln!(self.output, "[error] Unknown choice: {}", other)?,
            }
        }
    }

    fn cancel(&mut self) -> io::Result<Option<Action>> {
        writeln!(self.output)?;
        writeln!(self.output, "== Cancel Reservation ==")?;
        let Some(email) = self.prompt("Enter your Email Address ([h] home, [q] quit):")? else {
            return Ok(None);
        };
        match email.trim() {
            "h" => return Ok(Some(Action::Open(MenuItem::Home))),
            "q" => return Ok(None),
            _ => {}
        }
        Ok(Some(Action::Cancel(email)))
    }

    /// Print `label` and read one line without its line ending.
    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
