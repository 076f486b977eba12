//! Utilities for converting between Gregorian dates and the Khmer
//! lunisolar calendar (Chhankitek).
//!
//! The calendar is computed from the traditional arithmetic rules (Aharkun,
//! Avoman, Bodithey) rather than from astronomical data, so every result is
//! an exact function of the date.
//!
//! # Examples
//!
//! Basic usage with [`Date`] and [`Moment`]:
//!
//! ```
//! use chhankitek::{Date, Moment};
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//! assert_eq!(6, date.day_of_week()); // Saturday
//!
//! let moment = Moment::new(2024, 4, 13, 22, 17, 0).unwrap();
//! assert_eq!("2024-04-14 00:17:00", moment.add_seconds(7200).to_string());
//! ```
//!
//! Khmer lunar date, year labels and New Year:
//!
//! ```
//! use chhankitek::Moment;
//! use chhankitek::khmer::{self, LunarMonth, NewYearCalculator, AnimalYear};
//!
//! let moment = Moment::from_ymd(2024, 5, 22).unwrap();
//! let lunar = khmer::find_lunar_date(moment);
//! assert_eq!(LunarMonth::Pisak, lunar.month);
//! assert_eq!(Ok(2568), khmer::be_year(moment));
//!
//! let calendar = NewYearCalculator::new();
//! assert_eq!(Ok(AnimalYear::Dragon), calendar.animal_year(moment));
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod khmer;
pub mod moment;

pub use config::CalendarConfig;
pub use date::{Date, YearType};
pub use error::{Error, ErrorKind, Result};
pub use moment::Moment;
