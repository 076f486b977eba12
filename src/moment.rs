//! Civil instants: a Gregorian date with a time of day.
//!
//! A [`Moment`] carries no timezone. Every instant the calendar deals with
//! (epochs, New Year moments, query targets) is local civil time, and all
//! arithmetic returns a new value instead of adjusting one in place.

use std::fmt;
use std::str::FromStr;

use crate::date::Date;
use crate::error::{Error, Result};

const SECONDS_PER_DAY: i64 = 86_400;

/// A Gregorian date and a time of day with second resolution.
///
/// Constructors accept Gregorian years `1..=9999`. Arithmetic may leave
/// that range (e.g. while walking epochs backwards) as long as the result
/// stays within the range of [`Date`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Moment {
    date: Date,
    second: u32,
}

impl Moment {
    /// Smallest Gregorian year accepted by the constructors.
    pub const MIN_YEAR: i32 = 1;
    /// Largest Gregorian year accepted by the constructors.
    pub const MAX_YEAR: i32 = 9999;

    /// Creates a moment from Gregorian calendar fields.
    ///
    /// # Example
    ///
    /// ```
    /// use chhankitek::Moment;
    ///
    /// let m = Moment::new(2015, 4, 14, 14, 2, 0).unwrap();
    /// assert_eq!("2015-04-14 14:02:00", m.to_string());
    /// assert!(Moment::new(2015, 4, 14, 24, 0, 0).is_err());
    /// ```
    pub fn new(year: i32, month: i32, day: i32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        let invalid = || Error::InvalidDateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) || hour > 23 || minute > 59 || second > 59 {
            return Err(invalid());
        }
        let date = Date::from_gregorian(year, month, day).ok_or_else(invalid)?;
        Ok(Self {
            date,
            second: hour * 3600 + minute * 60 + second,
        })
    }

    /// Creates a moment at midnight of a Gregorian date.
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Creates a moment at midnight of `date`.
    pub fn at_midnight(date: Date) -> Self {
        Self { date, second: 0 }
    }

    /// Parses the `DD-MM-YYYY HH:MM` form used by published New Year tables.
    ///
    /// ```
    /// use chhankitek::Moment;
    ///
    /// let m = Moment::parse_dmy_hm("14-04-2015 14:02").unwrap();
    /// assert_eq!(Moment::new(2015, 4, 14, 14, 2, 0).unwrap(), m);
    /// ```
    pub fn parse_dmy_hm(s: &str) -> Result<Self> {
        let unparsable = || Error::UnparsableDateTime { input: s.to_owned() };
        let (date, time) = s.trim().split_once(' ').ok_or_else(unparsable)?;
        let [d, m, y] = split_fields::<3>(date, '-').ok_or_else(unparsable)?;
        let [hh, mm] = split_fields::<2>(time.trim(), ':').ok_or_else(unparsable)?;
        Self::new(y, m, d, hh as u32, mm as u32, 0)
    }

    /// Returns the calendar-independant date of the moment.
    pub fn date(&self) -> Date {
        self.date
    }
    /// Returns `(year, month, day)` in the Gregorian calendar.
    pub fn gregorian(&self) -> (i32, i32, i32) {
        self.date.gregorian()
    }
    pub fn year(&self) -> i32 {
        self.gregorian().0
    }
    pub fn month(&self) -> i32 {
        self.gregorian().1
    }
    pub fn day(&self) -> i32 {
        self.gregorian().2
    }
    pub fn hour(&self) -> u32 {
        self.second / 3600
    }
    pub fn minute(&self) -> u32 {
        self.second / 60 % 60
    }
    pub fn second(&self) -> u32 {
        self.second % 60
    }

    /// Returns a new moment `days` whole days later (earlier if negative).
    pub fn add_days(self, days: i64) -> Self {
        self.add_seconds(days * SECONDS_PER_DAY)
    }

    /// Returns a new moment `seconds` later (earlier if negative).
    pub fn add_seconds(self, seconds: i64) -> Self {
        let total = self.second as i64 + seconds;
        let days = total.div_euclid(SECONDS_PER_DAY);
        Self {
            date: self.date + days as i32,
            second: total.rem_euclid(SECONDS_PER_DAY) as u32,
        }
    }

    /// Returns the same time of day one Gregorian year later. February 29
    /// becomes February 28 in a common year.
    pub fn add_one_year(self) -> Self {
        let (y, m, d) = self.gregorian();
        let d = d.min(crate::date::days_in_month(y + 1, m));
        // the clamped day always exists
        let date = Date::from_gregorian(y + 1, m, d).unwrap_or(self.date + 365);
        Self {
            date,
            second: self.second,
        }
    }

    /// Number of whole days from `earlier` to `self`, truncated toward zero.
    ///
    /// ```
    /// use chhankitek::Moment;
    ///
    /// let a = Moment::new(2024, 1, 1, 12, 0, 0).unwrap();
    /// let b = Moment::new(2024, 1, 3, 6, 0, 0).unwrap();
    /// assert_eq!(1, b.days_since(a));
    /// assert_eq!(-1, a.days_since(b));
    /// ```
    pub fn days_since(&self, earlier: Moment) -> i64 {
        (self.timestamp() - earlier.timestamp()) / SECONDS_PER_DAY
    }

    fn timestamp(&self) -> i64 {
        self.date.jdn() as i64 * SECONDS_PER_DAY + self.second as i64
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by ` HH:MM[:SS]` or
/// `THH:MM[:SS]`.
impl FromStr for Moment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let unparsable = || Error::UnparsableDateTime { input: s.to_owned() };
        let s = s.trim();
        let (date, time) = match s.split_once([' ', 'T']) {
            Some((date, time)) => (date, Some(time.trim())),
            None => (s, None),
        };
        let [y, m, d] = split_fields::<3>(date, '-').ok_or_else(unparsable)?;
        let (hh, mm, ss) = match time {
            None => (0, 0, 0),
            Some(time) => match split_fields::<3>(time, ':') {
                Some([hh, mm, ss]) => (hh, mm, ss),
                None => {
                    let [hh, mm] = split_fields::<2>(time, ':').ok_or_else(unparsable)?;
                    (hh, mm, 0)
                }
            },
        };
        Self::new(y, m, d, hh as u32, mm as u32, ss as u32)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.gregorian();
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            y,
            m,
            d,
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

fn split_fields<const N: usize>(s: &str, sep: char) -> Option<[i32; N]> {
    let mut out = [0; N];
    let mut it = s.split(sep);
    for slot in out.iter_mut() {
        let field = it.next()?;
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = field.parse().ok()?;
    }
    it.next().is_none().then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields() {
        let m = Moment::new(1996, 9, 24, 7, 8, 9).unwrap();
        assert_eq!((1996, 9, 24), m.gregorian());
        assert_eq!((7, 8, 9), (m.hour(), m.minute(), m.second()));
        assert_eq!("1996-09-24", m.date().iso_gregorian());
    }

    #[test]
    fn rejects_invalid_fields() {
        for (y, mo, d, h, mi) in [
            (0, 1, 1, 0, 0),
            (10000, 1, 1, 0, 0),
            (2023, 2, 29, 0, 0),
            (2024, 1, 1, 24, 0),
            (2024, 1, 1, 0, 60),
        ] {
            assert!(Moment::new(y, mo, d, h, mi, 0).is_err(), "{y}-{mo}-{d} {h}:{mi}");
        }
    }

    #[test]
    fn arithmetic_is_by_value() {
        let start = Moment::new(2024, 2, 28, 22, 0, 0).unwrap();
        let later = start.add_days(2);
        assert_eq!("2024-03-01 22:00:00", later.to_string());
        assert_eq!("2024-02-28 22:00:00", start.to_string());
        assert_eq!("2024-02-29 01:30:00", start.add_seconds(3 * 3600 + 1800).to_string());
        assert_eq!("2024-02-27 23:00:00", start.add_seconds(-23 * 3600).to_string());
    }

    #[test]
    fn add_one_year_clamps_leap_day() {
        let m = Moment::from_ymd(2024, 2, 29).unwrap();
        assert_eq!("2025-02-28 00:00:00", m.add_one_year().to_string());
        let m = Moment::from_ymd(1900, 1, 1).unwrap();
        assert_eq!("1901-01-01 00:00:00", m.add_one_year().to_string());
    }

    #[test]
    fn days_since_truncates() {
        let a = Moment::from_ymd(2024, 1, 1).unwrap();
        for (b, expected) in [
            (Moment::new(2024, 1, 1, 23, 59, 59).unwrap(), 0),
            (Moment::from_ymd(2024, 1, 2).unwrap(), 1),
            (Moment::new(2023, 12, 31, 0, 0, 1).unwrap(), 0),
            (Moment::from_ymd(2023, 12, 31).unwrap(), -1),
        ] {
            assert_eq!(expected, b.days_since(a), "{b}");
        }
    }

    #[test]
    fn parse() {
        for (s, expected) in [
            ("2024-05-22", "2024-05-22 00:00:00"),
            ("2024-05-22 13:05", "2024-05-22 13:05:00"),
            ("2024-05-22T13:05:07", "2024-05-22 13:05:07"),
        ] {
            assert_eq!(expected, s.parse::<Moment>().unwrap().to_string());
        }
        for s in ["2024-5", "2024-05-22 1:2:3:4", "abcd-01-01", "2024-02-30", "-2024-01-01"] {
            assert!(s.parse::<Moment>().is_err(), "{s}");
        }
    }

    #[test]
    fn parse_override_form() {
        let m = Moment::parse_dmy_hm("12-04-1879 11:36").unwrap();
        assert_eq!("1879-04-12 11:36:00", m.to_string());
        assert!(Moment::parse_dmy_hm("1879-04-12 11:36").is_err());
    }
}
