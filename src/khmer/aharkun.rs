//! Aharkun arithmetic on Buddhist-Era years.
//!
//! Every quantity here is an exact integer function of the BE year:
//!
//! - Aharkun: days elapsed since the era origin, the accumulator the others
//!   derive from.
//! - Kromthupul: complement of the Aharkun remainder modulo 800, decides
//!   whether the solar year has 366 days.
//! - Avoman: position in a 692-part lunar cycle, decides leap days.
//! - Bodithey: position in a 30-day cycle, decides leap months.

use crate::error::{Error, Result};

/// A Buddhist-Era year.
///
/// # Example
///
/// ```
/// use chhankitek::khmer::BeYear;
///
/// let y = BeYear::new(2568).unwrap();
/// assert_eq!(8, y.bodithey());
/// assert!(BeYear::new(-1).is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct BeYear(u64);

impl BeYear {
    /// Largest accepted year. `MAX * 292207` and `11 * aharkun(MAX)` stay
    /// far inside `i64`.
    pub const MAX: u64 = 1_000_000_000_000;

    /// Validates a BE year.
    pub fn new(year: i64) -> Result<Self> {
        if year < 0 {
            return Err(Error::NegativeYear { year });
        }
        if year as u64 > Self::MAX {
            return Err(Error::YearOutOfRange {
                year,
                min: 0,
                max: Self::MAX as i64,
            });
        }
        Ok(Self(year as u64))
    }

    /// Converts without validation, clamping into `0..=MAX`. Only for years
    /// derived from a valid civil date.
    pub(crate) fn clamped(year: i64) -> Self {
        Self(year.clamp(0, Self::MAX as i64) as u64)
    }

    pub fn get(self) -> i64 {
        self.0 as i64
    }

    /// The following year.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The preceding year, `None` for year 0.
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    fn scaled(self) -> i64 {
        self.get() * 292207 + 499
    }

    /// `floor((y * 292207 + 499) / 800) + 4`
    pub fn aharkun(self) -> i64 {
        self.scaled() / 800 + 4
    }

    /// `(y * 292207 + 499) mod 800`
    pub fn aharkun_mod(self) -> i64 {
        self.scaled() % 800
    }

    pub fn kromthupul(self) -> i64 {
        800 - self.aharkun_mod()
    }

    /// A Khmer solar year of 366 days.
    pub fn is_solar_leap(self) -> bool {
        self.kromthupul() <= 207
    }

    /// Always in `0..=691`.
    pub fn avoman(self) -> i64 {
        (11 * self.aharkun() + 25) % 692
    }

    /// Always in `0..=29`.
    pub fn bodithey(self) -> i64 {
        let aharkun = self.aharkun();
        ((11 * aharkun + 25) / 692 + aharkun + 29) % 30
    }
}

impl TryFrom<i64> for BeYear {
    type Error = Error;
    fn try_from(year: i64) -> Result<Self> {
        Self::new(year)
    }
}

pub fn aharkun(year: i64) -> Result<i64> {
    BeYear::new(year).map(BeYear::aharkun)
}

pub fn aharkun_mod(year: i64) -> Result<i64> {
    BeYear::new(year).map(BeYear::aharkun_mod)
}

pub fn kromthupul(year: i64) -> Result<i64> {
    BeYear::new(year).map(BeYear::kromthupul)
}

pub fn is_solar_leap(year: i64) -> Result<bool> {
    BeYear::new(year).map(BeYear::is_solar_leap)
}

pub fn avoman(year: i64) -> Result<i64> {
    BeYear::new(year).map(BeYear::avoman)
}

pub fn bodithey(year: i64) -> Result<i64> {
    BeYear::new(year).map(BeYear::bodithey)
}
