//! Lunar months and their lengths.

use super::aharkun::BeYear;
use super::leap::{self, LeapType};
use crate::error::{Error, Result};

/// Lunar month. `PathamAsath` and `TutiyAsath` ("first" and "second"
/// Asath) replace `Asath` in a leap-month year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum LunarMonth {
    Mikasir,
    Boss,
    Meak,
    Phalkun,
    Chaet,
    Pisak,
    Chesth,
    Asath,
    Srap,
    Phatrobot,
    Assuj,
    Kattik,
    PathamAsath,
    TutiyAsath,
}

impl LunarMonth {
    /// All months in index order.
    pub const ALL: [LunarMonth; 14] = [
        LunarMonth::Mikasir,
        LunarMonth::Boss,
        LunarMonth::Meak,
        LunarMonth::Phalkun,
        LunarMonth::Chaet,
        LunarMonth::Pisak,
        LunarMonth::Chesth,
        LunarMonth::Asath,
        LunarMonth::Srap,
        LunarMonth::Phatrobot,
        LunarMonth::Assuj,
        LunarMonth::Kattik,
        LunarMonth::PathamAsath,
        LunarMonth::TutiyAsath,
    ];

    /// Index in `0..=13`, Mikasir first.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a month by index.
    ///
    /// ```
    /// use chhankitek::khmer::LunarMonth;
    ///
    /// assert_eq!(Ok(LunarMonth::Assuj), LunarMonth::from_index(10));
    /// assert!(LunarMonth::from_index(14).is_err());
    /// ```
    pub fn from_index(index: i64) -> Result<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(Error::InvalidMonthIndex { index })
    }

    /// `true` for the two months that exist only in a leap-month year.
    pub fn is_leap_month_only(self) -> bool {
        matches!(self, LunarMonth::PathamAsath | LunarMonth::TutiyAsath)
    }

    /// Display name in Khmer.
    pub fn name(self) -> &'static str {
        super::fmt::month_name(self)
    }
}

impl TryFrom<u8> for LunarMonth {
    type Error = Error;
    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index as i64)
    }
}

/// Number of days in `month` of BE `year`.
///
/// Chesth gains a day in a leap-day year, both Asath halves of a leap-month
/// year are 30 days, and the rest alternate 29 and 30 starting with 29 for
/// Mikasir.
pub fn days_in_month(month: LunarMonth, year: BeYear) -> u32 {
    use LunarMonth::*;
    match month {
        Chesth if leap::is_leap_day(year) => 30,
        PathamAsath | TutiyAsath => 30,
        _ if month.index() % 2 == 0 => 29,
        _ => 30,
    }
}

/// Number of days in BE `year`: 384, 355 or 354.
pub fn days_in_year(year: BeYear) -> u32 {
    match leap::protetin_leap(year) {
        LeapType::LeapMonth => 384,
        LeapType::LeapDay => 355,
        LeapType::None | LeapType::LeapBoth => 354,
    }
}

/// The month following `month` in BE `year`.
pub fn next_month(month: LunarMonth, year: BeYear) -> LunarMonth {
    use LunarMonth::*;
    match month {
        Mikasir => Boss,
        Boss => Meak,
        Meak => Phalkun,
        Phalkun => Chaet,
        Chaet => Pisak,
        Pisak => Chesth,
        Chesth if leap::is_leap_month(year) => PathamAsath,
        Chesth => Asath,
        Asath => Srap,
        Srap => Phatrobot,
        Phatrobot => Assuj,
        Assuj => Kattik,
        Kattik => Mikasir,
        PathamAsath => TutiyAsath,
        TutiyAsath => Srap,
    }
}

/// [`days_in_month`] for a raw month index and BE year.
///
/// ```
/// use chhankitek::khmer::month;
///
/// assert_eq!(Ok(30), month::days_in_khmer_month(6, 2569)); // Chesth, leap-day year
/// assert!(month::days_in_khmer_month(14, 2569).is_err());
/// ```
pub fn days_in_khmer_month(month: i64, year: i64) -> Result<u32> {
    let month = LunarMonth::from_index(month)?;
    Ok(days_in_month(month, BeYear::new(year)?))
}

/// [`days_in_year`] for a raw BE year.
pub fn days_in_khmer_year(year: i64) -> Result<u32> {
    BeYear::new(year).map(days_in_year)
}

/// [`next_month`] for a raw month index and BE year.
pub fn next_month_of(month: i64, year: i64) -> Result<LunarMonth> {
    let month = LunarMonth::from_index(month)?;
    Ok(next_month(month, BeYear::new(year)?))
}

#[cfg(test)]
mod tests {
    use super::LunarMonth::*;
    use super::*;

    fn be(y: i64) -> BeYear {
        BeYear::new(y).unwrap()
    }

    #[test]
    fn month_lengths() {
        let common = be(2568);
        for (month, std) in [
            (Mikasir, 29),
            (Boss, 30),
            (Meak, 29),
            (Phalkun, 30),
            (Chaet, 29),
            (Pisak, 30),
            (Chesth, 29),
            (Asath, 30),
            (Srap, 29),
            (Phatrobot, 30),
            (Assuj, 29),
            (Kattik, 30),
            (PathamAsath, 30),
            (TutiyAsath, 30),
        ] {
            assert_eq!(std, days_in_month(month, common), "{month:?}");
        }
        assert_eq!(30, days_in_month(Chesth, be(2569)));
    }

    #[test]
    fn year_lengths() {
        for (y, std) in [(2567, 384), (2568, 354), (2569, 355), (2544, 355)] {
            assert_eq!(std, days_in_year(be(y)), "BE {y}");
        }
    }

    #[test]
    fn year_length_is_sum_of_months() {
        for y in [2566, 2567, 2568, 2569] {
            let year = be(y);
            let mut month = Mikasir;
            let mut total = 0;
            loop {
                total += days_in_month(month, year);
                month = next_month(month, year);
                if month == Mikasir {
                    break;
                }
            }
            assert_eq!(days_in_year(year), total, "BE {y}");
        }
    }

    #[test]
    fn successors() {
        assert_eq!(PathamAsath, next_month(Chesth, be(2567)));
        assert_eq!(Asath, next_month(Chesth, be(2568)));
        assert_eq!(TutiyAsath, next_month(PathamAsath, be(2567)));
        assert_eq!(Srap, next_month(TutiyAsath, be(2567)));
        assert_eq!(Mikasir, next_month(Kattik, be(2568)));
    }

    #[test]
    fn cycle_through_year() {
        for (y, std) in [(2567, 13), (2568, 12)] {
            let year = be(y);
            let mut seen = vec![Mikasir];
            let mut month = next_month(Mikasir, year);
            while month != Mikasir {
                seen.push(month);
                month = next_month(month, year);
            }
            assert_eq!(std, seen.len(), "BE {y}");
            assert_eq!(std == 13, seen.contains(&PathamAsath));
            assert_eq!(std == 13, seen.contains(&TutiyAsath));
            assert_eq!(std == 12, seen.contains(&Asath));
        }
    }

    #[test]
    fn index_round_trip() {
        for (i, month) in LunarMonth::ALL.into_iter().enumerate() {
            assert_eq!(i as u8, month.index());
            assert_eq!(Ok(month), LunarMonth::try_from(i as u8));
        }
        assert_eq!(Err(Error::InvalidMonthIndex { index: -1 }), LunarMonth::from_index(-1));
    }

    #[test]
    fn raw_forms_validate() {
        assert_eq!(Ok(384), days_in_khmer_year(2567));
        assert!(days_in_khmer_year(-1).is_err());
        assert_eq!(Ok(PathamAsath), next_month_of(6, 2567));
        assert!(next_month_of(14, 2567).is_err());
        assert!(next_month_of(6, -1).is_err());
        assert!(days_in_khmer_month(0, -1).is_err());
    }
}
