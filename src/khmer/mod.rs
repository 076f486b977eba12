//! Khmer lunisolar calendar (Chhankitek).
//!
//! Lunar dates are found by walking from a fixed epoch, 1900-01-01, which
//! is the first day of Boss. The walk moves in whole Khmer years, then in
//! whole months, using the leap rules in [`leap`] to size each step. Which
//! BE year's rules apply to a step is decided by [`maybe_be_year`], a
//! Gregorian approximation of the BE year; the reported BE year of a date
//! comes from [`year::be_year`] instead.
//!
//! # Example
//!
//! ```
//! use chhankitek::Moment;
//! use chhankitek::khmer::{self, LunarMonth, MoonPhase};
//!
//! let date = khmer::find_lunar_date(Moment::from_ymd(2024, 5, 22).unwrap());
//!
//! assert_eq!(LunarMonth::Pisak, date.month);
//! assert_eq!((15, MoonPhase::Waxing), (date.day.count(), date.day.phase()));
//! ```

use crate::date::Date;
use crate::error::{Error, Result};
use crate::moment::Moment;

pub mod aharkun;
pub mod fmt;
pub mod leap;
pub mod month;
pub mod new_year;
pub mod year;

pub use aharkun::BeYear;
pub use leap::{LeapType, is_khmer_leap_day, is_khmer_leap_month};
pub use month::{LunarMonth, days_in_khmer_month, days_in_khmer_year, next_month_of};
pub use new_year::{JsYear, NewYearCache, NewYearCalculator, SoriyatraLerngSak};
pub use year::{AnimalYear, EraYear, YearLabels, be_year, visakha_bochea};

/// JDN of 1900-01-01, the first day of Boss.
const EPOCH_JDN: u32 = 2415021;
const EPOCH_MONTH: LunarMonth = LunarMonth::Boss;

/// Most month steps a single lookup takes after the year walk.
pub const MAX_MONTH_STEPS: u32 = 13;

/// Waxing (កើត) or waning (រោច) half of a lunar month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoonPhase {
    Waxing,
    Waning,
}

/// Day within a lunar month, `0..=29`.
///
/// Days are counted 1 to 15 in each half of the month, so day 14 is the 15th
/// waxing day and day 15 the 1st waning day.
///
/// ```
/// use chhankitek::khmer::{LunarDay, MoonPhase::*};
///
/// for (day, std) in [(0, (1, Waxing)), (14, (15, Waxing)), (15, (1, Waning)), (29, (15, Waning))] {
///     let day = LunarDay::new(day).unwrap();
///     assert_eq!(std, (day.count(), day.phase()));
/// }
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LunarDay(u8);

impl LunarDay {
    pub fn new(day: i64) -> Result<Self> {
        u8::try_from(day)
            .ok()
            .filter(|d| *d <= 29)
            .map(Self)
            .ok_or(Error::InvalidLunarDay { day })
    }

    /// Builds a day from its 1-based count and phase.
    pub fn from_count(count: u8, phase: MoonPhase) -> Result<Self> {
        if !(1..=15).contains(&count) {
            return Err(Error::InvalidLunarDay { day: count as i64 });
        }
        let offset = match phase {
            MoonPhase::Waxing => 0,
            MoonPhase::Waning => 15,
        };
        Ok(Self(count - 1 + offset))
    }

    /// 0-based day.
    pub fn get(self) -> u8 {
        self.0
    }

    /// 1-based day within the half month, `1..=15`.
    pub fn count(self) -> u8 {
        self.0 % 15 + 1
    }

    pub fn phase(self) -> MoonPhase {
        if self.0 > 14 {
            MoonPhase::Waning
        } else {
            MoonPhase::Waxing
        }
    }
}

/// Lunar day and month of a civil date.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    pub day: LunarDay,
    pub month: LunarMonth,
    /// Midnight of the first day of `month`.
    pub month_start: Moment,
}

impl LunarDate {
    /// Midnight of the civil date this lunar date was found for.
    pub fn date(&self) -> Moment {
        self.month_start.add_days(self.day.get() as i64)
    }
}

/// Steps taken by [`find_lunar_date_with_stats`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct WalkStats {
    pub year_steps: u32,
    pub month_steps: u32,
}

impl WalkStats {
    /// Most year steps needed to reach a date in Gregorian `year`.
    pub fn max_year_steps(year: i32) -> u32 {
        (year - 1900).unsigned_abs() + 2
    }
}

/// Approximate BE year of a civil date: Gregorian year + 543 up to April,
/// + 544 afterwards. Selects which year's leap rules size an epoch step.
///
/// ```
/// use chhankitek::Moment;
/// use chhankitek::khmer::maybe_be_year;
///
/// assert_eq!(2567, maybe_be_year(Moment::from_ymd(2024, 4, 30).unwrap()));
/// assert_eq!(2568, maybe_be_year(Moment::from_ymd(2024, 5, 1).unwrap()));
/// ```
pub fn maybe_be_year(moment: Moment) -> i64 {
    let (year, month, _) = moment.gregorian();
    year as i64 + if month <= 4 { 543 } else { 544 }
}

fn maybe_be(moment: Moment) -> BeYear {
    BeYear::clamped(maybe_be_year(moment))
}

/// Finds the lunar day and month of `target`.
///
/// Only the date of `target` matters; lunar days change at midnight.
pub fn find_lunar_date(target: Moment) -> LunarDate {
    find_lunar_date_with_stats(target).0
}

/// [`find_lunar_date`], also reporting how many steps the walk took.
pub fn find_lunar_date_with_stats(target: Moment) -> (LunarDate, WalkStats) {
    use month::{days_in_month, days_in_year, next_month};

    let target = Moment::at_midnight(target.date());
    let mut epoch = Moment::at_midnight(Date::from_jdn(EPOCH_JDN));
    let mut month = EPOCH_MONTH;
    let mut stats = WalkStats::default();

    if target > epoch {
        loop {
            let year_len = days_in_year(maybe_be(epoch.add_one_year())) as i64;
            if target.days_since(epoch) <= year_len {
                break;
            }
            epoch = epoch.add_days(year_len);
            stats.year_steps += 1;
        }
    } else {
        loop {
            epoch = epoch.add_days(-(days_in_year(maybe_be(epoch)) as i64));
            stats.year_steps += 1;
            if epoch.days_since(target) <= 0 {
                break;
            }
        }
    }

    loop {
        let month_len = days_in_month(month, maybe_be(epoch)) as i64;
        if target.days_since(epoch) <= month_len {
            break;
        }
        epoch = epoch.add_days(month_len);
        month = next_month(month, maybe_be(epoch));
        stats.month_steps += 1;
    }

    let mut day = target.days_since(epoch);
    let month_len = days_in_month(month, maybe_be(target)) as i64;
    if day >= month_len {
        // the last day counted into the next month
        day %= month_len;
        month = next_month(month, maybe_be(epoch));
        epoch = epoch.add_days(month_len);
    }

    tracing::trace!(
        target = %target,
        year_steps = stats.year_steps,
        month_steps = stats.month_steps,
        "walked to lunar date"
    );
    let lunar = LunarDate {
        day: LunarDay(day as u8),
        month,
        month_start: epoch,
    };
    (lunar, stats)
}

#[cfg(test)]
mod tests {
    use super::LunarMonth::*;
    use super::*;

    fn lunar(y: i32, m: i32, d: i32) -> (u8, LunarMonth) {
        let date = find_lunar_date(Moment::from_ymd(y, m, d).unwrap());
        (date.day.get(), date.month)
    }

    #[test]
    fn epoch() {
        assert_eq!((0, Boss), lunar(1900, 1, 1));
        assert_eq!((28, Mikasir), lunar(1899, 12, 31));
    }

    #[test]
    fn dates() {
        let dataset = [
            ((1996, 9, 24), (11, Phatrobot)),
            ((2024, 4, 12), (3, Chaet)),
            ((2024, 4, 13), (4, Chaet)),
            ((2024, 4, 17), (8, Chaet)),
            ((2024, 5, 22), (14, Pisak)),
            ((2023, 5, 4), (14, Pisak)),
            ((2022, 5, 15), (14, Pisak)),
        ];
        for ((y, m, d), std) in dataset {
            assert_eq!(std, lunar(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn month_starts_in_leap_month_year() {
        let stds = [
            ((2023, 1, 22), Meak),
            ((2023, 2, 20), Phalkun),
            ((2023, 3, 22), Chaet),
            ((2023, 4, 20), Pisak),
            ((2023, 5, 20), Chesth),
            ((2023, 6, 18), PathamAsath),
            ((2023, 7, 18), TutiyAsath),
            ((2023, 8, 17), Srap),
            ((2023, 9, 15), Phatrobot),
            ((2023, 10, 15), Assuj),
            ((2023, 11, 13), Kattik),
            ((2023, 12, 13), Mikasir),
        ];
        for ((y, m, d), month) in stds {
            assert_eq!((0, month), lunar(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn pchum_ben() {
        // 15th waning day of Phatrobot
        for (y, m, d) in [(2022, 9, 25), (2023, 10, 14), (2024, 10, 2)] {
            assert_eq!((29, Phatrobot), lunar(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn time_of_day_is_ignored() {
        for (y, m, d) in [(1899, 12, 31), (1850, 3, 3), (2024, 4, 17)] {
            let midnight = find_lunar_date(Moment::from_ymd(y, m, d).unwrap());
            let late = find_lunar_date(Moment::new(y, m, d, 23, 59, 59).unwrap());
            assert_eq!(midnight, late);
        }
    }

    #[test]
    fn reconstructs_date() {
        let target = Moment::new(1996, 9, 24, 8, 30, 0).unwrap();
        let lunar = find_lunar_date(target);
        assert_eq!(Moment::from_ymd(1996, 9, 24).unwrap(), lunar.date());
        assert_eq!(Moment::from_ymd(1996, 9, 13).unwrap(), lunar.month_start);
    }

    #[test]
    fn walk_is_bounded() {
        for (y, m, d) in [(1, 1, 1), (1899, 12, 31), (1900, 1, 1), (2024, 12, 31), (3000, 6, 15)] {
            let (_, stats) = find_lunar_date_with_stats(Moment::from_ymd(y, m, d).unwrap());
            assert!(stats.year_steps <= WalkStats::max_year_steps(y), "{y}: {stats:?}");
            assert!(stats.month_steps <= MAX_MONTH_STEPS, "{y}: {stats:?}");
        }
    }

    #[test]
    fn lunar_day_bounds() {
        assert!(LunarDay::new(30).is_err());
        assert!(LunarDay::new(-1).is_err());
        assert_eq!(Ok(LunarDay(29)), LunarDay::from_count(15, MoonPhase::Waning));
        assert!(LunarDay::from_count(0, MoonPhase::Waxing).is_err());
        assert!(LunarDay::from_count(16, MoonPhase::Waxing).is_err());
    }
}
