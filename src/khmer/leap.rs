//! Leap classification of Buddhist-Era years.
//!
//! Classification runs in two stages. The Bodithey-leap stage looks at the
//! year on its own and may find that it qualifies for both a leap month and
//! a leap day. A year cannot carry both, so the Protetin stage keeps the
//! leap month and pushes the leap day into the following year.

use super::aharkun::BeYear;
use crate::error::Result;

/// Leap status of a year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LeapType {
    /// 354 days.
    None,
    /// An extra Asath month: 384 days.
    LeapMonth,
    /// An extra day in Chesth: 355 days.
    LeapDay,
    /// Qualifies for both. Only produced by [`bodithey_leap`].
    LeapBoth,
}

/// First stage: leap status from Bodithey and Avoman alone.
pub fn bodithey_leap(year: BeYear) -> LeapType {
    let avoman = year.avoman();
    let bodithey = year.bodithey();

    let mut bodithey_leap = bodithey >= 25 || bodithey <= 5;
    let avoman_leap = if year.is_solar_leap() {
        avoman <= 126
    } else {
        // 137 followed by 0 stays a common year
        avoman <= 137 && year.next().avoman() != 0
    };

    // Of two consecutive years with bodithey 25 then 5, only the second
    // takes the leap month. Of 24 then 6, the first does.
    match (bodithey, year.next().bodithey()) {
        (25, 5) => bodithey_leap = false,
        (24, 6) => bodithey_leap = true,
        _ => {}
    }

    match (bodithey_leap, avoman_leap) {
        (true, true) => LeapType::LeapBoth,
        (true, false) => LeapType::LeapMonth,
        (false, true) => LeapType::LeapDay,
        (false, false) => LeapType::None,
    }
}

/// Second stage: the public leap status, never [`LeapType::LeapBoth`].
///
/// ```
/// use chhankitek::khmer::{BeYear, LeapType, leap};
///
/// let y = BeYear::new(2567).unwrap(); // 2023-2024
/// assert_eq!(LeapType::LeapMonth, leap::protetin_leap(y));
/// ```
pub fn protetin_leap(year: BeYear) -> LeapType {
    match bodithey_leap(year) {
        LeapType::LeapBoth => LeapType::LeapMonth,
        leap @ (LeapType::LeapMonth | LeapType::LeapDay) => leap,
        LeapType::None => match year.prev().map(bodithey_leap) {
            Some(LeapType::LeapBoth) => LeapType::LeapDay,
            _ => LeapType::None,
        },
    }
}

pub fn is_leap_month(year: BeYear) -> bool {
    protetin_leap(year) == LeapType::LeapMonth
}

pub fn is_leap_day(year: BeYear) -> bool {
    protetin_leap(year) == LeapType::LeapDay
}

/// Whether BE `year` has the extra Asath month.
pub fn is_khmer_leap_month(year: i64) -> Result<bool> {
    BeYear::new(year).map(is_leap_month)
}

/// Whether BE `year` has the extra day in Chesth.
pub fn is_khmer_leap_day(year: i64) -> Result<bool> {
    BeYear::new(year).map(is_leap_day)
}
