//! Year numbering: Buddhist Era, animal years, era years and Jolak Sakaraj.
//!
//! The BE year turns over at Visakha Bochea, the 15th waxing day of Pisak.
//! Animal, era and JS years turn over at the New Year moment instead.

use super::new_year::NewYearCalculator;
use super::{LunarMonth, find_lunar_date};
use crate::error::{Error, Result};
use crate::moment::Moment;

/// Lunar day index of Visakha Bochea (15th waxing day).
const VISAKHA_BOCHEA_DAY: u8 = 14;
/// Days scanned from January 1 when looking for Visakha Bochea.
pub const VISAKHA_SCAN_DAYS: i64 = 365;

/// Midnight of Visakha Bochea in Gregorian `year`.
///
/// # Example
///
/// ```
/// use chhankitek::khmer::visakha_bochea;
///
/// assert_eq!("2024-05-22", visakha_bochea(2024).unwrap().date().iso_gregorian());
/// ```
pub fn visakha_bochea(year: i32) -> Result<Moment> {
    let start = Moment::from_ymd(year, 1, 1)?;
    (0..VISAKHA_SCAN_DAYS)
        .map(|i| start.add_days(i))
        .find(|&day| {
            let lunar = find_lunar_date(day);
            lunar.month == LunarMonth::Pisak && lunar.day.get() == VISAKHA_BOCHEA_DAY
        })
        .ok_or(Error::VisakhaBocheaNotFound { year })
}

/// Buddhist-Era year of `moment`: Gregorian + 544 from Visakha Bochea on,
/// + 543 before it.
///
/// ```
/// use chhankitek::Moment;
/// use chhankitek::khmer::be_year;
///
/// assert_eq!(Ok(2567), be_year(Moment::new(2024, 5, 21, 23, 59, 0).unwrap()));
/// assert_eq!(Ok(2568), be_year(Moment::from_ymd(2024, 5, 22).unwrap()));
/// ```
pub fn be_year(moment: Moment) -> Result<i64> {
    let year = moment.year();
    let offset = if moment >= visakha_bochea(year)? { 544 } else { 543 };
    Ok(year as i64 + offset)
}

/// Twelve-year animal cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AnimalYear {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl AnimalYear {
    pub const ALL: [AnimalYear; 12] = [
        AnimalYear::Rat,
        AnimalYear::Ox,
        AnimalYear::Tiger,
        AnimalYear::Rabbit,
        AnimalYear::Dragon,
        AnimalYear::Snake,
        AnimalYear::Horse,
        AnimalYear::Goat,
        AnimalYear::Monkey,
        AnimalYear::Rooster,
        AnimalYear::Dog,
        AnimalYear::Pig,
    ];

    /// Animal of a BE year counted from New Year.
    pub fn from_be_year(be_year: i64) -> Self {
        Self::ALL[(be_year + 4).rem_euclid(12) as usize]
    }

    /// Index in `0..12`, Rat first.
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Ten-year era cycle, named after the last digit of the JS year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EraYear {
    Samreithisak,
    Ekasak,
    Tosak,
    Treisak,
    Chattvasak,
    Panchasak,
    Chhasak,
    Sappasak,
    Atthasak,
    Noppasak,
}

impl EraYear {
    /// In order of the JS year's last digit.
    pub const ALL: [EraYear; 10] = [
        EraYear::Samreithisak,
        EraYear::Ekasak,
        EraYear::Tosak,
        EraYear::Treisak,
        EraYear::Chattvasak,
        EraYear::Panchasak,
        EraYear::Chhasak,
        EraYear::Sappasak,
        EraYear::Atthasak,
        EraYear::Noppasak,
    ];

    /// Era of a BE year counted from New Year.
    pub fn from_be_year(be_year: i64) -> Self {
        Self::from_index((be_year - 1).rem_euclid(10) as u8)
    }

    /// Era from its cycle index, `(BE - 1) mod 10`.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index as usize + 9) % 10]
    }

    /// Cycle index `(BE - 1) mod 10`, one ahead of the JS year's last digit.
    pub fn index(self) -> u8 {
        (self as u8 + 1) % 10
    }
}

/// Every year label of one instant.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct YearLabels {
    /// Turns over at Visakha Bochea.
    pub be_year: i64,
    pub animal: AnimalYear,
    pub era: EraYear,
    pub jolak_sakaraj: i64,
}

impl NewYearCalculator {
    /// BE year counted from New Year rather than from Visakha Bochea.
    fn be_year_since_new_year(&self, moment: Moment) -> Result<i64> {
        let year = moment.year();
        let offset = if moment < self.moment_for(year)? { 543 } else { 544 };
        Ok(year as i64 + offset)
    }

    /// ```
    /// use chhankitek::Moment;
    /// use chhankitek::khmer::{AnimalYear, NewYearCalculator};
    ///
    /// let calendar = NewYearCalculator::new();
    /// let m = Moment::from_ymd(2024, 4, 12).unwrap();
    /// assert_eq!(Ok(AnimalYear::Rabbit), calendar.animal_year(m));
    /// ```
    pub fn animal_year(&self, moment: Moment) -> Result<AnimalYear> {
        self.be_year_since_new_year(moment).map(AnimalYear::from_be_year)
    }

    pub fn era_year(&self, moment: Moment) -> Result<EraYear> {
        self.be_year_since_new_year(moment).map(EraYear::from_be_year)
    }

    pub fn jolak_sakaraj_year(&self, moment: Moment) -> Result<i64> {
        self.be_year_since_new_year(moment).map(|be| be - 1182)
    }

    pub fn labels(&self, moment: Moment) -> Result<YearLabels> {
        let be_new_year = self.be_year_since_new_year(moment)?;
        Ok(YearLabels {
            be_year: be_year(moment)?,
            animal: AnimalYear::from_be_year(be_new_year),
            era: EraYear::from_be_year(be_new_year),
            jolak_sakaraj: be_new_year - 1182,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visakha_bochea_dates() {
        for (year, std) in [(2022, "2022-05-15"), (2023, "2023-05-04"), (2024, "2024-05-22"), (1996, "1996-05-02")] {
            assert_eq!(std, visakha_bochea(year).unwrap().date().iso_gregorian(), "{year}");
        }
    }

    #[test]
    fn visakha_bochea_rejects_invalid_years() {
        assert!(visakha_bochea(0).is_err());
        assert!(visakha_bochea(10_000).is_err());
    }

    #[test]
    fn be_year_boundary() {
        for ((y, m, d), std) in [
            ((2024, 1, 1), 2567),
            ((2024, 5, 21), 2567),
            ((2024, 5, 22), 2568),
            ((2024, 12, 31), 2568),
            ((1996, 9, 24), 2540),
        ] {
            assert_eq!(Ok(std), be_year(Moment::from_ymd(y, m, d).unwrap()), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn animal_cycle() {
        use AnimalYear::*;
        for (be, std) in [(2540, Rat), (2567, Rabbit), (2568, Dragon), (2575, Pig)] {
            assert_eq!(std, AnimalYear::from_be_year(be), "BE {be}");
        }
    }

    #[test]
    fn era_cycle() {
        use EraYear::*;
        // 1996 (JS 1358) and 2024 (JS 1386)
        assert_eq!(Atthasak, EraYear::from_be_year(2540));
        assert_eq!(Chhasak, EraYear::from_be_year(2568));
        for index in 0..10 {
            assert_eq!(index, EraYear::from_index(index).index());
        }
    }

    #[test]
    fn labels_turn_over_at_new_year() {
        let calendar = NewYearCalculator::new();
        // computed New Year 2024: 2024-04-13 00:18
        let before = Moment::new(2024, 4, 13, 0, 17, 59).unwrap();
        let at = Moment::new(2024, 4, 13, 0, 18, 0).unwrap();

        assert_eq!(Ok(AnimalYear::Rabbit), calendar.animal_year(before));
        assert_eq!(Ok(AnimalYear::Dragon), calendar.animal_year(at));
        assert_eq!(Ok(1385), calendar.jolak_sakaraj_year(before));
        assert_eq!(Ok(1386), calendar.jolak_sakaraj_year(at));
        assert_eq!(Ok(EraYear::Panchasak), calendar.era_year(before));
        assert_eq!(Ok(EraYear::Chhasak), calendar.era_year(at));
    }

    #[test]
    fn labels_for_override_year() {
        let calendar = NewYearCalculator::new();
        let before = Moment::new(2015, 4, 14, 14, 1, 0).unwrap();
        let after = Moment::new(2015, 4, 14, 14, 2, 0).unwrap();
        assert_eq!(Ok(1376), calendar.jolak_sakaraj_year(before));
        assert_eq!(Ok(1377), calendar.jolak_sakaraj_year(after));
    }

    #[test]
    fn all_labels() {
        let calendar = NewYearCalculator::new();
        let labels = calendar.labels(Moment::from_ymd(1996, 9, 24).unwrap()).unwrap();
        assert_eq!(
            YearLabels {
                be_year: 2540,
                animal: AnimalYear::Rat,
                era: EraYear::Atthasak,
                jolak_sakaraj: 1358,
            },
            labels
        );
    }
}
