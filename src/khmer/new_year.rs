//! Khmer New Year (Soriyatra Lerng Sak).
//!
//! The New Year moment is derived from the Jolak-Sakaraj (JS) year with its
//! own Harkun cycle, which mirrors the BE-year Aharkun arithmetic with
//! different constants. The position of the sun is not computed from
//! tables; a fixed arithmetic approximation picks the time of day (see
//! [`Sotin`]). Years with published corrections are answered from an
//! override table instead.

use std::collections::{BTreeMap, HashMap};
use std::sync::{LazyLock, PoisonError, RwLock};

use super::month::LunarMonth;
use super::{LunarDay, find_lunar_date};
use crate::error::{Error, Result};
use crate::moment::Moment;

/// Offset from Gregorian year to JS year after New Year.
const JS_OFFSET: i32 = 544 - 1182;

/// Earliest Gregorian year the computation supports: the one starting JS
/// year 0.
pub const MIN_COMPUTED_YEAR: i32 = -JS_OFFSET;

/// Published New Year moments that differ from the computed ones.
pub const BUILTIN_OVERRIDES: &[(i32, &str)] = &[
    (1879, "12-04-1879 11:36"),
    (1897, "13-04-1897 02:00"),
    (2011, "14-04-2011 13:12"),
    (2012, "14-04-2012 19:11"),
    (2013, "14-04-2013 02:12"),
    (2014, "14-04-2014 08:07"),
    (2015, "14-04-2015 14:02"),
];

static BUILTIN: LazyLock<BTreeMap<i32, Moment>> = LazyLock::new(|| {
    BUILTIN_OVERRIDES
        .iter()
        .map(|&(year, s)| {
            let moment = Moment::parse_dmy_hm(s)
                .unwrap_or_else(|e| panic!("error parsing New Year override {year}: {e}"));
            (year, moment)
        })
        .collect()
});

/// Parsed [`BUILTIN_OVERRIDES`].
pub fn builtin_overrides() -> BTreeMap<i32, Moment> {
    BUILTIN.clone()
}

/// A Jolak-Sakaraj year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct JsYear(i64);

impl JsYear {
    pub const MAX: i64 = 1_000_000_000_000;

    pub fn new(year: i64) -> Result<Self> {
        if year < 0 {
            return Err(Error::NegativeYear { year });
        }
        if year > Self::MAX {
            return Err(Error::YearOutOfRange {
                year,
                min: 0,
                max: Self::MAX,
            });
        }
        Ok(Self(year))
    }

    /// JS year whose New Year falls in Gregorian `year`.
    ///
    /// ```
    /// use chhankitek::khmer::JsYear;
    ///
    /// assert_eq!(1386, JsYear::from_gregorian(2024).unwrap().get());
    /// ```
    pub fn from_gregorian(year: i32) -> Result<Self> {
        Self::new(year as i64 + JS_OFFSET as i64)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn prev(self) -> Option<Self> {
        (self.0 > 0).then(|| Self(self.0 - 1))
    }

    fn scaled(self) -> i64 {
        292207 * self.0 + 373
    }

    pub fn harkun(self) -> i64 {
        self.scaled() / 800 + 1
    }

    pub fn kromathopol(self) -> i64 {
        800 - self.scaled() % 800
    }

    pub fn avaman(self) -> i64 {
        (11 * self.harkun() + 650) % 692
    }

    pub fn bodithey(self) -> i64 {
        let harkun = self.harkun();
        (harkun + (11 * harkun + 650) / 692) % 30
    }

    pub fn has_366_days(self) -> bool {
        self.kromathopol() <= 207
    }

    /// Leap month (Athikameas).
    pub fn is_athikameas(self) -> bool {
        match (self.bodithey(), self.next().bodithey()) {
            (25, 5) => false,
            (24, 6) => true,
            (bodithey, _) => bodithey >= 25 || bodithey <= 5,
        }
    }

    /// Leap day (Chantreathimeas), before resolving against a leap month.
    pub fn is_chantreathimeas(self) -> bool {
        let avaman = self.avaman();
        if self.has_366_days() {
            avaman <= 126
        } else {
            avaman <= 137 && self.next().avaman() != 0
        }
    }

    /// Both a leap month and a leap day.
    pub fn is_double_leap(self) -> bool {
        self.is_athikameas() && self.is_chantreathimeas()
    }

    /// Whether Chesth actually gets its 30th day: a double-leap year keeps
    /// only the leap month, and its leap day moves to the following year.
    pub fn jesth_has_30(self) -> bool {
        if self.is_double_leap() {
            return false;
        }
        self.is_chantreathimeas() || self.prev().is_some_and(JsYear::is_double_leap)
    }
}

/// A day offset from the start of the solar year, candidate for the first
/// New Year day.
///
/// `angsar` and `avaman` stand in for the sun's position. They come from a
/// fixed formula, `angsar = sotin mod 2` and `avaman = 17 * sotin mod 692`,
/// not from solar tables, so computed moments can drift from published ones
/// for years outside the override table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sotin {
    pub sotin: i64,
    pub angsar: i64,
    pub avaman: i64,
}

impl Sotin {
    pub fn new(sotin: i64) -> Self {
        Self {
            sotin,
            angsar: sotin % 2,
            avaman: sotin * 17 % 692,
        }
    }
}

/// The lunar date the New Year is aligned against.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LerngSak {
    pub day: LunarDay,
    pub month: LunarMonth,
}

/// Everything computed for one JS year on the way to its New Year moment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SoriyatraLerngSak {
    pub js_year: JsYear,
    pub harkun: i64,
    pub kromathopol: i64,
    pub avaman: i64,
    /// Bodithey after carrying a day from a preceding double-leap year.
    pub bodithey: i64,
    pub has_366_days: bool,
    pub is_athikameas: bool,
    pub is_chantreathimeas: bool,
    pub jesth_has_30: bool,
    pub lerng_sak: LerngSak,
    pub sotins: [Sotin; 4],
    /// 3 or 4.
    pub new_year_days: u32,
    /// `(hour, minute)` counted from midnight of 17 April. The hour runs
    /// up to 29 and then falls on 18 April.
    pub time_of_new_year: (u32, u32),
}

impl SoriyatraLerngSak {
    /// Details for the JS year starting in Gregorian `year`.
    ///
    /// ```
    /// use chhankitek::khmer::SoriyatraLerngSak;
    ///
    /// let info = SoriyatraLerngSak::from_gregorian(2024).unwrap();
    /// assert_eq!(1386, info.js_year.get());
    /// ```
    pub fn from_gregorian(year: i32) -> Result<Self> {
        JsYear::from_gregorian(year).map(Self::new)
    }

    pub fn new(js_year: JsYear) -> Self {
        let mut bodithey = js_year.bodithey();
        if js_year.prev().is_some_and(JsYear::is_double_leap) {
            bodithey = (bodithey + 1) % 30;
        }
        let lerng_sak = if bodithey >= 6 {
            LerngSak {
                day: LunarDay(bodithey as u8 - 1),
                month: LunarMonth::Chaet,
            }
        } else {
            LerngSak {
                day: LunarDay(bodithey as u8),
                month: LunarMonth::Pisak,
            }
        };

        let has_366_days = js_year.has_366_days();
        let first = if has_366_days { 363 } else { 362 };
        let sotins = [0, 1, 2, 3].map(|i| Sotin::new(first + i));
        let new_year_days = if sotins[0].angsar == 0 { 4 } else { 3 };
        let avaman = sotins[0].avaman;
        let time_of_new_year = ((6 + avaman % 24) as u32, (avaman % 60) as u32);

        Self {
            js_year,
            harkun: js_year.harkun(),
            kromathopol: js_year.kromathopol(),
            avaman: js_year.avaman(),
            bodithey,
            has_366_days,
            is_athikameas: js_year.is_athikameas(),
            is_chantreathimeas: js_year.is_chantreathimeas(),
            jesth_has_30: js_year.jesth_has_30(),
            lerng_sak,
            sotins,
            new_year_days,
            time_of_new_year,
        }
    }
}

fn elapsed_lunar_days(month: LunarMonth, day: LunarDay) -> i64 {
    (month.index() as i64 - 4) * 29 + day.get() as i64
}

/// Computes the New Year moment of Gregorian `year`, ignoring overrides.
///
/// ```
/// use chhankitek::khmer::new_year::compute_new_year;
///
/// assert_eq!("2024-04-13 00:18:00", compute_new_year(2024).unwrap().to_string());
/// ```
pub fn compute_new_year(year: i32) -> Result<Moment> {
    if !(MIN_COMPUTED_YEAR..=Moment::MAX_YEAR).contains(&year) {
        return Err(Error::YearOutOfRange {
            year: year as i64,
            min: MIN_COMPUTED_YEAR as i64,
            max: Moment::MAX_YEAR as i64,
        });
    }
    let info = SoriyatraLerngSak::from_gregorian(year)?;
    let (hour, minute) = info.time_of_new_year;
    let anchor = Moment::from_ymd(year, 4, 17)?.add_seconds(hour as i64 * 3600 + minute as i64 * 60);
    let at_anchor = find_lunar_date(anchor);
    let diff = elapsed_lunar_days(at_anchor.month, at_anchor.day)
        - elapsed_lunar_days(info.lerng_sak.month, info.lerng_sak.day);
    let moment = anchor.add_days(-(diff + info.new_year_days as i64 - 1));
    tracing::debug!(year, js_year = info.js_year.get(), %moment, "computed New Year moment");
    Ok(moment)
}

/// Memo of computed New Year moments, keyed by Gregorian year.
///
/// Entries live as long as the cache and are never replaced. Two threads
/// missing the same year may both compute it; the first insert is kept and
/// both values are equal anyway.
#[derive(Debug, Default)]
pub struct NewYearCache {
    moments: RwLock<HashMap<i32, Moment>>,
}

impl NewYearCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, year: i32) -> Option<Moment> {
        let moments = self.moments.read().unwrap_or_else(PoisonError::into_inner);
        moments.get(&year).copied()
    }

    /// Stores `moment` unless `year` is present, returning the stored value.
    pub fn insert(&self, year: i32, moment: Moment) -> Moment {
        let mut moments = self.moments.write().unwrap_or_else(PoisonError::into_inner);
        *moments.entry(year).or_insert(moment)
    }

    pub fn len(&self) -> usize {
        self.moments.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Answers New Year moments from overrides, then from its cache, then by
/// computing them.
///
/// ```
/// use chhankitek::khmer::NewYearCalculator;
///
/// let calendar = NewYearCalculator::new();
/// assert_eq!("2015-04-14 14:02:00", calendar.moment_for(2015).unwrap().to_string());
/// ```
#[derive(Debug)]
pub struct NewYearCalculator {
    overrides: BTreeMap<i32, Moment>,
    cache: Option<NewYearCache>,
}

impl Default for NewYearCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl NewYearCalculator {
    /// Built-in overrides and an empty cache.
    pub fn new() -> Self {
        Self::with_overrides(builtin_overrides(), true)
    }

    pub fn with_overrides(overrides: BTreeMap<i32, Moment>, cache: bool) -> Self {
        Self {
            overrides,
            cache: cache.then(NewYearCache::new),
        }
    }

    pub fn overrides(&self) -> &BTreeMap<i32, Moment> {
        &self.overrides
    }

    /// The cache, `None` when caching is disabled.
    pub fn cache(&self) -> Option<&NewYearCache> {
        self.cache.as_ref()
    }

    /// New Year moment of Gregorian `year`.
    pub fn moment_for(&self, year: i32) -> Result<Moment> {
        if let Some(&moment) = self.overrides.get(&year) {
            tracing::trace!(year, %moment, "New Year from override table");
            return Ok(moment);
        }
        let Some(cache) = &self.cache else {
            return compute_new_year(year);
        };
        if let Some(moment) = cache.get(year) {
            tracing::trace!(year, %moment, "New Year from cache");
            return Ok(moment);
        }
        let moment = compute_new_year(year)?;
        Ok(cache.insert(year, moment))
    }
}
