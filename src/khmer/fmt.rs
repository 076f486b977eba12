//! Khmer names and text rendering of calendar values.

use super::year::{AnimalYear, EraYear};
use super::{LunarDay, LunarMonth, MoonPhase, NewYearCalculator, be_year, find_lunar_date};
use crate::date::Date;
use crate::error::{Error, Result};
use crate::moment::Moment;

/// Khmer digits, `០` to `៩`.
pub const KHMER_DIGITS: [char; 10] = ['០', '១', '២', '៣', '៤', '៥', '៦', '៧', '៨', '៩'];

const MONTH_NAMES: [&str; 14] = [
    "មិគសិរ",
    "បុស្ស",
    "មាឃ",
    "ផល្គុន",
    "ចេត្រ",
    "ពិសាខ",
    "ជេស្ឋ",
    "អាសាឍ",
    "ស្រាពណ៍",
    "ភទ្របទ",
    "អស្សុជ",
    "កត្ដិក",
    "បឋមាសាឍ",
    "ទុតិយាសាឍ",
];

/// Khmer name of a lunar month.
///
/// # Example
///
/// ```
/// use chhankitek::khmer::{fmt, LunarMonth};
///
/// assert_eq!("ពិសាខ", fmt::month_name(LunarMonth::Pisak));
/// ```
pub fn month_name(month: LunarMonth) -> &'static str {
    MONTH_NAMES[month.index() as usize]
}

/// Lunar month from its Khmer name.
///
/// ```
/// use chhankitek::khmer::{fmt, LunarMonth};
///
/// assert_eq!(Ok(LunarMonth::Assuj), fmt::month_from_name("អស្សុជ"));
/// assert!(fmt::month_from_name("Assuj").is_err());
/// ```
pub fn month_from_name(name: &str) -> Result<LunarMonth> {
    let name = name.trim();
    LunarMonth::ALL
        .into_iter()
        .find(|m| month_name(*m) == name)
        .ok_or_else(|| Error::UnknownMonthName {
            name: name.to_owned(),
        })
}

/// Khmer weekday name of a date.
pub fn weekday_name(date: Date) -> &'static str {
    const NAMES: [&str; 7] = ["អាទិត្យ", "ច័ន្ទ", "អង្គារ", "ពុធ", "ព្រហស្បតិ៍", "សុក្រ", "សៅរ៍"];
    NAMES[(date.day_of_week() % 7) as usize]
}

pub fn weekday_short_name(date: Date) -> &'static str {
    const NAMES: [&str; 7] = ["អា", "ច", "អ", "ព", "ព្រ", "សុ", "ស"];
    NAMES[(date.day_of_week() % 7) as usize]
}

/// Khmer name of a Gregorian month, `1..=12`.
pub fn solar_month_name(month: i32) -> &'static str {
    const NAMES: [&str; 12] = [
        "មករា", "កុម្ភៈ", "មីនា", "មេសា", "ឧសភា", "មិថុនា", "កក្កដា", "សីហា", "កញ្ញា", "តុលា",
        "វិច្ឆិកា", "ធ្នូ",
    ];
    NAMES[(month - 1).rem_euclid(12) as usize]
}

pub fn animal_year_name(animal: AnimalYear) -> &'static str {
    const NAMES: [&str; 12] = [
        "ជូត", "ឆ្លូវ", "ខាល", "ថោះ", "រោង", "ម្សាញ់", "មមី", "មមែ", "វក", "រកា", "ច", "កុរ",
    ];
    NAMES[animal.index() as usize]
}

pub fn era_year_name(era: EraYear) -> &'static str {
    use EraYear::*;
    match era {
        Samreithisak => "សំរឹទ្ធិស័ក",
        Ekasak => "ឯកស័ក",
        Tosak => "ទោស័ក",
        Treisak => "ត្រីស័ក",
        Chattvasak => "ចត្វាស័ក",
        Panchasak => "បញ្ចស័ក",
        Chhasak => "ឆស័ក",
        Sappasak => "សប្តស័ក",
        Atthasak => "អដ្ឋស័ក",
        Noppasak => "នព្វស័ក",
    }
}

pub fn moon_phase_name(phase: MoonPhase) -> &'static str {
    match phase {
        MoonPhase::Waxing => "កើត",
        MoonPhase::Waning => "រោច",
    }
}

pub fn moon_phase_short_name(phase: MoonPhase) -> &'static str {
    match phase {
        MoonPhase::Waxing => "ក",
        MoonPhase::Waning => "រ",
    }
}

/// Khmer lunar-date symbol of a day (U+19E1..U+19EF waxing, U+19F1..U+19FF
/// waning).
///
/// ```
/// use chhankitek::khmer::{fmt, LunarDay};
///
/// assert_eq!('\u{19E1}', fmt::moon_day_symbol(LunarDay::new(0).unwrap()));
/// assert_eq!('\u{19FF}', fmt::moon_day_symbol(LunarDay::new(29).unwrap()));
/// ```
pub fn moon_day_symbol(day: LunarDay) -> char {
    let base = match day.phase() {
        MoonPhase::Waxing => 0x19E0,
        MoonPhase::Waning => 0x19F0,
    };
    char::from_u32(base + day.count() as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Replaces ASCII digits with Khmer digits.
///
/// ```
/// use chhankitek::khmer::fmt;
///
/// assert_eq!("ព.ស. ២៥៦៨", fmt::to_khmer_digits("ព.ស. 2568"));
/// ```
pub fn to_khmer_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => KHMER_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Replaces Khmer digits with ASCII digits.
pub fn to_arabic_digits(s: &str) -> String {
    s.chars()
        .map(|c| match KHMER_DIGITS.iter().position(|&k| k == c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}

/// Pattern of [`format_default`].
pub const DEFAULT_PATTERN: &str = "ថ្ងៃW dN ខែm ឆ្នាំa e ពុទ្ធសករាជ b";

/// Renders `moment` following `pattern`.
///
/// | token | output |
/// |---|---|
/// | `W` / `w` | weekday, full / short |
/// | `d` / `D` | lunar day count, plain / two digits |
/// | `N` / `n` | moon phase, full / short |
/// | `o` | lunar-date symbol |
/// | `m` | lunar month |
/// | `M` | Gregorian month |
/// | `a` | animal year |
/// | `e` | era year |
/// | `b` | BE year |
/// | `c` | Gregorian year |
/// | `j` | JS year |
///
/// Other characters are copied as they are. Numbers use Khmer digits.
pub fn format(pattern: &str, moment: Moment, calendar: &NewYearCalculator) -> Result<String> {
    let lunar = find_lunar_date(moment);
    let needs_labels = pattern.contains(['a', 'e', 'j']);
    let labels = if needs_labels {
        Some(calendar.labels(moment)?)
    } else {
        None
    };
    let be = if pattern.contains('b') {
        Some(be_year(moment)?)
    } else {
        None
    };

    let mut out = String::new();
    for c in pattern.chars() {
        match (c, labels, be) {
            ('W', ..) => out += weekday_name(moment.date()),
            ('w', ..) => out += weekday_short_name(moment.date()),
            ('d', ..) => out += &to_khmer_digits(&lunar.day.count().to_string()),
            ('D', ..) => out += &to_khmer_digits(&format!("{:02}", lunar.day.count())),
            ('N', ..) => out += moon_phase_name(lunar.day.phase()),
            ('n', ..) => out += moon_phase_short_name(lunar.day.phase()),
            ('o', ..) => out.push(moon_day_symbol(lunar.day)),
            ('m', ..) => out += month_name(lunar.month),
            ('M', ..) => out += solar_month_name(moment.month()),
            ('c', ..) => out += &to_khmer_digits(&moment.year().to_string()),
            ('a', Some(labels), _) => out += animal_year_name(labels.animal),
            ('e', Some(labels), _) => out += era_year_name(labels.era),
            ('j', Some(labels), _) => out += &to_khmer_digits(&labels.jolak_sakaraj.to_string()),
            ('b', _, Some(be)) => out += &to_khmer_digits(&be.to_string()),
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Renders `moment` with [`DEFAULT_PATTERN`].
///
/// ```
/// use chhankitek::Moment;
/// use chhankitek::khmer::{fmt, NewYearCalculator};
///
/// let calendar = NewYearCalculator::new();
/// let text = fmt::format_default(Moment::from_ymd(1996, 9, 24).unwrap(), &calendar).unwrap();
/// assert_eq!("ថ្ងៃអង្គារ ១២កើត ខែភទ្របទ ឆ្នាំជូត អដ្ឋស័ក ពុទ្ធសករាជ ២៥៤០", text);
/// ```
pub fn format_default(moment: Moment, calendar: &NewYearCalculator) -> Result<String> {
    format(DEFAULT_PATTERN, moment, calendar)
}
