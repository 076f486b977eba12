mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use chhankitek::khmer::{self, BeYear, NewYearCalculator, SoriyatraLerngSak, fmt, leap, month};
use chhankitek::{CalendarConfig, Moment};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading calendar config");
            CalendarConfig::load(path)
                .with_context(|| format!("failed to load config file: {}", path.display()))?
        }
        None => CalendarConfig::default(),
    };
    let calendar = config.calculator().context("invalid calendar config")?;

    match cli.command {
        Command::Lunar { date } => lunar(&calendar, &date),
        Command::NewYear { year, details } => new_year(&calendar, year, details),
        Command::Visakha { year } => {
            let moment = khmer::visakha_bochea(year)
                .with_context(|| format!("failed to find Visakha Bochea of {year}"))?;
            println!("{}", moment.date().iso_gregorian());
            Ok(())
        }
        Command::Leap { be_year } => leap_year(be_year),
        Command::Format { date, pattern } => {
            let moment = parse_moment(&date)?;
            let text = match pattern {
                Some(pattern) => fmt::format(&pattern, moment, &calendar),
                None => fmt::format_default(moment, &calendar),
            }
            .context("failed to format date")?;
            println!("{text}");
            Ok(())
        }
    }
}

fn parse_moment(s: &str) -> Result<Moment> {
    s.parse().with_context(|| format!("invalid date: {s}"))
}

fn lunar(calendar: &NewYearCalculator, date: &str) -> Result<()> {
    let moment = parse_moment(date)?;
    let lunar = khmer::find_lunar_date(moment);
    let labels = calendar
        .labels(moment)
        .with_context(|| format!("failed to label year of {moment}"))?;

    println!("{}", fmt::format_default(moment, calendar)?);
    println!("lunar day:     {} ({:?})", lunar.day.count(), lunar.day.phase());
    println!("lunar month:   {:?} ({})", lunar.month, lunar.month.name());
    println!("month start:   {}", lunar.month_start.date().iso_gregorian());
    println!("BE year:       {}", labels.be_year);
    println!("animal year:   {:?} ({})", labels.animal, fmt::animal_year_name(labels.animal));
    println!("era year:      {:?} ({})", labels.era, fmt::era_year_name(labels.era));
    println!("Jolak Sakaraj: {}", labels.jolak_sakaraj);
    Ok(())
}

fn new_year(calendar: &NewYearCalculator, year: i32, details: bool) -> Result<()> {
    let moment = calendar
        .moment_for(year)
        .with_context(|| format!("failed to compute New Year of {year}"))?;
    println!("{moment}");
    if details {
        let info = SoriyatraLerngSak::from_gregorian(year)?;
        println!("{info:#?}");
    }
    Ok(())
}

fn leap_year(be_year: i64) -> Result<()> {
    let year = BeYear::new(be_year).with_context(|| format!("invalid BE year: {be_year}"))?;
    println!("leap type:     {:?}", leap::protetin_leap(year));
    println!("days in year:  {}", month::days_in_year(year));
    println!("aharkun:       {}", year.aharkun());
    println!("avoman:        {}", year.avoman());
    println!("bodithey:      {}", year.bodithey());
    println!("kromthupul:    {}", year.kromthupul());
    Ok(())
}
