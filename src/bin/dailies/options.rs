use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::ArgMatches;
use daily_puzzles::random::{
    today, CalendarSeed, DaysSinceEpochSeed, FixedSeed, RandomSeed, Seed, SeedStrategy,
};

const DEFAULT_KENKEN_WIDTH: usize = 5;
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone)]
pub(crate) struct Options {
    game: Game,
    seed_strategy: SeedStrategy,
    date: NaiveDate,
    max_attempts: Option<u32>,
    json: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let game = if matches.is_present("set") {
            Game::Set
        } else {
            Game::KenKen {
                width: match matches.value_of("width") {
                    None => DEFAULT_KENKEN_WIDTH,
                    Some(s) => s.parse().with_context(|| format!("invalid width \"{}\"", s))?,
                },
            }
        };
        let seed_strategy: SeedStrategy = if let Some(s) = matches.value_of("seed") {
            FixedSeed(parse_seed(s)?).into()
        } else {
            match matches.value_of("seed_source").unwrap_or("calendar") {
                "calendar" => CalendarSeed.into(),
                "epoch" => DaysSinceEpochSeed::default().into(),
                "random" => RandomSeed.into(),
                other => return Err(anyhow!("unknown seed source \"{}\"", other)),
            }
        };
        let date = match matches.value_of("date") {
            None => today(),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .with_context(|| format!("invalid date \"{}\", expected YYYY-MM-DD", s))?,
        };
        let max_attempts = matches
            .value_of("max_attempts")
            .map(|s| {
                s.parse()
                    .with_context(|| format!("invalid attempt count \"{}\"", s))
            })
            .transpose()?;
        Ok(Self {
            game,
            seed_strategy,
            date,
            max_attempts,
            json: matches.is_present("json"),
        })
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn seed_strategy(&self) -> &SeedStrategy {
        &self.seed_strategy
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date the seed was derived from, `None` for a fixed seed
    pub fn seed_date(&self) -> Option<NaiveDate> {
        match self.seed_strategy {
            SeedStrategy::FixedSeed(_) => None,
            _ => Some(self.date),
        }
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    pub fn json(&self) -> bool {
        self.json
    }
}

/// Reads a seed as either an unsigned or a negative 32-bit integer.
/// Negative seeds keep their two's complement bits.
fn parse_seed(s: &str) -> Result<Seed> {
    s.parse::<Seed>()
        .or_else(|_| s.parse::<i32>().map(|seed| seed as Seed))
        .with_context(|| format!("invalid seed \"{}\"", s))
}

#[derive(Clone, Copy)]
pub(crate) enum Game {
    KenKen { width: usize },
    Set,
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg, ArgGroup};

    App::new("Dailies")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("Generate the daily KenKen and SET puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .group(
            ArgGroup::with_name("game")
                .args(&["kenken", "set"])
                .required(true),
        )
        .arg(
            Arg::with_name("kenken")
                .short("k")
                .long("kenken")
                .help("generate a KenKen puzzle")
                .display_order(1),
        )
        .arg(
            Arg::with_name("set")
                .short("s")
                .long("set")
                .help("deal a SET puzzle")
                .display_order(1),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .value_name("WIDTH")
                .requires("kenken")
                .help("set the width and height of the KenKen grid"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .allow_hyphen_values(true)
                .conflicts_with_all(&["seed_source", "date"])
                .help("use a fixed seed instead of deriving one from the date"),
        )
        .arg(
            Arg::with_name("seed_source")
                .long("seed-source")
                .takes_value(true)
                .possible_values(&["calendar", "epoch", "random"])
                .help("how to derive the seed from the date"),
        )
        .arg(
            Arg::with_name("date")
                .short("d")
                .long("date")
                .takes_value(true)
                .value_name("YYYY-MM-DD")
                .help("the day of the puzzle, today if omitted"),
        )
        .arg(
            Arg::with_name("max_attempts")
                .short("a")
                .long("max-attempts")
                .takes_value(true)
                .value_name("COUNT")
                .help("the number of candidates to try before falling back"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print the puzzle as JSON"),
        )
}
