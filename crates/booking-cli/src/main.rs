//! `booking` CLI — evaluate court booking templates and member permissions
//! from JSON snapshots on the command line.
//!
//! ## Usage
//!
//! ```sh
//! # List every date a template spans
//! booking dates -i template.json
//!
//! # Check a template's structural invariants
//! booking validate -i template.json
//!
//! # Is 2024-01-02 at 09:00 open under the template?
//! booking available -i template.json --date 2024-01-02 --time 09:00
//!
//! # May the member book at the venue? ({"user": .., "venue": ..} on stdin)
//! cat member.json | booking can-request --date 2024-01-01 --time 09:30
//! booking can-request -i member.json --date 2024-01-01 --from 09:15 --to 09:45
//!
//! # Open slots, or only those the member may book
//! booking slots -i offer.json
//! booking slots -i offer.json --bookable
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides `--log-level`.

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use booking_engine::{
    bookable_slots, can_make_request, is_available_request, open_slots, parse_date,
    template_dates, ClockTime, RequestTemplate, RequestedSlot, TimeRange, User, Venue,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "booking",
    version,
    about = "Court booking availability and permission checks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level used when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every date a request template spans, one per line
    Dates {
        /// Template JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Check a request template's structural invariants
    Validate {
        /// Template JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print whether a date and time slot are open under a template
    Available {
        /// Template JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to check (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        /// Time slot to check (HH:MM)
        #[arg(long)]
        time: ClockTime,
    },
    /// Print whether a member may request a booking at a venue
    CanRequest {
        /// JSON file with "user" and "venue" (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Requested date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        /// Single requested time (HH:MM)
        #[arg(long, conflicts_with_all = ["from", "to"])]
        time: Option<ClockTime>,
        /// Start of a requested range (HH:MM)
        #[arg(long, requires = "to")]
        from: Option<ClockTime>,
        /// End of a requested range (HH:MM)
        #[arg(long, requires = "from")]
        to: Option<ClockTime>,
    },
    /// Print the open slots of a template as JSON
    Slots {
        /// JSON file with "template" and optional "user"/"venue" (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Only list slots the user may book at the venue
        #[arg(long)]
        bookable: bool,
    },
}

/// Input for `can-request`.
#[derive(Deserialize)]
struct MemberInput {
    user: User,
    venue: Venue,
}

/// Input for `slots`.
#[derive(Deserialize)]
struct OfferInput {
    template: RequestTemplate,
    user: Option<User>,
    venue: Option<Venue>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Commands::Dates { input } => {
            let template: RequestTemplate = read_json(input.as_deref())?;
            let dates = template_dates(&template);
            info!(count = dates.len(), "enumerated template dates");
            for date in dates {
                println!("{}", date);
            }
        }
        Commands::Validate { input } => {
            let template: RequestTemplate = read_json(input.as_deref())?;
            template.validate().context("Template is invalid")?;
            println!("ok");
        }
        Commands::Available { input, date, time } => {
            let template: RequestTemplate = read_json(input.as_deref())?;
            let open = is_available_request(&template, date, time);
            debug!(%date, %time, open, "evaluated template cell");
            println!("{}", open);
        }
        Commands::CanRequest {
            input,
            date,
            time,
            from,
            to,
        } => {
            let MemberInput { user, venue } = read_json(input.as_deref())?;
            let slot = requested_slot(time, from, to)?;
            let permitted = can_make_request(&user, &venue, date, slot);
            debug!(%date, venue = %venue.id, ?slot, permitted, "evaluated request permission");
            println!("{}", permitted);
        }
        Commands::Slots { input, bookable } => {
            let offer: OfferInput = read_json(input.as_deref())?;
            let slots = if bookable {
                let (Some(user), Some(venue)) = (offer.user.as_ref(), offer.venue.as_ref()) else {
                    anyhow::bail!("--bookable requires both \"user\" and \"venue\" in the input");
                };
                bookable_slots(&offer.template, user, venue)
            } else {
                open_slots(&offer.template)
            };
            info!(count = slots.len(), bookable, "listed slots");
            println!("{}", serde_json::to_string_pretty(&slots)?);
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level: {}", level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
    Ok(())
}

/// Turn the `can-request` time options into the slot to evaluate.
///
/// clap already rejects `--time` together with `--from`/`--to`, and either
/// range bound on its own.
fn requested_slot(
    time: Option<ClockTime>,
    from: Option<ClockTime>,
    to: Option<ClockTime>,
) -> Result<Option<RequestedSlot>> {
    match (time, from, to) {
        (Some(time), None, None) => Ok(Some(RequestedSlot::At(time))),
        (None, Some(st), Some(et)) => {
            if st > et {
                anyhow::bail!("--from {} is after --to {}", st, et);
            }
            Ok(Some(RequestedSlot::Within(TimeRange::new(st, et))))
        }
        (None, None, None) => Ok(None),
        _ => anyhow::bail!("use either --time or --from/--to"),
    }
}

fn read_json<T: DeserializeOwned>(path: Option<&str>) -> Result<T> {
    let raw = read_input(path)?;
    let source = path.unwrap_or("stdin");
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse JSON from {}", source))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
