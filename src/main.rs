//! Headless demo runner
//!
//! Drives a race session at ~60Hz in the terminal, then prints the podium
//! and full leaderboard. `--json` streams one snapshot per tick instead,
//! for an external display layer.

use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;

use derby::{parse_duration, RaceConfig, RaceResults, RaceSession};

/// Race a pack of icons across a track and print the standings
#[derive(Parser, Debug)]
#[command(name = "derby", version, about)]
struct Args {
    /// Number of racers (1-100)
    #[arg(short, long, default_value_t = 8)]
    racers: u32,

    /// Target race duration, mm:ss or whole seconds
    #[arg(short, long, default_value = "00:30")]
    duration: String,

    /// Track length in display units
    #[arg(short, long, default_value_t = 1200.0)]
    track_length: f32,

    /// Stream one JSON snapshot per tick to stdout
    #[arg(long)]
    json: bool,
}

const TICK: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();
    let args = Args::parse();

    let duration_secs = match parse_duration(&args.duration) {
        Ok(secs) => secs,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let config = RaceConfig {
        track_length: args.track_length,
        racer_count: args.racers,
        duration_secs,
    };

    let mut session = match RaceSession::start(config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let mut last_clock = String::new();
    loop {
        let snapshot = session.tick();

        if args.json {
            match serde_json::to_string(&snapshot) {
                Ok(line) => println!("{line}"),
                Err(err) => log::warn!("snapshot serialization failed: {err}"),
            }
        } else if snapshot.clock != last_clock {
            println!("  {}", snapshot.clock);
            last_clock = snapshot.clock;
        }

        if session.finished() {
            break;
        }
        thread::sleep(TICK);
    }

    if let Some(results) = session.results() {
        if !args.json {
            print_podium(&results);
            print!("{results}");
        }
    }
}

fn print_podium(results: &RaceResults) {
    const PLACES: [&str; 3] = ["1st", "2nd", "3rd"];

    println!("\n=== Podium ===");
    for (place, slot) in PLACES.iter().zip(results.podium()) {
        match slot {
            Some(finish) => println!(
                "{place}: Racer {} ({:.2}s)",
                finish.racer_id + 1,
                finish.elapsed_secs
            ),
            None => println!("{place}: ---"),
        }
    }
    println!();
}
