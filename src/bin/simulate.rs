use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::{error, info};
use owo_colors::OwoColorize;

use noughts::agents::Agent;
use noughts::game::{Mark, TicTacToe};
use noughts::logging;
use noughts::savegame::{self, GameRecord};

#[derive(clap::Parser)]
#[command(
    name = "noughts simulator",
    about = "Simulate games between two agents."
)]
struct Opts {
    #[arg(short, long, default_value_t = 1)]
    game_count: usize,
    #[arg(short, long)]
    verbose: bool,
    /// Directory the played games are appended to.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Agent playing X.
    x: Agent,
    /// Agent playing O.
    o: Agent,
}

fn main() {
    logging();

    let Opts {
        game_count,
        verbose,
        log_dir,
        x,
        o,
    } = Opts::parse();

    let start = Instant::now();
    let mut wins = [0; 2];
    let mut draws = 0;

    for i in 0..game_count {
        let record = match GameRecord::play(&x, &o, TicTacToe::new()) {
            Ok(record) => record,
            Err(e) => {
                error!("game {i} failed: {e}");
                continue;
            }
        };

        if verbose {
            for state in &record.states {
                println!("{state}");
            }
        }

        match record.winner {
            Some(Mark::X) => wins[0] += 1,
            Some(Mark::O) => wins[1] += 1,
            None => draws += 1,
        }
        println!(
            "{}: {} {:?} {}ms",
            "Finish Game".bright_green(),
            i,
            record.winner,
            start.elapsed().as_millis()
        );

        if let Some(log_dir) = &log_dir {
            if let Err(e) = savegame::save(&record, log_dir) {
                error!("could not save game: {e}");
            }
        }
    }

    info!("x={x} o={o}");
    println!(
        "Result: X {}/{game_count}, O {}/{game_count}, draws {draws}/{game_count}",
        wins[0], wins[1]
    );
}
