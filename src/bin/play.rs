use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use owo_colors::OwoColorize;

use noughts::agents::Agent;
use noughts::game::{GameState, Mark, TicTacToe};
use noughts::logging;
use noughts::savegame::{self, GameRecord};

#[derive(clap::Parser)]
#[command(name = "noughts play", about = "Play noughts and crosses against an agent.")]
struct Opts {
    /// Configuration of the opponent.
    #[arg(long, default_value_t)]
    agent: Agent,
    /// Mark of the human player, X always starts.
    #[arg(long, default_value = "X")]
    human: Mark,
    /// Directory the finished game is appended to.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    logging();

    let Opts {
        agent,
        human,
        log_dir,
    } = Opts::parse();

    let mut game = TicTacToe::new();
    let mut record = match human {
        Mark::X => GameRecord::new(None, Some(agent.clone()), game),
        Mark::O => GameRecord::new(Some(agent.clone()), None, game),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_terminal() {
        let mv = if game.current == human {
            println!("\n{game}");
            print!("Enter your move (0-8): ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                println!();
                return Ok(());
            };
            match line?.trim().parse::<usize>() {
                Ok(mv) if mv < 9 => {
                    if !game.move_is_valid(mv) {
                        println!("{}", "Cell already taken. Try again.".bright_yellow());
                        continue;
                    }
                    mv
                }
                _ => {
                    println!("{}", "Invalid move. Try again.".bright_yellow());
                    continue;
                }
            }
        } else {
            match agent.step(&game) {
                Ok(mv) => {
                    println!("AI's move ({}): {mv}", game.current);
                    mv
                }
                Err(e) => {
                    error!("agent failed: {e}");
                    return Ok(());
                }
            }
        };

        game = game.apply(mv);
        record.push(game);
    }

    println!("\nFinal board:\n{game}");
    match game.winner() {
        Some(winner) if winner == human => println!("{}", "You win!".bright_green()),
        Some(_) => println!("{}", "AI wins!".bright_red()),
        None => println!("It's a draw!"),
    }

    if let Some(log_dir) = log_dir {
        savegame::save(&record, &log_dir)?;
    }
    info!("{} moves", record.states.len() - 1);
    Ok(())
}
