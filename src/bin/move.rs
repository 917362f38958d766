use clap::Parser;
use log::{error, info};

use noughts::agents::Agent;
use noughts::game::{GameState, TicTacToe};
use noughts::logging;

#[derive(clap::Parser)]
#[command(name = "noughts move", about = "Compute a single move for a board.")]
struct Opts {
    /// Configuration of the agent.
    #[arg(long, default_value_t)]
    agent: Agent,
    /// Board like "XO. .X. ...", the player to move is derived from the marks.
    #[arg(value_parser = parse_board)]
    board: TicTacToe,
}

fn parse_board(s: &str) -> Result<TicTacToe, String> {
    TicTacToe::parse(s).ok_or_else(|| format!("invalid board {s:?}"))
}

fn main() {
    logging();

    let Opts { agent, board } = Opts::parse();
    info!("{board:?}");

    match agent.step(&board) {
        Ok(mv) => {
            let next = board.apply(mv);
            info!("Move: {mv}");
            println!("{next}");
        }
        Err(e) => error!("no move: {e}"),
    }
}
