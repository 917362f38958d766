//! Game records, stored as one json object per line.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::game::{GameState, Mark, Outcome, Player, TicTacToe};
use crate::search::SearchError;

/// Name of the record file inside the log directory.
pub const RECORD_FILE: &str = "games.jsonl";

/// A finished or running game together with the agents that played it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameRecord {
    /// `None` for a human player
    pub x: Option<Agent>,
    pub o: Option<Agent>,
    /// All states from the start position to the last one
    pub states: Vec<TicTacToe>,
    pub winner: Option<Mark>,
}

impl GameRecord {
    pub fn new(x: Option<Agent>, o: Option<Agent>, start: TicTacToe) -> GameRecord {
        GameRecord {
            x,
            o,
            states: vec![start],
            winner: start.winner(),
        }
    }

    /// Plays a complete game between two agents.
    pub fn play(x: &Agent, o: &Agent, start: TicTacToe) -> Result<GameRecord, SearchError> {
        let mut record = GameRecord::new(Some(x.clone()), Some(o.clone()), start);
        let mut game = start;
        while !game.is_terminal() {
            let agent = match game.current {
                Mark::X => x,
                Mark::O => o,
            };
            let mv = agent.step(&game)?;
            game = game.apply(mv);
            debug!("{} plays {mv}: {game:?}", game.current.opponent());
            record.push(game);
        }
        Ok(record)
    }

    pub fn push(&mut self, state: TicTacToe) {
        self.winner = state.winner();
        self.states.push(state);
    }

    pub fn last(&self) -> Option<&TicTacToe> {
        self.states.last()
    }

    pub fn outcome(&self) -> Outcome<Mark> {
        self.last().map(|s| s.outcome()).unwrap_or(Outcome::None)
    }
}

/// Appends the record to the record file in `log_dir`.
pub fn save(record: &GameRecord, log_dir: &Path) -> io::Result<()> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)?;
    }

    let path = log_dir.join(RECORD_FILE);
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    serde_json::to_writer(&mut file, record)?;
    writeln!(file)?;
    info!("saved game to {}", path.display());
    Ok(())
}

/// Reads all records of a record file.
pub fn load(path: &Path) -> io::Result<Vec<GameRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}
