//! The interactive turn loop: read a command, apply it to the game, show the result.

use crate::location::{Location, ParseLocationError};
use crate::render::{format_locations, format_record, player_symbol, BoardView, Score};
use othello_engine::{Game, GameResult, Outcome};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// A line of user input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Play(Location),
    Hint,
    Undo,
    Record,
    Restart,
    Help,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hint" | "h" => Ok(Command::Hint),
            "undo" | "u" => Ok(Command::Undo),
            "record" | "r" => Ok(Command::Record),
            "restart" => Ok(Command::Restart),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            notation => notation.parse().map(Command::Play),
        }
    }
}

const HELP: &str = "Commands:
  <location>  play a move, e.g. D3
  hint        mark the moves that flip the most pieces with '+'
  undo        take back the last move (once)
  record      list the moves played so far
  restart     start over
  quit        leave the game";

enum Flow {
    Continue,
    Quit,
}

/// A terminal game reading commands from `input` and writing to `output`.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    show_hints: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
            show_hints: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until the user quits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_board()?;

            let line = match self.prompt("Enter a move: ")? {
                Some(line) => line,
                None => return Ok(()),
            };

            let command: Command = match line.parse() {
                Ok(command) => command,
                Err(_) => {
                    writeln!(self.output, "Cannot parse '{}'. Type 'help' for commands.", line.trim())?;
                    continue;
                }
            };
            debug!(?command, "command");

            if let Flow::Quit = self.execute(command)? {
                return Ok(());
            }
        }
    }

    fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Play(location) => return self.play(location),
            Command::Hint => self.show_hints = true,
            Command::Undo => match self.game.undo() {
                Ok(_) => writeln!(self.output, "Took back the last move.")?,
                Err(err) => writeln!(self.output, "Cannot undo: {}.", err)?,
            },
            Command::Record => {
                if self.game.record().is_empty() {
                    writeln!(self.output, "No moves played yet.")?;
                } else {
                    writeln!(self.output, "{}", format_record(&self.game))?;
                }
            }
            Command::Restart => {
                if self.confirm("Restart? [y/n] ")? {
                    self.restart();
                }
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self, location: Location) -> io::Result<Flow> {
        let edge_length = self.game.edge_length();
        let index = match location.to_index(edge_length) {
            Some(index) => index,
            None => {
                writeln!(self.output, "{} is off the board.", location)?;
                return Ok(Flow::Continue);
            }
        };

        let outcome = match self.game.select_move(index) {
            Ok(outcome) => outcome,
            Err(_) => {
                writeln!(
                    self.output,
                    "Invalid move. Legal moves: {}",
                    format_locations(self.game.legal_moves().targets(), edge_length)
                )?;
                return Ok(Flow::Continue);
            }
        };
        self.show_hints = false;

        match outcome {
            Outcome::Ongoing { .. } => Ok(Flow::Continue),
            Outcome::Pass { passed, next } => {
                writeln!(
                    self.output,
                    "No valid move for {} ({}). {} plays again.",
                    passed,
                    player_symbol(passed),
                    next
                )?;
                Ok(Flow::Continue)
            }
            Outcome::Complete(result) => self.finish(result),
        }
    }

    fn finish(&mut self, result: GameResult) -> io::Result<Flow> {
        writeln!(self.output, "\n{}\n", BoardView::new(&self.game, false))?;
        writeln!(self.output, "{}", Score(self.game.counts()))?;
        match result {
            GameResult::Winner(player) => writeln!(self.output, "Winner: {}.", player)?,
            GameResult::Draw => writeln!(self.output, "Draw.")?,
        }
        info!(?result, "game finished");

        if self.confirm("Play again? [y/n] ")? {
            self.restart();
            Ok(Flow::Continue)
        } else {
            Ok(Flow::Quit)
        }
    }

    fn restart(&mut self) {
        self.game.restart();
        self.show_hints = false;
    }

    fn show_board(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\n{}\n\n{}  {} ({}) to move",
            BoardView::new(&self.game, self.show_hints),
            Score(self.game.counts()),
            self.game.active_player(),
            player_symbol(self.game.active_player())
        )
    }

    /// Print `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        Ok(self
            .prompt(message)?
            .map_or(false, |answer| answer.trim().eq_ignore_ascii_case("y")))
    }
}
