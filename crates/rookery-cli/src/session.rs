//! Line-oriented game session over any reader and writer.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use rookery_game::{Game, GameConfig, GameStatus};

use crate::command::{Command, DrawAction, MoveText, SessionOption, parse_command};
use crate::error::CliError;

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A session driving one game at a time for two players at the same keyboard.
///
/// Every command acts for the side to move. Output goes to `out`; rejected
/// commands print `error: <message>` and the session carries on.
pub struct Session<W: Write> {
    config: GameConfig,
    game: Option<Game>,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session with no game; options apply to every `new`.
    pub fn new(config: GameConfig, out: W) -> Self {
        Self {
            config,
            game: None,
            out,
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> Result<(), CliError> {
        for line in input.lines() {
            let result = match line {
                Ok(line) => {
                    debug!(cmd = %line.trim(), "received command");
                    self.handle(&line)
                }
                // The bad line is consumed; the next one is still readable.
                Err(err) if err.kind() == io::ErrorKind::InvalidData => Err(CliError::NotUtf8),
                Err(err) => return Err(err.into()),
            };
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(error = %err, "command rejected");
                    writeln!(self.out, "error: {err}")?;
                }
            }
            self.out.flush()?;
        }
        info!("session closed");
        Ok(())
    }

    /// Handle a single input line.
    pub fn handle(&mut self, line: &str) -> Result<Flow, CliError> {
        match parse_command(line)? {
            Command::New => self.handle_new()?,
            Command::Position => {
                let fen = self.game()?.fen();
                writeln!(self.out, "{fen}")?;
            }
            Command::Moves => self.handle_moves()?,
            Command::Play(mv) => self.handle_play(mv)?,
            Command::Check => {
                let game = self.game()?;
                let side = game.side_to_move();
                let in_check = game.is_in_check();
                if in_check {
                    writeln!(self.out, "{side} is in check")?;
                } else {
                    writeln!(self.out, "{side} is not in check")?;
                }
            }
            Command::History => self.handle_history()?,
            Command::Draw(action) => self.handle_draw(action)?,
            Command::Resign => {
                let game = self.game_mut()?;
                game.resign(game.side_to_move())?;
                self.report_status()?;
            }
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    /// The session's output, e.g. to inspect it after running a script.
    pub fn into_output(self) -> W {
        self.out
    }

    fn game(&self) -> Result<&Game, CliError> {
        self.game.as_ref().ok_or(CliError::NoGame)
    }

    fn game_mut(&mut self) -> Result<&mut Game, CliError> {
        self.game.as_mut().ok_or(CliError::NoGame)
    }

    fn handle_new(&mut self) -> Result<(), CliError> {
        let mut game = Game::new(self.config.clone())?;
        game.join("white")?;
        game.join("black")?;
        self.game = Some(game);
        writeln!(self.out, "new game, white to move")?;
        self.report_status()
    }

    fn handle_moves(&mut self) -> Result<(), CliError> {
        let game = self.game()?;
        let style = game.config().notation;
        let mut lines = Vec::new();
        for (piece, moves) in game.legal_moves().iter() {
            if moves.is_empty() {
                continue;
            }
            let mut targets: Vec<_> = moves.iter().map(|mv| mv.to()).collect();
            targets.sort();
            let targets: Vec<String> = targets.iter().map(ToString::to_string).collect();
            lines.push(format!(
                "{}{}: {}",
                style.symbol(piece.kind, piece.color),
                piece.square,
                targets.join(" ")
            ));
        }
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn handle_play(&mut self, mv: MoveText) -> Result<(), CliError> {
        let game = self.game_mut()?;
        let record = game.play(game.side_to_move(), mv.from, mv.to, mv.promotion)?;
        let notation = record.render(game.config().notation);
        writeln!(self.out, "{notation}")?;
        self.report_status()
    }

    fn handle_history(&mut self) -> Result<(), CliError> {
        let notation = self.game()?.notation();
        for (number, pair) in notation.chunks(2).enumerate() {
            writeln!(self.out, "{}. {}", number + 1, pair.join(" "))?;
        }
        Ok(())
    }

    fn handle_draw(&mut self, action: DrawAction) -> Result<(), CliError> {
        let game = self.game_mut()?;
        let side = game.side_to_move();
        match action {
            DrawAction::Offer => {
                game.offer_draw(side)?;
                writeln!(self.out, "{side} offers a draw")?;
                Ok(())
            }
            DrawAction::Accept => {
                game.accept_draw(side)?;
                self.report_status()
            }
        }
    }

    fn handle_setoption(&mut self, option: SessionOption) {
        match option {
            SessionOption::Notation(style) => self.config.notation = style,
            SessionOption::StartPosition(fen) => self.config.starting_position = fen,
        }
        info!(
            notation = %self.config.notation,
            start = %self.config.starting_position,
            "options updated for the next game"
        );
    }

    /// Print the outcome once the game has finished.
    fn report_status(&mut self) -> Result<(), CliError> {
        if let GameStatus::Finished(outcome) = self.game()?.status() {
            writeln!(self.out, "game over: {outcome}")?;
        }
        Ok(())
    }
}
