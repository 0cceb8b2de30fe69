//! A single game between two players.

use rookery_core::{
    Color, MoveError, MoveMap, MoveRecord, PieceKind, Position, Square, apply_move, encode,
    has_legal_moves, is_in_check, legal_moves,
};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::status::{GameStatus, Outcome};

/// A game: the current position, its history, and the lifecycle around it.
///
/// White moves first. The game finishes when the side to move has no legal
/// move (checkmate or stalemate), on resignation, or by agreed draw.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    players: [Option<String>; 2],
    position: Position,
    history: Vec<MoveRecord>,
    side_to_move: Color,
    status: GameStatus,
    draw_offer: Option<Color>,
}

impl Game {
    /// Create a game waiting for players.
    ///
    /// # Errors
    ///
    /// Fails if the configured starting position does not decode or is not
    /// playable.
    pub fn new(config: GameConfig) -> Result<Game, GameError> {
        let position = config.position()?;
        info!(fen = %position, notation = %config.notation, "game created");
        Ok(Game {
            config,
            players: [None, None],
            position,
            history: Vec::new(),
            side_to_move: Color::White,
            status: GameStatus::Created,
            draw_offer: None,
        })
    }

    /// Rebuild a game by replaying stored moves from the configured start.
    ///
    /// Both seats are filled with placeholder names.
    pub fn replay(
        config: GameConfig,
        moves: impl IntoIterator<Item = (Square, Square, Option<PieceKind>)>,
    ) -> Result<Game, GameError> {
        let mut game = Game::new(config)?;
        game.join("white")?;
        game.join("black")?;
        for (from, to, promotion) in moves {
            game.play(game.side_to_move, from, to, promotion)?;
        }
        Ok(game)
    }

    /// Take the next free seat: White first, then Black.
    ///
    /// The second join starts the game.
    pub fn join(&mut self, name: &str) -> Result<Color, GameError> {
        let color = match self.players {
            [None, _] => Color::White,
            [Some(_), None] => Color::Black,
            [Some(_), Some(_)] => return Err(GameError::GameFull),
        };
        self.players[color.index()] = Some(name.to_string());
        info!(%color, name, "player joined");

        if color == Color::Black {
            self.status = GameStatus::InProgress;
            info!("game started");
            self.detect_terminal();
        }
        Ok(color)
    }

    /// Play a move for `color`, given by its origin and destination.
    ///
    /// `promotion` names the replacement piece when a pawn reaches the last
    /// rank. Returns the record of the applied move.
    pub fn play(
        &mut self,
        color: Color,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, GameError> {
        self.ensure_turn(color)?;
        if self.position.piece_at(from).is_none() {
            return Err(MoveError::PieceNotFound { square: from }.into());
        }

        let mv = self
            .legal_moves()
            .find(from, to)
            .ok_or(MoveError::Illegal { from, to })?;
        let (position, record) = apply_move(&self.position, mv, promotion, self.history.last())?;
        debug!(%color, notation = %record.render(self.config.notation), "played");

        self.position = position;
        self.history.push(record.clone());
        self.side_to_move = !color;
        // Playing on declines the opponent's offer; our own offer stands.
        if self.draw_offer == Some(!color) {
            self.draw_offer = None;
        }
        self.detect_terminal();

        Ok(record)
    }

    /// Offer a draw to the opponent.
    ///
    /// The offer stays open until the opponent accepts it or plays a move.
    pub fn offer_draw(&mut self, color: Color) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.draw_offer = Some(color);
        info!(%color, "draw offered");
        Ok(())
    }

    /// Accept the opponent's pending draw offer, finishing the game.
    pub fn accept_draw(&mut self, color: Color) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if self.draw_offer != Some(!color) {
            return Err(GameError::NoDrawOffer { by: !color });
        }
        self.finish(Outcome::DrawAgreed);
        Ok(())
    }

    /// Resign; the opponent wins.
    pub fn resign(&mut self, color: Color) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.finish(Outcome::Resignation { winner: !color });
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The name seated at `color`, if any.
    pub fn player(&self, color: Color) -> Option<&str> {
        self.players[color.index()].as_deref()
    }

    /// The side whose draw offer is pending.
    pub fn draw_offer(&self) -> Option<Color> {
        self.draw_offer
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> MoveMap {
        legal_moves(&self.position, self.side_to_move, self.history.last())
    }

    /// Return `true` if the side to move is in check.
    pub fn is_in_check(&self) -> bool {
        is_in_check(&self.position, self.side_to_move)
    }

    /// FEN placement of the current position.
    pub fn fen(&self) -> String {
        encode(&self.position)
    }

    /// The history rendered in the configured notation style.
    pub fn notation(&self) -> Vec<String> {
        self.history
            .iter()
            .map(|record| record.render(self.config.notation))
            .collect()
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            status => Err(GameError::NotInProgress { status }),
        }
    }

    fn ensure_turn(&self, color: Color) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if color != self.side_to_move {
            return Err(GameError::NotYourTurn { color });
        }
        Ok(())
    }

    /// Finish the game if the side to move has no legal move.
    fn detect_terminal(&mut self) {
        let side = self.side_to_move;
        if has_legal_moves(&self.position, side, self.history.last()) {
            return;
        }
        let outcome = if is_in_check(&self.position, side) {
            Outcome::Checkmate { winner: !side }
        } else {
            Outcome::Stalemate
        };
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: Outcome) {
        self.status = GameStatus::Finished(outcome);
        self.draw_offer = None;
        info!(%outcome, moves = self.history.len(), "game finished");
    }
}
