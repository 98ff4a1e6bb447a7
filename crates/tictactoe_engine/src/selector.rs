//! Heuristic computer opponent.
//!
//! A greedy, one-move-lookahead policy. Tiers are tried in order and the
//! first one that applies picks the square:
//!
//! 1. [`Tier::WinNow`] - complete one of our own lines.
//! 2. [`Tier::Block`] - occupy the square that would complete the opponent's line.
//! 3. [`Tier::Center`] - take the center.
//! 4. [`Tier::Corner`] - a uniformly random free corner.
//! 5. [`Tier::Any`] - a uniformly random free square.
//!
//! Probing happens on copies of the board; the board passed in is never
//! written to.

use super::{Board, Player, Position, SelectError, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Which rule of the policy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Tier {
    /// Completes a line for the selecting player.
    WinNow,
    /// Denies a square that would complete the opponent's line.
    Block,
    /// Takes the center square.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes any random free square.
    Any,
}

/// Picks moves for the computer player.
///
/// The random source is injectable so games can be replayed exactly; see
/// [`MoveSelector::seeded`] and [`MoveSelector::with_rng`].
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Creates a selector seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a selector with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MoveSelector<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses an empty square for `me`.
    ///
    /// # Errors
    ///
    /// [`SelectError::BoardFull`] when no square is empty, and
    /// [`SelectError::GameOver`] when either player already holds a line.
    pub fn select_move(&mut self, board: &Board, me: Player) -> Result<Position, SelectError> {
        self.select_with_tier(board, me).map(|(position, _)| position)
    }

    /// Chooses an empty square for `me` and reports the tier that chose it.
    #[instrument(skip(self, board))]
    pub fn select_with_tier(
        &mut self,
        board: &Board,
        me: Player,
    ) -> Result<(Position, Tier), SelectError> {
        if board.is_winner(Player::X) || board.is_winner(Player::O) {
            return Err(SelectError::GameOver);
        }

        let empties = board.empty_positions();
        if empties.is_empty() {
            return Err(SelectError::BoardFull);
        }

        let (position, tier) = if let Some(pos) = completing_move(board, me, &empties) {
            (pos, Tier::WinNow)
        } else if let Some(pos) = completing_move(board, me.opponent(), &empties) {
            (pos, Tier::Block)
        } else if board.is_empty(Position::Center) {
            (Position::Center, Tier::Center)
        } else {
            let corners: Vec<Position> = Position::CORNERS
                .iter()
                .copied()
                .filter(|pos| board.is_empty(*pos))
                .collect();
            match corners.choose(&mut self.rng) {
                Some(pos) => (*pos, Tier::Corner),
                None => {
                    let pos = empties
                        .choose(&mut self.rng)
                        .copied()
                        .ok_or(SelectError::BoardFull)?;
                    (pos, Tier::Any)
                }
            }
        };

        debug!(%position, %tier, "Selected move");
        Ok((position, tier))
    }
}

/// First empty square (ascending) where `player`'s mark would complete a line.
fn completing_move(board: &Board, player: Player, empties: &[Position]) -> Option<Position> {
    empties.iter().copied().find(|pos| {
        let mut scratch = *board;
        scratch.set(*pos, Square::Occupied(player));
        scratch.is_winner(player)
    })
}
