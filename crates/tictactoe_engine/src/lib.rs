//! Tic-tac-toe rules engine and heuristic computer opponent.
//!
//! The crate has two parts:
//!
//! - [`Engine`], the board state machine. It owns a [`GameSession`] and is
//!   the only thing that mutates it. Illegal moves come back as a
//!   [`MoveError`] and leave the session untouched.
//! - [`MoveSelector`], which picks a square for the computer player from a
//!   read-only [`Board`] using a fixed priority of [`Tier`]s.
//!
//! Rendering and input belong to the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, MoveSelector, Outcome, Player};
//!
//! let mut engine = Engine::new();
//! engine.apply_move(0, Player::X)?;
//!
//! let mut selector = MoveSelector::seeded(42);
//! let reply = engine.play_computer_turn(&mut selector)?;
//! assert_eq!(reply.to_index(), 4);
//! assert!(engine.session().is_running());
//! assert_eq!(engine.session().outcome(), None::<Outcome>);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod selector;
mod session;
mod types;

pub use action::{EngineError, Move, MoveError, SelectError};
pub use engine::Engine;
pub use position::Position;
pub use selector::{MoveSelector, Tier};
pub use session::{GameSession, GameStatus, Outcome};
pub use types::{Board, BoardParseError, Player, Square, WIN_LINES, WinLine};
