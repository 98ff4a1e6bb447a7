//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) value. They never touch a
//! session, so they work equally on the live board and on scratch copies.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, is_winner, winning_line};
