//! Chess rules core: board state, per-piece move legality, legal-move
//! enumeration for hints, and the click-driven turn/selection/promotion
//! state machine.
//!
//! Deliberately scoped to per-piece movement geometry, path clearance,
//! capture legality, and pawn promotion: there is no check or checkmate
//! detection, no castling, and no en passant. The front end in
//! `crates/gui` consumes this crate; nothing here renders or blocks.

pub mod board;
pub mod error;
pub mod game;
pub mod hints;
pub mod rules;
pub mod types;

pub use board::*;
pub use error::*;
pub use game::*;
pub use hints::*;
pub use rules::*;
pub use types::*;
