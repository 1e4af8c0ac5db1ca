//! Input translation: raw key and pointer samples → one direction vote.
//!
//! The frame loop hands this module a single [`input::FrameInput`] value
//! per frame (polled, never callback-driven). Keys are evaluated first in
//! event order, the pointer last, so the pointer's vote wins whenever both
//! channels fire in the same poll. Acceptance rules:
//!
//! - key vote: perpendicular turns only (the current axis is locked in
//!   both signs, which enforces the no-reversal invariant one step early)
//! - pointer vote: dominant axis of head-center → pointer, rejected only
//!   when it is the exact reverse of the current direction

pub mod input;

#[cfg(test)]
mod tests;
