//! Game logic of the sum quiz.
//!
//! Everything here is hardware agnostic. The firmware provides the display,
//! the buzzer, the button lines, the random source and the pacing through the
//! traits defined in these modules and then keeps calling [`game::Game::step`].

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod game;
pub mod input;
pub mod pacing;
pub mod random;
pub mod round;
pub mod session;
pub mod text;
pub mod tone;

#[cfg(test)]
mod testing;
