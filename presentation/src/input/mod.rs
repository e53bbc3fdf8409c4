//! Debate input

pub mod conversation;
