//! Playable games built on the core types.

pub mod mastermind;
