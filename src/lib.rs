//! Round engines for the slideshow and chameleon party games, plus the
//! command layer the stdin/stdout host binary drives.

pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod protocol;
pub mod source;
pub mod state;
pub mod types;
