//! Command implementations for the Plainmark CLI.

pub mod generate;
pub mod init;
pub mod strip;
pub mod trace;
