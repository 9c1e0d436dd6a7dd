//! Plainmark CLI library for testing and reusability.

pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod session;
pub mod utils;

pub use plainmark_utils::Config;
pub use session::Session;
