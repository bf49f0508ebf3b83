//! Command dispatch: bridges CLI args -> catalog operations -> output formatting.

pub mod config_cmd;
pub mod products;
pub mod theme;
pub mod util;
