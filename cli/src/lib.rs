//! Terminal front end for the Tradedesk admin client.
//!
//! The binary in `main.rs` only parses arguments and dispatches; everything
//! else lives here so it can be exercised from `tests/`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod prompt;
pub mod timing;
