pub mod cli;
pub mod commands;
mod logging;
