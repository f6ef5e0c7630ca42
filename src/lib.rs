pub mod cli;
pub mod collect;
pub mod config;
pub mod constants;
