pub mod cli;
pub mod client;
pub mod config;
pub mod discover;
pub mod pipeline;
pub mod report;
pub mod util;
