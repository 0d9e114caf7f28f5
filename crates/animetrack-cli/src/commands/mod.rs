pub mod account;
pub mod config;
pub mod list;
pub mod prompts;
pub mod search;
pub mod shell;
pub mod stats;
