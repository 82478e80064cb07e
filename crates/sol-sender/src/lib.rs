pub mod balance;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod misc;
pub mod network;
pub mod notify;
pub mod prompt;
pub mod send;
pub mod state;
pub mod ui;
pub mod wallet;
