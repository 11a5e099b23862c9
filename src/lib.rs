pub mod cli;
pub mod commands;
pub mod config;
pub mod discord;
pub mod error;
pub mod github;
pub mod models;
pub mod render;
pub mod stats;
