pub mod actors;
pub mod cli;
pub mod config;
pub mod detail;
pub mod error;
pub mod github;
pub mod grid;
pub mod health;
pub mod language;
pub mod models;
pub mod profile;
pub mod site;
pub mod terminal;
pub mod types;
