//! CLI module graph.

pub mod check;
pub mod clear;
pub mod command;
pub mod config;
pub mod output;
pub mod paths;
pub mod record;
pub mod show;
pub mod suggest;
