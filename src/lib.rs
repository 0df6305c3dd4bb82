// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod classify;
pub mod error;
pub mod log;
pub mod model;
pub mod notify;
pub mod report;
pub mod runner;
