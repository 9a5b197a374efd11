pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod renderers;
pub mod utils;

pub use error::{DashboardError, Result};
