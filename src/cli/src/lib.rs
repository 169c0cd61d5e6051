pub mod config;
pub mod device_client;
pub mod language;
pub mod prompt;
pub mod render;
pub mod shell;

pub use shell::{Outcome, Shell};
