// src/infrastructure/mod.rs
pub mod config;
pub mod http;
pub mod prompt;

pub use config::Config;
pub use http::HttpTermsRepository;
pub use prompt::TerminalConfirmer;
