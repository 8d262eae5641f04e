pub mod common;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod patcher;
pub mod snapshot;
