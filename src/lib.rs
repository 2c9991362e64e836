// Re-export internal modules for integration tests and external crate use.
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod exitcode;
pub mod git;
pub mod logging;
pub mod output;
pub mod request;
pub mod routes;
