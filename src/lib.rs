// Repochat - chat with any GitHub repository
// Library exports

pub mod claude;
pub mod cli;
pub mod config;
pub mod errors;
pub mod github;
pub mod prompt;
pub mod server;
pub mod session;
