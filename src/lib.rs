//! tinyserve - a one-request-per-connection static file server
//!
//! Accepts TCP connections, reads a single `GET` request line, and answers
//! with the matching file from disk.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
