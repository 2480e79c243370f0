//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one `GET` per connection, headers
//! read and ignored, and a response carrying only `Content-Type` and
//! `Content-Length`.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Request line parsing and header skipping
//! - **`request`**: The parsed request line
//! - **`response`**: Status codes and the response value
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: MIME type lookup by file extension
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────────┐
//!        │  ReadingRequestLine  │ ─ I/O error, malformed, not GET ──┐
//!        └──────────┬───────────┘                                   │
//!                   ▼                                               │
//!        ┌──────────────────────┐                                   │
//!        │    ReadingHeaders    │ ← until blank line or EOF         │
//!        └──────────┬───────────┘                                   │
//!                   ▼                                               │
//!        ┌──────────────────────┐                                   │
//!        │    ResolvingFile     │ ─ unreadable → 404 ─┐             │
//!        └──────────┬───────────┘                     │             │
//!                   ▼                                 │             │
//!        ┌──────────────────────┐                     │             │
//!        │ ResolvingContentType │ ─ unknown ext ──────┼─────────────┤
//!        └──────────┬───────────┘                     │             │
//!                   ▼ 200                             ▼             │
//!        ┌──────────────────────┐                                   │
//!        │   WritingResponse    │                                   │
//!        └──────────┬───────────┘                                   │
//!                   ▼                                               │
//!        ┌──────────────────────┐                                   │
//!        │        Closed        │ ◄─────────── no bytes written ────┘
//!        └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tinyserve::config::Config;
//! use tinyserve::http::connection::{Connection, HandlerContext};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let ctx = Arc::new(HandlerContext::from_config(&Config::default()));
//!     let listener = TcpListener::bind("127.0.0.1:9999").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let ctx = ctx.clone();
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, ctx).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
