use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::files::{FileResolver, ResolvedFile};
use crate::http::mime::MimeTable;
use crate::http::parser::{read_request_line, skip_headers, ParseError};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// Read-only state shared by every connection of one server.
#[derive(Debug)]
pub struct HandlerContext {
    pub resolver: FileResolver,
    pub mime: MimeTable,
}

impl HandlerContext {
    pub fn new(resolver: FileResolver, mime: MimeTable) -> Self {
        Self { resolver, mime }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            resolver: FileResolver::new(cfg.static_files.clone()),
            mime: MimeTable::with_extra(&cfg.mime.extra),
        }
    }
}

/// Handles exactly one request on an accepted stream, then closes it.
pub struct Connection<S> {
    stream: BufReader<S>,
    ctx: Arc<HandlerContext>,
}

pub enum ConnectionState {
    ReadingRequestLine,
    ReadingHeaders(Request),
    ResolvingFile(Request),
    ResolvingContentType(Request, ResolvedFile),
    WritingResponse(Request, ResponseWriter),
    Closed(Outcome),
}

/// How a connection ended.
#[derive(Debug)]
pub enum Outcome {
    /// A response with this status was written.
    Responded(StatusCode),
    /// Closed without writing anything.
    Aborted(AbortReason),
}

#[derive(Debug)]
pub enum AbortReason {
    RequestLine(ParseError),
    UnknownContentType { path: PathBuf },
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, ctx: Arc<HandlerContext>) -> Self {
        Self {
            stream: BufReader::new(stream),
            ctx,
        }
    }

    /// Drives the state machine to completion and closes the stream.
    ///
    /// The stream is shut down once whether or not a response was written.
    /// An error is returned only when writing the response fails.
    pub async fn run(mut self) -> anyhow::Result<Outcome> {
        let result = self.drive().await;

        if let Err(e) = self.stream.get_mut().shutdown().await {
            debug!(error = %e, "Shutdown after response failed");
        }

        result
    }

    async fn drive(&mut self) -> anyhow::Result<Outcome> {
        let mut state = ConnectionState::ReadingRequestLine;

        loop {
            state = match state {
                ConnectionState::ReadingRequestLine => {
                    match read_request_line(&mut self.stream).await {
                        Ok(req) => ConnectionState::ReadingHeaders(req),
                        Err(e) => {
                            warn!(error = %e, "Dropping connection");
                            ConnectionState::Closed(Outcome::Aborted(AbortReason::RequestLine(e)))
                        }
                    }
                }

                ConnectionState::ReadingHeaders(req) => {
                    let skipped = skip_headers(&mut self.stream).await;
                    debug!(headers = skipped, "Discarded request headers");
                    ConnectionState::ResolvingFile(req)
                }

                ConnectionState::ResolvingFile(req) => {
                    match self.ctx.resolver.load(&req).await {
                        Ok(file) => ConnectionState::ResolvingContentType(req, file),
                        Err(e) => {
                            debug!(error = %e, "Answering 404");
                            ConnectionState::WritingResponse(
                                req,
                                ResponseWriter::new(Response::not_found()),
                            )
                        }
                    }
                }

                ConnectionState::ResolvingContentType(req, file) => {
                    match self.ctx.mime.content_type_for(&file.path) {
                        Some(content_type) => {
                            let response = Response::ok(content_type, file.content);
                            ConnectionState::WritingResponse(req, ResponseWriter::new(response))
                        }
                        None => {
                            // Unregistered extension: close without any response.
                            warn!(path = %file.path.display(), "No content type for file, closing");
                            ConnectionState::Closed(Outcome::Aborted(
                                AbortReason::UnknownContentType { path: file.path },
                            ))
                        }
                    }
                }

                ConnectionState::WritingResponse(req, writer) => {
                    writer.write_to_stream(self.stream.get_mut()).await?;

                    let status = writer.response().status;
                    info!(
                        method = req.method.as_str(),
                        path = %req.path_lossy(),
                        status = status.as_u16(),
                        length = writer.response().content_length(),
                        "Response sent"
                    );
                    ConnectionState::Closed(Outcome::Responded(status))
                }

                ConnectionState::Closed(outcome) => return Ok(outcome),
            };
        }
    }
}
