use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, Instrument};

use crate::config::Config;
use crate::http::connection::{Connection, HandlerContext};

/// Binds the configured address and serves until the process stops.
///
/// Only a bind failure is returned; accept failures are logged and the
/// loop carries on.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.server.listen_addr).await?;
    let ctx = Arc::new(HandlerContext::from_config(cfg));
    serve(listener, ctx).await;
    Ok(())
}

pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to listen on {}", addr))?;
    info!("Listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Accepts connections forever, handing each one to its own task.
pub async fn serve(listener: TcpListener, ctx: Arc<HandlerContext>) {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Error when accepting: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let ctx = ctx.clone();
        let span = tracing::info_span!("conn", %peer);
        tokio::spawn(
            async move {
                if let Err(e) = Connection::new(socket, ctx).run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
            }
            .instrument(span),
        );
    }
}
