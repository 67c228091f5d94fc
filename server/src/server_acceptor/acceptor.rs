use axum::Router;
use colored::Color;
use common::logger::Logger;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;

/// Binds the HTTP listener and serves the router until Ctrl-C or SIGTERM.
pub struct Acceptor {
    pub addr: SocketAddr,
    pub router: Router,
    pub logger: Logger,
}

impl Acceptor {
    pub fn new(addr: SocketAddr, router: Router) -> Self {
        Self {
            addr,
            router,
            logger: Logger::new("Acceptor", Color::Cyan),
        }
    }

    pub async fn start(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        self.logger
            .info(format!("Acceptor started, listening on {}", self.addr));

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(self.logger.clone()))
            .await?;

        self.logger.info("Acceptor stopped");
        Ok(())
    }
}

async fn shutdown_signal(logger: Logger) {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => logger.info("Received Ctrl+C, shutting down"),
            Err(e) => {
                logger.error(format!("Failed to listen for Ctrl+C: {e}"));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                logger.info("Received terminate signal, shutting down");
            }
            Err(e) => {
                logger.error(format!("Failed to install terminate handler: {e}"));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
