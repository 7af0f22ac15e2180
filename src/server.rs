//! Server Module
//!
//! An explicit server handle: the bound listener plus the router, built once
//! at startup and handed to whoever drives it.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::create_router;
use crate::config::Config;

/// A bound, not yet running, calculator server.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Binds `0.0.0.0:<config.server_port>` and builds the router.
    pub async fn bind(config: &Config) -> io::Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
        let listener = TcpListener::bind(addr).await?;

        Ok(Self {
            listener,
            router: create_router(config),
        })
    }

    /// Address actually bound, useful when the configured port was 0.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until `shutdown` resolves, then drains in-flight
    /// connections.
    pub async fn run_until<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Server listening on http://{}", self.local_addr()?);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
