//! Billing service runtime.
//!
//! [`ServerHandle`] owns the server lifecycle: storage, services, the REST
//! API and graceful shutdown. The binary and the integration tests both
//! start the service through it.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::storage::{InMemoryStorage, SeedData};
use crate::interfaces::{create_api_router, AppState};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

/// Handle to a running billing service
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    /// The configuration the server was started with
    pub config: AppConfig,
    /// Address the REST API is bound to
    pub local_addr: SocketAddr,

    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the service over a store whose plan table mirrors the catalog,
    /// loading `storage.seed_file` into it when one is configured
    pub async fn start(config: AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let storage = InMemoryStorage::with_catalog_plans();
        if let Some(path) = &config.storage.seed_file {
            info!("Loading seed data from {}", path.display());
            SeedData::load(path)?.apply(&storage).await?;
        }
        let repos: Arc<dyn RepositoryProvider> = Arc::new(storage);
        Self::start_with(config, repos).await
    }

    /// Start the service over an existing repository provider
    pub async fn start_with(
        config: AppConfig,
        repos: Arc<dyn RepositoryProvider>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Starting carrier billing service...");

        let shutdown = ShutdownCoordinator::new(config.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let api_router = create_api_router(AppState::new(repos.clone()));

        let listener = tokio::net::TcpListener::bind(config.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            shutdown_signal.wait().await;
            info!("REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            config,
            local_addr,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop, aborting it once the shutdown timeout
    /// elapses after the signal fired.
    pub async fn wait(mut self) {
        self.shutdown.signal().wait().await;
        info!("Waiting for in-flight requests to complete...");

        let task = &mut self.api_task;
        let drained = self
            .shutdown
            .drain(async {
                if let Err(e) = task.await {
                    error!("REST API server task panicked: {}", e);
                }
            })
            .await;

        if !drained {
            warn!("Aborting REST API server");
            self.api_task.abort();
        }

        info!("Carrier billing service shutdown complete");
    }

    /// Trigger shutdown and wait for completion
    pub async fn shutdown(self) {
        info!("Shutting down carrier billing service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Initialize tracing from the application config.
///
/// `RUST_LOG` takes precedence over `logging.level`.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
