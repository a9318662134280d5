//! Process wiring: arena, scheduler and gateway.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::arena::Arena;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::gateway::{build_router, AppState};
use crate::scheduler::RegenScheduler;

/// Run the game server until `shutdown` resolves.
///
/// Starts the regeneration scheduler, then serves HTTP and WebSocket
/// traffic. On shutdown the scheduler is cancelled and awaited.
pub async fn run<F>(config: ServerConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate()?;

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.listen_addr.clone(),
            source,
        })?;
    serve(listener, config, shutdown).await
}

/// Like [`run`], on an already bound listener.
pub async fn serve<F>(
    listener: TcpListener,
    config: ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate()?;

    let arena = Arc::new(Arena::new(config.broadcast_capacity));
    let cancel = CancellationToken::new();
    let scheduler =
        RegenScheduler::new(arena.clone(), config.regen_interval, cancel.clone()).spawn();

    let app = build_router(Arc::new(AppState::new(arena)));
    info!(addr = %listener.local_addr()?, "listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    cancel.cancel();
    // The scheduler only returns after cancellation; a join error means it panicked.
    if let Err(err) = scheduler.await {
        tracing::error!(error = %err, "regeneration task failed");
    }
    info!("server stopped");
    served.map_err(ServerError::from)
}
