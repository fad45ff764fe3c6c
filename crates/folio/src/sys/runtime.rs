use crate::config;
use crate::events::AppEvent;
use crate::sys::server;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Builder;

pub fn start_background_services(tx: Sender<AppEvent>) {
    let spawned = thread::Builder::new()
        .name("folio-services".into())
        .spawn(move || {
            let rt = match Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("folio-worker")
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create Tokio runtime: {}", e);
                    return;
                }
            };

            rt.block_on(async move {
                tokio::spawn(server::run_server(tx.clone()));
                tokio::spawn(config::run_async_watcher(tx));
                std::future::pending::<()>().await;
            });
        });

    if let Err(e) = spawned {
        log::error!("Failed to start background services: {}", e);
    }
}
