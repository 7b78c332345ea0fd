// Signal handling module
//
// SIGTERM and SIGINT (Ctrl+C) stop the accept loop; in-flight connections
// are allowed to finish.

use std::sync::Arc;

use tokio::sync::Notify;

use crate::logger;

/// Signal handler state
pub struct SignalHandler {
    /// Fired once on SIGTERM or SIGINT
    pub shutdown: Arc<Notify>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }

    fn trigger(&self, signal_name: &str) {
        logger::log_info(&format!("{signal_name} received, shutting down"));
        // notify_one stores a permit in case the loop is between polls
        self.shutdown.notify_one();
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn the background task that waits for termination signals
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(term), Ok(int)) => (term, int),
                (Err(e), _) | (_, Err(e)) => {
                    logger::log_error(&format!("Failed to register signal handlers: {e}"));
                    return;
                }
            };
        logger::log_debug(&format!(
            "Signal handlers registered, process id {}",
            std::process::id()
        ));

        tokio::select! {
            _ = sigterm.recv() => handler.trigger("SIGTERM"),
            _ = sigint.recv() => handler.trigger("SIGINT"),
        }
    });
}

/// Non-Unix fallback, only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => handler.trigger("Ctrl+C"),
            Err(e) => logger::log_error(&format!("Failed to listen for Ctrl+C: {e}")),
        }
    });
}
