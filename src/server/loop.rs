// Server loop module
// Accepts connections until the shutdown signal fires

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::{watch, Notify};

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// How long in-flight connections get after the listener closes
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);
const DRAIN_POLL: Duration = Duration::from_millis(50);

/// Run the accept loop on the current `LocalSet`.
///
/// Returns once `shutdown` is notified and in-flight connections have
/// drained, or the drain timeout has passed. Open connections are told to
/// close once their current request is answered.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
) {
    let (closing, closing_rx) = watch::channel(false);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            closing_rx.clone(),
                        );
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }
            () = shutdown.notified() => break,
        }
    }

    drop(listener);
    logger::log_shutdown();
    closing.send_replace(true);
    drain(&active_connections).await;
}

async fn drain(active_connections: &AtomicUsize) {
    let deadline = tokio::time::Instant::now() + DRAIN_TIMEOUT;
    while active_connections.load(Ordering::SeqCst) > 0 {
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "{} connections still open after drain timeout",
                active_connections.load(Ordering::SeqCst)
            ));
            return;
        }
        tokio::time::sleep(DRAIN_POLL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_reusable_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn state() -> Arc<AppState> {
        let mut cfg = Config::defaults().unwrap();
        cfg.site.static_dir = "/nonexistent-static-dir".to_string();
        cfg.logging.access_log = false;
        Arc::new(AppState::new(&cfg).unwrap())
    }

    #[tokio::test]
    async fn test_serves_and_stops_on_shutdown() {
        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let server = tokio::task::spawn_local(start_server_loop(
                    listener,
                    state(),
                    Arc::new(AtomicUsize::new(0)),
                    Arc::clone(&shutdown),
                ));

                let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
                stream
                    .write_all(b"GET /healthz HTTP/1.1\r\nHost: x\r\nConnection: close\r\n\r\n")
                    .await
                    .unwrap();
                let mut raw = Vec::new();
                stream.read_to_end(&mut raw).await.unwrap();
                let text = String::from_utf8_lossy(&raw);
                assert!(text.starts_with("HTTP/1.1 200 OK"));
                assert!(text.contains("x-frame-options: DENY"));
                assert!(text.ends_with("ok"));

                shutdown.notify_one();
                server.await.unwrap();
            })
            .await;
    }

    #[tokio::test]
    async fn test_idle_keep_alive_closes_on_shutdown() {
        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());
        let active = Arc::new(AtomicUsize::new(0));

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let server = tokio::task::spawn_local(start_server_loop(
                    listener,
                    state(),
                    Arc::clone(&active),
                    Arc::clone(&shutdown),
                ));

                // one request, then leave the connection open and idle
                let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
                stream
                    .write_all(b"GET /healthz HTTP/1.1\r\nHost: x\r\n\r\n")
                    .await
                    .unwrap();
                let mut raw = Vec::new();
                let mut buf = [0u8; 1024];
                while !raw.ends_with(b"ok") {
                    let n = stream.read(&mut buf).await.unwrap();
                    assert!(n > 0, "connection closed before the response");
                    raw.extend_from_slice(&buf[..n]);
                }
                assert_eq!(active.load(Ordering::SeqCst), 1);

                let started = tokio::time::Instant::now();
                shutdown.notify_one();
                server.await.unwrap();
                assert!(started.elapsed() < DRAIN_TIMEOUT / 2);
                assert_eq!(active.load(Ordering::SeqCst), 0);

                // the server side hung up
                assert_eq!(stream.read(&mut buf).await.unwrap(), 0);
            })
            .await;
    }
}
