// Connection handling module
// Accepts one TCP connection and serves it with the site handler

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::sync::watch;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection unless `performance.max_connections` is reached
///
/// `closing` flips to `true` when the server stops accepting; the connection
/// then finishes its current request and closes.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
    closing: watch::Receiver<bool>,
) {
    // Increment first, then check the limit, so racing accepts cannot both pass
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
            ));
            drop(stream);
            return;
        }
    }

    logger::log_connection_accepted(&peer_addr);

    handle_connection(
        stream,
        peer_addr,
        Arc::clone(state),
        Arc::clone(conn_counter),
        closing,
    );
}

/// Serve one connection on the local task set.
///
/// HTTP/1.1 with keep-alive when `performance.keep_alive_timeout` is non-zero;
/// the whole connection is bounded by the larger of the read and write
/// timeouts. Idle keep-alive connections close as soon as `closing` is set.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
    mut closing: watch::Receiver<bool>,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let timeout_duration = std::time::Duration::from_secs(std::cmp::max(
            performance.read_timeout,
            performance.write_timeout,
        ));

        let mut builder = http1::Builder::new();
        builder.keep_alive(performance.keep_alive_timeout > 0);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                handler::handle_request(req, Arc::clone(&service_state), Some(peer_addr))
            }),
        );
        tokio::pin!(conn);

        let served = async {
            tokio::select! {
                result = conn.as_mut() => result,
                _ = closing.wait_for(|closed| *closed) => {
                    conn.as_mut().graceful_shutdown();
                    conn.as_mut().await
                }
            }
        };

        match tokio::time::timeout(timeout_duration, served).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
