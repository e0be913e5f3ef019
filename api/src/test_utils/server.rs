//! Local HTTP servers for adapter tests

use axum::Router;

/// Serve `app` on an ephemeral localhost port.
///
/// Returns the base URL (`http://127.0.0.1:<port>`) and the server task;
/// abort the task when the test is done.
pub async fn spawn_test_server(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let address = listener.local_addr().expect("local addr should exist");
    let join_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });
    (format!("http://{address}"), join_handle)
}
