//! Mock backend helpers shared by unit tests

use axum::Router;

use crate::http::HttpClient;

/// Serve `app` on an ephemeral loopback port and return its base URL
pub async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://{addr}")
}

pub fn backend_client(base_url: &str) -> HttpClient {
    HttpClient::with_timeout(5)
        .expect("http client")
        .base_url(base_url)
}
