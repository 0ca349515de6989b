//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use news_proxy::config::{ApiKey, NewsProxyConfig};
use news_proxy::HttpServer;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[allow(dead_code)]
pub const NEWSAPI_KEY: &str = "test-newsapi-key";
#[allow(dead_code)]
pub const GNEWS_KEY: &str = "test-gnews-key";

/// Request targets (path + query) seen by a mock upstream, in arrival order.
#[derive(Clone, Default)]
pub struct Recorded(Arc<Mutex<Vec<String>>>);

#[allow(dead_code)]
impl Recorded {
    pub fn targets(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    /// Query pairs of the only recorded request.
    pub fn single_query(&self) -> Vec<(String, String)> {
        let targets = self.targets();
        assert_eq!(targets.len(), 1, "expected exactly one upstream call: {targets:?}");
        let url = url::Url::parse(&format!("http://upstream{}", targets[0])).unwrap();
        url.query()
            .unwrap_or_default()
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// Start a mock upstream that answers every request with a fixed status and body.
#[allow(dead_code)]
pub async fn start_mock_upstream(status: u16, body: &'static str) -> (SocketAddr, Recorded) {
    start_programmable_upstream(move |_| async move { (status, body.to_string()) }).await
}

/// Start a programmable mock upstream. `f` receives the request target.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> (SocketAddr, Recorded)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded = Recorded::default();
    let seen = recorded.clone();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            let seen = seen.clone();
            tokio::spawn(async move {
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&head);
                let target = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                seen.0.lock().unwrap().push(target.clone());

                let (status, body) = f(target).await;
                let response = format!(
                    "HTTP/1.1 {status} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, recorded)
}

/// Config pointing both providers at `upstream`, with test keys.
pub fn test_config(upstream: SocketAddr) -> NewsProxyConfig {
    let mut config = NewsProxyConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.providers.newsapi.base_url = format!("http://{upstream}/v2/everything");
    config.providers.newsapi.api_key = ApiKey::new(NEWSAPI_KEY);
    config.providers.gnews.base_url = format!("http://{upstream}/api/v4/search");
    config.providers.gnews.api_key = ApiKey::new(GNEWS_KEY);
    config
}

/// Start the proxy on an ephemeral port. The proxy shuts down when the
/// returned sender is used or dropped.
pub async fn spawn_proxy(config: NewsProxyConfig) -> (SocketAddr, oneshot::Sender<()>) {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let _ = server
            .run(listener, async move {
                let _ = rx.await;
            })
            .await;
    });

    (addr, tx)
}

/// A client that never reuses connections between tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
