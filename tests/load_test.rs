//! Concurrency test: independent requests are forwarded independently.

use std::time::Duration;

mod common;

use common::{client, spawn_proxy, start_programmable_upstream, test_config};

#[tokio::test]
async fn test_concurrent_requests_each_forward_once() {
    let (upstream, recorded) = start_programmable_upstream(|target| async move {
        // Hold each reply briefly so requests overlap at the proxy.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let page = target
            .split('&')
            .find_map(|pair| pair.strip_prefix("page="))
            .unwrap_or("?")
            .to_string();
        (200, format!(r#"{{"page":"{page}"}}"#))
    })
    .await;
    let (proxy, _shutdown) = spawn_proxy(test_config(upstream)).await;

    let client = client();
    let mut handles = Vec::new();
    for page in 1..=20u32 {
        let client = client.clone();
        let route = if page % 2 == 0 { "newsapi" } else { "gnews" };
        handles.push(tokio::spawn(async move {
            let res = client
                .get(format!("http://{proxy}/api/{route}?page={page}"))
                .send()
                .await
                .unwrap();
            (page, res.status(), res.text().await.unwrap())
        }));
    }

    for handle in handles {
        let (page, status, body) = handle.await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, format!(r#"{{"page":"{page}"}}"#));
    }

    assert_eq!(recorded.count(), 20);
}
