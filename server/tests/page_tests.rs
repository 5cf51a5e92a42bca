use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use zoo_server::build_router;
use zoo_storage::AnimalStore;

/// Spin up the server over a throwaway public directory with marker pages.
async fn spawn_test_server() -> (String, TempDir) {
    let dir = TempDir::new().unwrap();
    let public = dir.path().join("public");
    fs::create_dir_all(public.join("assets/css")).unwrap();
    fs::write(public.join("index.html"), "<h1>index page</h1>").unwrap();
    fs::write(public.join("animals.html"), "<h1>animals page</h1>").unwrap();
    fs::write(public.join("zookeepers.html"), "<h1>zookeepers page</h1>").unwrap();
    fs::write(public.join("assets/css/style.css"), "body { margin: 0; }").unwrap();

    let store = Arc::new(AnimalStore::in_memory(Vec::new()));
    let app = build_router(store, &public);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://127.0.0.1:{}", port), dir)
}

async fn get_text(url: String) -> (u16, String) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.text().await.unwrap())
}

#[tokio::test]
async fn named_pages_are_served() {
    let (base, _dir) = spawn_test_server().await;

    for (path, marker) in [
        ("/", "index page"),
        ("/animals", "animals page"),
        ("/zookeepers", "zookeepers page"),
    ] {
        let (status, body) = get_text(format!("{}{}", base, path)).await;
        assert_eq!(status, 200, "{path}");
        assert!(body.contains(marker), "{path}: {body}");
    }
}

#[tokio::test]
async fn static_assets_are_served() {
    let (base, _dir) = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/assets/css/style.css", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.contains("text/css"));
}

#[tokio::test]
async fn unknown_route_falls_back_to_index() {
    let (base, _dir) = spawn_test_server().await;
    for path in ["/nowhere", "/api/v1/nonexistent"] {
        let (status, body) = get_text(format!("{}{}", base, path)).await;
        assert_eq!(status, 200, "{path}");
        assert!(body.contains("index page"), "{path}: {body}");
    }
}
