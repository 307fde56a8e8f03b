use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::{Client, Response, StatusCode};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

use yardlog::config::Config;

/// A running test server instance with a dedicated temp data directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub data_dir: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> Response {
        let mut req = self.client.post(self.url(path)).form(fields);
        if let Some(cookie) = cookie {
            req = req.header("cookie", cookie);
        }
        req.send().await.expect("post request failed")
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response {
        let mut req = self.client.get(self.url(path));
        if let Some(cookie) = cookie {
            req = req.header("cookie", cookie);
        }
        req.send().await.expect("get request failed")
    }

    pub async fn register(&self, company: &str, username: &str, password: &str) -> Response {
        self.post_form(
            "/register",
            &[
                ("company", company),
                ("username", username),
                ("password", password),
            ],
            None,
        )
        .await
    }

    pub async fn login(&self, company: &str, username: &str, password: &str) -> Response {
        self.post_form(
            "/login",
            &[
                ("company", company),
                ("username", username),
                ("password", password),
            ],
            None,
        )
        .await
    }

    /// Register a company owner, asserting success, and return the session
    /// cookie.
    pub async fn register_ok(&self, company: &str, username: &str, password: &str) -> String {
        let resp = self.register(company, username, password).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "register failed");
        session_cookie(&resp).expect("register set no session cookie")
    }

    /// Login, asserting success, and return the session cookie.
    pub async fn login_ok(&self, company: &str, username: &str, password: &str) -> String {
        let resp = self.login(company, username, password).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "login failed");
        session_cookie(&resp).expect("login set no session cookie")
    }

    /// Open a company store directly for state assertions. Foreign keys are
    /// deliberately left at SQLite's default (off) so tests can poke rows
    /// the application never would.
    pub async fn open_store(&self, company: &str) -> SqlitePool {
        let options =
            SqliteConnectOptions::new().filename(self.data_dir.join(format!("{company}.db")));
        SqlitePool::connect_with(options)
            .await
            .expect("failed to open company store")
    }
}

/// Extract the `session=...` pair from a response's Set-Cookie header.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get(reqwest::header::SET_COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .next()
        .map(str::to_string)
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn font_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts/Vazirmatn-Regular.ttf")
}

/// Spawn a test app with a fresh temporary data directory.
pub async fn spawn_app() -> TestApp {
    let data_dir = std::env::temp_dir().join(format!("yardlog_test_{}", Uuid::now_v7().simple()));

    let config = Config {
        data_dir: data_dir.clone(),
        jwt_secret: "test-jwt-secret-that-is-long-enough".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        session_ttl_minutes: 60,
        font_path: font_path(),
        log_level: "warn".to_string(),
    };

    let state = yardlog::build_state(config);
    let app = yardlog::build_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        data_dir,
    }
}

/// Remove the test data directory after tests complete.
pub async fn cleanup(app: TestApp) {
    let _ = tokio::fs::remove_dir_all(&app.data_dir).await;
}
