use feedbacksense_core::{
    AnalysisResult, BatchAnalysisResult, FeedbackItem, Persistence, Priority, Sentiment,
    ThemeGroup, API_KEY_VARS, MODEL_VAR,
};
use feedbacksense_store::{JsonFileStore, DATA_DIR_VAR};
use std::path::Path;
use std::process::{Command, Output};

pub fn sample_item(id: &str, sentiment: Sentiment, priority: Priority) -> FeedbackItem {
    FeedbackItem::with_identity(
        id.to_string(),
        format!("Feedback text for {}", id),
        1_718_000_000_000,
        "Manual Entry".to_string(),
        AnalysisResult {
            sentiment,
            pain_point: format!("Pain point {}", id),
            feature_request: format!("Request {}", id),
            priority,
            summary: format!("Summary {}", id),
            tags: vec!["bug".to_string(), id.to_string()],
        },
    )
}

pub fn sample_report() -> BatchAnalysisResult {
    BatchAnalysisResult {
        sentiment_trend_analysis: "Sentiment is declining over the week.".to_string(),
        top_themes: vec![ThemeGroup {
            theme_name: "Stability".to_string(),
            count: 2,
            description: "Crashes during uploads".to_string(),
        }],
    }
}

/// Write items (and optionally a report) as the CLI would persist them
pub fn seed(dir: &Path, items: &[FeedbackItem], report: Option<&BatchAnalysisResult>) {
    let store = JsonFileStore::new(dir);
    store.save_items(items).unwrap();
    store.save_report(report).unwrap();
}

/// Run the binary against `dir` with no API key in the environment
pub fn feedbacksense(dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_feedbacksense"));
    cmd.args(args).env(DATA_DIR_VAR, dir).env_remove(MODEL_VAR);
    for var in API_KEY_VARS {
        cmd.env_remove(var);
    }
    cmd.output().unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

const PROXY_VARS: [&str; 6] = [
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Local stand-in for the model endpoint that answers one request with `analysis`
pub fn model_stub(analysis: serde_json::Value) -> (String, std::thread::JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();

    let handle = std::thread::spawn(move || {
        let request = match server.recv_timeout(std::time::Duration::from_secs(15)) {
            Ok(Some(request)) => request,
            _ => return,
        };
        let body = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": analysis.to_string() }] } }]
        });
        let response = tiny_http::Response::from_string(body.to_string()).with_header(
            "Content-Type: application/json"
                .parse::<tiny_http::Header>()
                .unwrap(),
        );
        request.respond(response).unwrap();
    });

    (format!("http://127.0.0.1:{}/v1beta", port), handle)
}

/// Run the binary with an API key and `api_base` pointed at a local endpoint
pub fn feedbacksense_against(dir: &Path, api_base: &str, args: &[&str]) -> Output {
    std::fs::write(
        dir.join("config.json"),
        serde_json::json!({ "api_base": api_base, "request_timeout_secs": 10 }).to_string(),
    )
    .unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_feedbacksense"));
    cmd.args(args)
        .env(DATA_DIR_VAR, dir)
        .env_remove(MODEL_VAR)
        .env(API_KEY_VARS[0], "test-key");
    for var in PROXY_VARS {
        cmd.env_remove(var);
    }
    cmd.output().unwrap()
}
