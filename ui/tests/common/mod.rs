use std::time::Duration;

use egui_kittest::Harness;
use sedir_ui::DirectoryApp;
use sedir_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, DirectoryApp>,
}

impl<'a> TestCtx<'a> {
    /// App against a mock API whose unfiltered list returns `names`.
    pub async fn new_app(names: &[&str]) -> Self {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param_is_missing("inname"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body(names)))
            .mount(&mock_server)
            .await;
        Self::with_server(mock_server)
    }

    /// App against a mock API that rejects every request with `status`.
    pub async fn new_failing_app(status: u16, message: &str) -> Self {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error_id": status,
                "error_message": message,
                "error_name": "test_failure"
            })))
            .mount(&mock_server)
            .await;
        Self::with_server(mock_server)
    }

    fn with_server(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = DirectoryApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);
        Self {
            mock_server,
            harness,
        }
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, DirectoryApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub async fn mount_search(&self, inname: &str, names: &[&str]) {
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("inname", inname))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body(names)))
            .mount(&self.mock_server)
            .await;
    }

    /// Steps frames until in-flight fetches have been applied.
    pub async fn settle(&mut self) {
        for _ in 0..50 {
            self.harness.step();
            if !self.harness.state().state().ctx.has_pending_tasks() {
                self.harness.step();
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}

pub fn users_body(names: &[&str]) -> Value {
    let items: Vec<_> = names
        .iter()
        .zip(1_u64..)
        .map(|(name, id)| {
            json!({
                "user_id": id,
                "display_name": name,
                "reputation": id * 1500,
                "location": format!("City {id}"),
                "creation_date": 1_609_804_800,
                "badge_counts": {"gold": 1, "silver": 2, "bronze": 3},
                "reputation_change_week": 7
            })
        })
        .collect();
    json!({
        "items": items,
        "has_more": false,
        "quota_max": 300,
        "quota_remaining": 299
    })
}
