use std::time::Duration;

use egui_kittest::Harness;
use quire_business::{BusinessConfig, Location};
use quire_ui::QuireApp;
use quire_ui::state::State;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEAM_ID: u64 = 7;
pub const OWNER_USER_ID: u64 = 10;

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

impl TestCtx<'static, QuireApp> {
    /// The whole app opened on `start`, backed by a mock server with the
    /// default team, members and flags.
    pub async fn new_app(start: &str) -> Self {
        let mock_server = MockServer::start().await;
        mock_defaults(&mock_server).await;
        Self::with_server(mock_server, start)
    }

    /// Like [`TestCtx::new_app`], for servers the test mocked itself.
    #[allow(unused)]
    pub fn with_server(mock_server: MockServer, start: &str) -> Self {
        let state = State::new(config(&mock_server), Location::parse(start));
        let app = QuireApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    /// Steps frames until `done` holds, giving the network time between them.
    pub async fn wait_until(&mut self, what: &str, done: impl Fn(&Harness<'static, QuireApp>) -> bool) {
        for _ in 0..50 {
            self.harness.step();
            if done(&self.harness) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        panic!("Timed out waiting for {what}");
    }
}

pub fn config(mock_server: &MockServer) -> BusinessConfig {
    BusinessConfig {
        team_id: TEAM_ID,
        ..BusinessConfig::new(mock_server.uri())
    }
}

pub fn member_json(user_id: u64, name: Option<&str>, email: &str, role: &str) -> serde_json::Value {
    json!({
        "id": user_id,
        "teamId": TEAM_ID,
        "userId": user_id,
        "role": role,
        "createdAt": "2024-01-15T12:00:00Z",
        "user": { "name": name, "email": email },
    })
}

pub fn page_json(members: Vec<serde_json::Value>, current_page: u32, total_pages: u32) -> serde_json::Value {
    json!({
        "data": members,
        "perPage": 10,
        "currentPage": current_page,
        "totalPages": total_pages,
    })
}

pub async fn mock_team(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/api/team/{TEAM_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": TEAM_ID,
            "name": "Paperwork",
            "url": "paperwork",
            "ownerUserId": OWNER_USER_ID,
            "currentTeamMember": { "role": "ADMIN" },
        })))
        .mount(mock_server)
        .await;
}

pub async fn mock_flags(mock_server: &MockServer, billing: bool) {
    Mock::given(method("GET"))
        .and(path("/api/feature-flag/all"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "payload": { "billing": billing } })),
        )
        .mount(mock_server)
        .await;
}

async fn mock_defaults(mock_server: &MockServer) {
    mock_team(mock_server).await;
    mock_flags(mock_server, true).await;

    Mock::given(method("GET"))
        .and(path(format!("/api/team/{TEAM_ID}/members")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![
                member_json(OWNER_USER_ID, Some("Olive Owner"), "olive@example.com", "ADMIN"),
                member_json(20, None, "zed@example.com", "MEMBER"),
            ],
            1,
            1,
        )))
        .mount(mock_server)
        .await;
}
