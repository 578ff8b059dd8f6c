//! Mock-server backed `StateCtx` for command tests.

use std::time::Duration;

use quire_states::StateCtx;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::teams::fixtures;
use crate::{BusinessConfig, Location, TeamMember, TeamMemberRole, register_states};

pub const TEAM_ID: u64 = 7;

pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let config = BusinessConfig {
            team_id: TEAM_ID,
            ..BusinessConfig::new(mock_server.uri())
        };

        let mut ctx = StateCtx::new();
        register_states(&mut ctx, config, Location::parse("/t/paperwork/settings/members"));

        Self { mock_server, ctx }
    }

    /// Sync, flush queued commands, then await every task, syncing as each ends.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();

        while self.ctx.task_count() > 0 {
            assert!(
                start.elapsed() < timeout,
                "Timed out waiting for pending tasks ({} still in JoinSet)",
                self.ctx.task_count()
            );
            if self.ctx.task_set_mut().join_next().await.is_some() {
                self.ctx.sync_computes();
            }
        }

        self.ctx.sync_computes();
    }

    pub async fn mock_members(&self, members: Vec<TeamMember>, current_page: u32, total_pages: u32) {
        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": members,
            "perPage": 10,
            "currentPage": current_page,
            "totalPages": total_pages,
        }));

        Mock::given(method("GET"))
            .and(path(format!("/api/team/{TEAM_ID}/members")))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_members_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/api/team/{TEAM_ID}/members")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_team(&self, owner_user_id: u64, acting: TeamMemberRole) {
        let team = fixtures::team(owner_user_id, acting);
        Mock::given(method("GET"))
            .and(path(format!("/api/team/{TEAM_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(team))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_member_mutation(&self, http_method: &str, member_id: u64, status: u16) {
        Mock::given(method(http_method))
            .and(path(format!("/api/team/{TEAM_ID}/members/{member_id}")))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_feature_flags(&self, payload: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/feature-flag/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "payload": payload
            })))
            .mount(&self.mock_server)
            .await;
    }
}
