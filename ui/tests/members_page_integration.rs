//! The members page against a mock server: loading, URL driven paging and
//! member removal.

mod common;

use kittest::Queryable;
use quire_business::{Location, MemberMutationCompute, MemberMutationStatus};
use quire_ui::widgets::members::state::MemberDialogs;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{TEAM_ID, TestCtx, member_json, mock_flags, mock_team, page_json};

const MEMBERS_PATH: &str = "/t/paperwork/settings/members";

#[tokio::test(flavor = "multi_thread")]
async fn members_load_with_owner_override() {
    let mut ctx = TestCtx::new_app(MEMBERS_PATH).await;

    ctx.wait_until("members to load", |harness| {
        harness.query_by_label("olive@example.com").is_some()
    })
    .await;

    let harness = ctx.harness();
    assert!(harness.query_by_label("Owner").is_some());
    assert!(harness.query_by_label("zed@example.com").is_some());
    assert!(harness.query_by_label("Z").is_some());
    assert!(harness.query_by_label("Showing 2 results.").is_some());
    assert!(harness.query_by_label("Page 1 of 1").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn page_comes_from_the_url() {
    let mock_server = MockServer::start().await;
    mock_team(&mock_server).await;
    mock_flags(&mock_server, false).await;
    Mock::given(method("GET"))
        .and(path(format!("/api/team/{TEAM_ID}/members")))
        .and(query_param("page", "2"))
        .and(query_param("perPage", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![member_json(30, Some("Pia Second"), "pia@example.com", "MANAGER")],
            2,
            2,
        )))
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::with_server(mock_server, &format!("{MEMBERS_PATH}?page=2&perPage=20"));

    ctx.wait_until("second page to load", |harness| {
        harness.query_by_label("pia@example.com").is_some()
    })
    .await;

    let harness = ctx.harness();
    assert!(harness.query_by_label("PS").is_some());
    assert!(harness.query_by_label("Page 2 of 2").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_listing_shows_error_banner() {
    let mock_server = MockServer::start().await;
    mock_team(&mock_server).await;
    mock_flags(&mock_server, false).await;
    Mock::given(method("GET"))
        .and(path(format!("/api/team/{TEAM_ID}/members")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::with_server(mock_server, MEMBERS_PATH);

    ctx.wait_until("error banner", |harness| {
        harness.query_by_label("Something went wrong").is_some()
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn removing_a_member_closes_dialog_and_refetches() {
    let mut ctx = TestCtx::new_app(MEMBERS_PATH).await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/team/{TEAM_ID}/members/20")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    ctx.wait_until("members to load", |harness| {
        harness.query_by_label("zed@example.com").is_some()
    })
    .await;

    // Row order follows the listing; the second row is the non-owner.
    {
        let harness = ctx.harness_mut();
        let menus: Vec<_> = harness.query_all_by_label("…").collect();
        assert_eq!(menus.len(), 2);
        menus[1].click();
        harness.step();
        harness.get_by_label("Remove").click();
        harness.step();
        harness.step();
    }

    ctx.wait_until("remove dialog", |harness| {
        harness.query_by_label("Are you sure?").is_some()
    })
    .await;
    ctx.harness_mut().get_by_label("Delete").click();

    ctx.wait_until("dialog to close", |harness| {
        harness.state().state().ctx.state::<MemberDialogs>().open.is_none()
    })
    .await;

    ctx.wait_until("mutation reset", |harness| {
        harness.state().state().ctx.compute::<MemberMutationCompute>().status
            == MemberMutationStatus::Idle
    })
    .await;

    // One listing on open, one after the removal invalidated it.
    let mut listings = 0;
    for _ in 0..50 {
        ctx.harness_mut().step();
        listings = member_listings(ctx.mock_server()).await;
        if listings >= 2 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    assert!(listings >= 2, "expected a refetch after removal, saw {listings} listings");

    let location = ctx.harness().state().state().ctx.state::<Location>().clone();
    assert_eq!(location.path, MEMBERS_PATH);
}

async fn member_listings(mock_server: &MockServer) -> usize {
    let members_path = format!("/api/team/{TEAM_ID}/members");
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.as_str() == "GET" && request.url.path() == members_path)
        .count()
}
