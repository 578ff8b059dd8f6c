//! Team members listing: the cached page plus the command that fetches it.
//!
//! The UI derives a [`TeamMembersKey`] from the URL every frame and calls
//! [`request_team_members`]. A changed key stores the new input and dispatches
//! [`FetchTeamMembersCommand`]. Older dispatches are superseded, so only the
//! latest key can change the cached page.

use log::{debug, info, warn};
use quire_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, State,
    StateCtx,
};

use crate::BusinessConfig;
use crate::api;
use crate::search_params::SearchParams;
use crate::teams::{PageResult, TeamMember};

/// Rows shown while the first page is loading.
pub const SKELETON_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamMembersKey {
    pub team_id: u64,
    pub query: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

impl TeamMembersKey {
    pub fn new(team_id: u64, params: &SearchParams) -> Self {
        Self {
            team_id,
            query: params.query.clone(),
            page: params.page,
            per_page: params.per_page,
        }
    }
}

/// Key of the most recent request, written by the UI.
#[derive(Debug, Clone, Default)]
pub struct TeamMembersInput {
    pub key: Option<TeamMembersKey>,
}

impl State for TeamMembersInput {}

impl TeamMembersInput {
    /// Forget the last key so the next frame fetches again.
    pub fn invalidate(&mut self) {
        self.key = None;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TeamMembersStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct TeamMembersCompute {
    pub requested: Option<TeamMembersKey>,
    /// Last page that loaded successfully; kept while a newer one loads.
    pub data: Option<PageResult<TeamMember>>,
    pub status: TeamMembersStatus,
}

impl State for TeamMembersCompute {}
impl Compute for TeamMembersCompute {}

/// What the table body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembersBody<'a> {
    Error,
    Skeleton(usize),
    Rows(&'a [TeamMember]),
}

impl TeamMembersCompute {
    /// Nothing has loaded yet and nothing failed.
    ///
    /// The table requests a page before it first renders the body, so a
    /// compute without data is always waiting on a fetch. This also covers the
    /// frame between the dispatch and the command publishing `Loading`.
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && !self.is_loading_error()
    }

    pub fn is_loading_error(&self) -> bool {
        matches!(self.status, TeamMembersStatus::Error(_))
    }

    /// Rows on screen belong to another key than `key`, or a fetch is running.
    pub fn is_refreshing(&self, key: &TeamMembersKey) -> bool {
        self.data.is_some()
            && (self.status == TeamMembersStatus::Loading || self.requested.as_ref() != Some(key))
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            TeamMembersStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The page to paginate with; an empty first page until data arrives.
    pub fn page(&self) -> PageResult<TeamMember> {
        self.data.clone().unwrap_or_default()
    }

    pub fn body(&self) -> MembersBody<'_> {
        if self.is_loading_error() {
            return MembersBody::Error;
        }
        match &self.data {
            Some(page) => {
                let visible = page.data.len().min(page.per_page as usize);
                MembersBody::Rows(&page.data[..visible])
            }
            None => MembersBody::Skeleton(SKELETON_ROWS),
        }
    }
}

/// Stores `key` and dispatches a fetch when it differs from the last request.
///
/// Returns whether a fetch was dispatched.
pub fn request_team_members(ctx: &mut StateCtx, key: TeamMembersKey) -> bool {
    if ctx.state::<TeamMembersInput>().key.as_ref() == Some(&key) {
        return false;
    }
    debug!("Requesting team members for {key:?}");
    ctx.update::<TeamMembersInput>(|input| input.key = Some(key));
    ctx.dispatch::<FetchTeamMembersCommand>();
    true
}

#[derive(Debug, Default)]
pub struct FetchTeamMembersCommand;

impl Command for FetchTeamMembersCommand {
    fn run(
        &self,
        snap: CommandSnapshot<'_>,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let key = snap.state::<TeamMembersInput>().key.clone();
        let api_url = snap.state::<BusinessConfig>().api_url();
        let previous = snap
            .cached::<TeamMembersCompute>()
            .and_then(|compute| compute.data.clone());

        Box::pin(async move {
            let Some(key) = key else {
                debug!("FetchTeamMembersCommand: no key requested, skipping");
                return;
            };

            updater.set(TeamMembersCompute {
                requested: Some(key.clone()),
                data: previous.clone(),
                status: TeamMembersStatus::Loading,
            });

            info!("Fetching team members for team {} page {}", key.team_id, key.page);
            let result = api::find_team_members(
                &api_url,
                key.team_id,
                key.query.as_deref(),
                Some(key.page),
                Some(key.per_page),
            )
            .await;

            match result {
                Ok(page) => {
                    info!(
                        "Loaded {} team members (page {} of {})",
                        page.data.len(),
                        page.current_page,
                        page.total_pages
                    );
                    updater.set(TeamMembersCompute {
                        requested: Some(key),
                        data: Some(page),
                        status: TeamMembersStatus::Loaded,
                    });
                }
                Err(err) => {
                    warn!("Failed to load team members: {err}");
                    updater.set(TeamMembersCompute {
                        requested: Some(key),
                        data: previous,
                        status: TeamMembersStatus::Error(err.to_string()),
                    });
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::TeamMemberRole;
    use crate::teams::fixtures::member;

    fn page_of(count: u64, per_page: u32) -> PageResult<TeamMember> {
        PageResult {
            data: (1..=count)
                .map(|id| member(id, None, "m@example.com", TeamMemberRole::Member))
                .collect(),
            per_page,
            current_page: 1,
            total_pages: 1,
        }
    }

    #[test]
    fn first_load_shows_three_skeleton_rows() {
        let compute = TeamMembersCompute {
            status: TeamMembersStatus::Loading,
            ..Default::default()
        };

        assert!(compute.is_loading());
        assert_eq!(compute.body(), MembersBody::Skeleton(3));
    }

    #[test]
    fn refetch_keeps_previous_rows() {
        let compute = TeamMembersCompute {
            data: Some(page_of(2, 10)),
            status: TeamMembersStatus::Loading,
            ..Default::default()
        };

        assert!(!compute.is_loading());
        assert!(matches!(compute.body(), MembersBody::Rows(rows) if rows.len() == 2));
    }

    #[test]
    fn error_replaces_rows() {
        let compute = TeamMembersCompute {
            data: Some(page_of(2, 10)),
            status: TeamMembersStatus::Error("boom".to_string()),
            ..Default::default()
        };

        assert!(compute.is_loading_error());
        assert_eq!(compute.body(), MembersBody::Error);
    }

    #[test]
    fn rows_never_exceed_per_page() {
        let compute = TeamMembersCompute {
            data: Some(page_of(12, 10)),
            status: TeamMembersStatus::Loaded,
            ..Default::default()
        };

        assert!(matches!(compute.body(), MembersBody::Rows(rows) if rows.len() == 10));
    }

    #[test]
    fn empty_result_is_not_a_skeleton() {
        let compute = TeamMembersCompute {
            data: Some(page_of(0, 10)),
            status: TeamMembersStatus::Loaded,
            ..Default::default()
        };

        assert_eq!(compute.body(), MembersBody::Rows(&[]));
    }

    #[test]
    fn rows_of_another_key_are_refreshing() {
        let key = |page| TeamMembersKey {
            team_id: 7,
            query: None,
            page,
            per_page: 10,
        };
        let compute = TeamMembersCompute {
            requested: Some(key(1)),
            data: Some(page_of(2, 10)),
            status: TeamMembersStatus::Loaded,
        };

        assert!(!compute.is_refreshing(&key(1)));
        assert!(compute.is_refreshing(&key(2)));
        assert!(!TeamMembersCompute::default().is_refreshing(&key(1)));
    }

    #[test]
    fn page_defaults_before_data() {
        let page = TeamMembersCompute::default().page();
        assert_eq!((page.per_page, page.current_page, page.total_pages), (10, 1, 1));
        assert!(page.data.is_empty());
    }
}
