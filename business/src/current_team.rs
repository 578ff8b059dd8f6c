use log::{info, warn};
use quire_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, State,
};

use crate::BusinessConfig;
use crate::api;
use crate::teams::Team;

/// The team whose settings are open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CurrentTeamCompute {
    #[default]
    Idle,
    Loading,
    Loaded(Team),
    Error(String),
}

impl State for CurrentTeamCompute {}
impl Compute for CurrentTeamCompute {}

impl CurrentTeamCompute {
    pub fn team(&self) -> Option<&Team> {
        match self {
            Self::Loaded(team) => Some(team),
            _ => None,
        }
    }
}

/// Loads `BusinessConfig::team_id`.
#[derive(Debug, Default)]
pub struct FetchCurrentTeamCommand;

impl Command for FetchCurrentTeamCommand {
    fn run(
        &self,
        snap: CommandSnapshot<'_>,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let config = snap.state::<BusinessConfig>();
        let api_url = config.api_url();
        let team_id = config.team_id;

        Box::pin(async move {
            updater.set(CurrentTeamCompute::Loading);

            match api::get_team(&api_url, team_id).await {
                Ok(team) => {
                    info!("Loaded team {} ({})", team.id, team.url);
                    updater.set(CurrentTeamCompute::Loaded(team));
                }
                Err(err) => {
                    warn!("Failed to load team {team_id}: {err}");
                    updater.set(CurrentTeamCompute::Error(err.to_string()));
                }
            }
        })
    }
}
