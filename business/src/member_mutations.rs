//! Role updates and removals issued from the member dialogs.
//!
//! Update, delete and reset all publish [`MemberMutationCompute`] and share
//! one command lane: a reset dispatched while a request is in flight cancels
//! it, so a late response can never overwrite the reset.

use std::any::TypeId;

use log::{info, warn};
use quire_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, State,
};

use crate::BusinessConfig;
use crate::api;
use crate::teams::TeamMemberRole;

/// Mutation the open dialog wants to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberMutation {
    UpdateRole {
        team_id: u64,
        member_id: u64,
        role: TeamMemberRole,
    },
    Remove {
        team_id: u64,
        member_id: u64,
    },
}

#[derive(Debug, Clone, Default)]
pub struct MemberMutationInput {
    pub mutation: Option<MemberMutation>,
}

impl State for MemberMutationInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MemberMutationStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberMutationCompute {
    pub mutation: Option<MemberMutation>,
    pub status: MemberMutationStatus,
}

impl State for MemberMutationCompute {}
impl Compute for MemberMutationCompute {}

/// Lane shared by every command writing [`MemberMutationCompute`].
fn mutation_lane() -> TypeId {
    TypeId::of::<MemberMutationCompute>()
}

impl MemberMutationCompute {
    pub fn is_in_flight(&self) -> bool {
        self.status == MemberMutationStatus::InFlight
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            MemberMutationStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

async fn perform(api_url: &str, mutation: &MemberMutation) -> api::ApiResult<()> {
    match *mutation {
        MemberMutation::UpdateRole {
            team_id,
            member_id,
            role,
        } => api::update_team_member(api_url, team_id, member_id, role).await,
        MemberMutation::Remove { team_id, member_id } => {
            api::delete_team_member(api_url, team_id, member_id).await
        }
    }
}

fn run_mutation(
    snap: CommandSnapshot<'_>,
    updater: LatestOnlyUpdater,
    accept: fn(&MemberMutation) -> bool,
) -> CommandFuture {
    let mutation = snap.state::<MemberMutationInput>().mutation.clone();
    let api_url = snap.state::<BusinessConfig>().api_url();

    Box::pin(async move {
        let Some(mutation) = mutation.filter(accept) else {
            warn!("Member mutation dispatched without a matching input");
            return;
        };

        updater.set(MemberMutationCompute {
            mutation: Some(mutation.clone()),
            status: MemberMutationStatus::InFlight,
        });

        let status = match perform(&api_url, &mutation).await {
            Ok(()) => {
                info!("Member mutation succeeded: {mutation:?}");
                MemberMutationStatus::Succeeded
            }
            Err(err) => {
                warn!("Member mutation failed: {err}");
                MemberMutationStatus::Failed(err.to_string())
            }
        };
        updater.set(MemberMutationCompute {
            mutation: Some(mutation),
            status,
        });
    })
}

/// POSTs the role held in `MemberMutationInput`.
#[derive(Debug, Default)]
pub struct UpdateTeamMemberCommand;

impl Command for UpdateTeamMemberCommand {
    fn run(
        &self,
        snap: CommandSnapshot<'_>,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        run_mutation(snap, updater, |m| matches!(m, MemberMutation::UpdateRole { .. }))
    }

    fn lane(&self) -> TypeId {
        mutation_lane()
    }
}

/// DELETEs the member held in `MemberMutationInput`.
#[derive(Debug, Default)]
pub struct DeleteTeamMemberCommand;

impl Command for DeleteTeamMemberCommand {
    fn run(
        &self,
        snap: CommandSnapshot<'_>,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        run_mutation(snap, updater, |m| matches!(m, MemberMutation::Remove { .. }))
    }

    fn lane(&self) -> TypeId {
        mutation_lane()
    }
}

/// Clears the mutation status when a dialog closes.
#[derive(Debug, Default)]
pub struct ResetMemberMutationCommand;

impl Command for ResetMemberMutationCommand {
    fn run(
        &self,
        _snap: CommandSnapshot<'_>,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        Box::pin(async move {
            updater.set(MemberMutationCompute::default());
        })
    }

    fn lane(&self) -> TypeId {
        mutation_lane()
    }
}
