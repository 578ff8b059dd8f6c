//! Dialog state for the members table.

use quire_business::{MemberMutation, Team, TeamMemberRole};
use quire_states::State;

use super::table::row::MemberRowView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRoleDialog {
    pub team_id: u64,
    pub member_id: u64,
    pub member_name: String,
    pub member_role: TeamMemberRole,
    pub acting_role: TeamMemberRole,
    /// Role picked in the dialog, starts at `member_role`.
    pub selected: TeamMemberRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveDialog {
    pub team_id: u64,
    pub team_name: String,
    pub member_id: u64,
    pub member_name: String,
    pub member_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDialog {
    UpdateRole(UpdateRoleDialog),
    Remove(RemoveDialog),
}

impl MemberDialog {
    pub fn update_role(row: &MemberRowView, team: &Team) -> Self {
        Self::UpdateRole(UpdateRoleDialog {
            team_id: row.team_id,
            member_id: row.member_id,
            member_name: display_name(row),
            member_role: row.role,
            acting_role: team.current_team_member.role,
            selected: row.role,
        })
    }

    pub fn remove(row: &MemberRowView, team: &Team) -> Self {
        Self::Remove(RemoveDialog {
            team_id: team.id,
            team_name: team.name.clone(),
            member_id: row.member_id,
            member_name: display_name(row),
            member_email: row.email.clone(),
        })
    }

    /// Whether `mutation` was submitted from this dialog.
    pub fn targets(&self, mutation: &MemberMutation) -> bool {
        match (self, mutation) {
            (Self::UpdateRole(dialog), MemberMutation::UpdateRole { team_id, member_id, .. }) => {
                dialog.team_id == *team_id && dialog.member_id == *member_id
            }
            (Self::Remove(dialog), MemberMutation::Remove { team_id, member_id }) => {
                dialog.team_id == *team_id && dialog.member_id == *member_id
            }
            _ => false,
        }
    }
}

/// Unnamed members are addressed by email.
fn display_name(row: &MemberRowView) -> String {
    if row.name.is_empty() {
        row.email.clone()
    } else {
        row.name.clone()
    }
}

/// The dialog opened from a row's actions menu, if any.
#[derive(Debug, Clone, Default)]
pub struct MemberDialogs {
    pub open: Option<MemberDialog>,
}

impl State for MemberDialogs {}
