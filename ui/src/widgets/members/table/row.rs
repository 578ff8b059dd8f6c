//! Per-row view data and row rendering.

use egui::Ui;
use quire_business::{
    I18n, Team, TeamMember, TeamMemberRole, avatar_fallback, member_actions_disabled, role_label,
};

use super::columns::MemberColumn;
use crate::widgets::members::table_cell;

/// Everything a row shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRowView {
    pub member_id: u64,
    pub team_id: u64,
    /// Empty when the user never set a name.
    pub name: String,
    pub email: String,
    pub avatar_fallback: String,
    pub role: TeamMemberRole,
    pub role_label: &'static str,
    pub member_since: String,
    pub actions_disabled: bool,
}

pub fn member_row_view(member: &TeamMember, team: &Team, i18n: &I18n) -> MemberRowView {
    MemberRowView {
        member_id: member.id,
        team_id: member.team_id,
        name: member.user.name.clone().unwrap_or_default(),
        email: member.user.email.clone(),
        avatar_fallback: avatar_fallback(&member.user),
        role: member.role,
        role_label: role_label(member, team),
        member_since: i18n.date(&member.created_at),
        actions_disabled: member_actions_disabled(member, team),
    }
}

/// Menu entry picked in a row's actions cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    UpdateRole,
    Remove,
}

/// Renders one grid row; returns the action picked in it.
pub fn render_member_row(ui: &mut Ui, columns: &[MemberColumn], row: &MemberRowView) -> Option<RowAction> {
    let mut action = None;
    for column in columns {
        let picked = table_cell(ui, |ui| (column.render)(ui, row)).inner;
        action = action.or(picked);
    }
    ui.end_row();
    action
}
