//! Column records for the members table.

use egui::Ui;

use super::cells;
use super::row::{MemberRowView, RowAction};

/// One table column: its header, how a row renders in it, and the
/// placeholder shown while the first page loads.
#[derive(Clone, Copy)]
pub struct MemberColumn {
    pub header: &'static str,
    pub render: fn(&mut Ui, &MemberRowView) -> Option<RowAction>,
    pub skeleton: fn(&mut Ui),
}

pub const AVATAR_SIZE: f32 = 36.0;
pub const MIN_COL_WIDTH: f32 = 80.0;

pub const MEMBER_COLUMNS: [MemberColumn; 4] = [
    MemberColumn {
        header: "Team Member",
        render: cells::render_member_cell,
        skeleton: cells::skeleton_member_cell,
    },
    MemberColumn {
        header: "Role",
        render: cells::render_role_cell,
        skeleton: cells::skeleton_role_cell,
    },
    MemberColumn {
        header: "Member Since",
        render: cells::render_member_since_cell,
        skeleton: cells::skeleton_date_cell,
    },
    MemberColumn {
        header: "Actions",
        render: cells::render_actions_cell,
        skeleton: cells::skeleton_actions_cell,
    },
];
