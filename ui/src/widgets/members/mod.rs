//! Team members table with pagination and per-row actions.

pub mod dialogs;
pub mod pagination;
pub mod state;
pub mod table;

use egui::{Color32, Frame, InnerResponse, Margin, Response, ScrollArea, Stroke, Ui};
use quire_business::{
    I18n, Location, MembersBody, SearchParams, Team, TeamMembersCompute, TeamMembersKey,
    request_team_members, set_pagination,
};
use quire_states::StateCtx;

use self::dialogs::member_dialogs;
use self::pagination::render_pagination;
use self::state::{MemberDialog, MemberDialogs};
use self::table::cells::render_error_banner;
use self::table::columns::{MEMBER_COLUMNS, MIN_COL_WIDTH, MemberColumn};
use self::table::header::render_table_header;
use self::table::row::{MemberRowView, RowAction, member_row_view, render_member_row};

const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
const REFRESHING_LABEL: &str = "Refreshing members...";

pub(crate) fn table_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Context the table renders against, passed in by the page.
#[derive(Debug, Clone)]
pub struct MembersTableCtx {
    pub team: Team,
    pub search: SearchParams,
    pub i18n: I18n,
}

impl MembersTableCtx {
    /// Reads the URL and locale from `state_ctx`.
    pub fn new(state_ctx: &StateCtx, team: Team) -> Self {
        Self {
            search: SearchParams::from_location(state_ctx.state::<Location>()),
            i18n: *state_ctx.state::<I18n>(),
            team,
        }
    }

    pub fn key(&self) -> TeamMembersKey {
        TeamMembersKey::new(self.team.id, &self.search)
    }
}

pub fn members_table(state_ctx: &mut StateCtx, table_ctx: &MembersTableCtx, ui: &mut Ui) -> Response {
    let key = table_ctx.key();
    request_team_members(state_ctx, key.clone());

    let compute = state_ctx.compute::<TeamMembersCompute>();
    let refreshing = compute.is_refreshing(&key);
    let views: Vec<MemberRowView> = match compute.body() {
        MembersBody::Rows(rows) => rows
            .iter()
            .map(|member| member_row_view(member, &table_ctx.team, &table_ctx.i18n))
            .collect(),
        _ => Vec::new(),
    };
    let body = match compute.body() {
        MembersBody::Error => Body::Error(compute.error_message().unwrap_or_default().to_string()),
        MembersBody::Skeleton(rows) => Body::Skeleton(rows),
        MembersBody::Rows(_) => Body::Rows,
    };
    let page = compute.page();

    let mut picked: Option<(RowAction, usize)> = None;
    let mut page_change = None;

    let response = ui
        .vertical(|ui| {
            if refreshing {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(REFRESHING_LABEL);
                });
            }

            Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .inner_margin(Margin::ZERO)
                .show(ui, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        egui::Grid::new("members_table")
                            .num_columns(MEMBER_COLUMNS.len())
                            .striped(true)
                            .spacing([16.0, 0.0])
                            .min_col_width(MIN_COL_WIDTH)
                            .show(ui, |ui| {
                                render_table_header(ui, &MEMBER_COLUMNS);
                                match body {
                                    Body::Skeleton(rows) => {
                                        for _ in 0..rows {
                                            render_skeleton_row(ui, &MEMBER_COLUMNS);
                                        }
                                    }
                                    Body::Rows => {
                                        for (index, view) in views.iter().enumerate() {
                                            if let Some(action) = render_member_row(ui, &MEMBER_COLUMNS, view) {
                                                picked = Some((action, index));
                                            }
                                        }
                                    }
                                    Body::Error(_) => {}
                                }
                            });

                        if let Body::Error(message) = &body {
                            render_error_banner(ui, message);
                        }
                    });
                });

            ui.add_space(8.0);
            page_change = render_pagination(ui, &page, views.len());
        })
        .response;

    if let Some((action, index)) = picked {
        let view = &views[index];
        let dialog = match action {
            RowAction::UpdateRole => MemberDialog::update_role(view, &table_ctx.team),
            RowAction::Remove => MemberDialog::remove(view, &table_ctx.team),
        };
        state_ctx.update::<MemberDialogs>(|dialogs| dialogs.open = Some(dialog));
    }

    if let Some((page, per_page)) = page_change {
        state_ctx.update::<Location>(|location| set_pagination(location, page, per_page));
    }

    member_dialogs(state_ctx, ui);

    response
}

enum Body {
    Error(String),
    Skeleton(usize),
    Rows,
}

fn render_skeleton_row(ui: &mut Ui, columns: &[MemberColumn]) {
    for column in columns {
        table_cell(ui, |ui| (column.skeleton)(ui));
    }
    ui.end_row();
}
