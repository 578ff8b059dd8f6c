//! Cell renderers, one per column, plus their loading placeholders.

use egui::{Button, Color32, Label, RichText, Sense, Ui, Vec2, WidgetInfo, WidgetType};

use super::columns::AVATAR_SIZE;
use super::row::{MemberRowView, RowAction};

/// Accessible label of a skeleton row.
pub const SKELETON_LABEL: &str = "Loading member";
/// Label of the button opening a row's actions menu.
pub const ACTIONS_MENU_LABEL: &str = "…";

const SKELETON_COLOR: Color32 = Color32::from_gray(225);
const AVATAR_BG_COLOR: Color32 = Color32::from_gray(230);

pub fn render_member_cell(ui: &mut Ui, row: &MemberRowView) -> Option<RowAction> {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(AVATAR_SIZE), Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), AVATAR_SIZE / 2.0, AVATAR_BG_COLOR);
        ui.put(rect, Label::new(RichText::new(&row.avatar_fallback).strong()));

        ui.vertical(|ui| {
            ui.label(RichText::new(&row.name).strong());
            ui.label(RichText::new(&row.email).weak());
        });
    });
    None
}

pub fn render_role_cell(ui: &mut Ui, row: &MemberRowView) -> Option<RowAction> {
    ui.label(row.role_label);
    None
}

pub fn render_member_since_cell(ui: &mut Ui, row: &MemberRowView) -> Option<RowAction> {
    ui.label(&row.member_since);
    None
}

/// Both entries share the row's disabled flag. Picking one closes the menu.
pub fn render_actions_cell(ui: &mut Ui, row: &MemberRowView) -> Option<RowAction> {
    let enabled = !row.actions_disabled;
    ui.menu_button(ACTIONS_MENU_LABEL, |ui| {
        ui.label(RichText::new("Actions").weak());
        let mut picked = None;
        if ui
            .add_enabled(enabled, Button::new("Update role"))
            .on_hover_text("Update team member role")
            .clicked()
        {
            picked = Some(RowAction::UpdateRole);
        }
        if ui
            .add_enabled(enabled, Button::new("Remove"))
            .on_hover_text("Remove team member")
            .clicked()
        {
            picked = Some(RowAction::Remove);
        }
        if picked.is_some() {
            ui.close();
        }
        picked
    })
    .inner
    .flatten()
}

fn bar(ui: &mut Ui, width: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 12.0), Sense::hover());
    ui.painter().rect_filled(rect, 6.0, SKELETON_COLOR);
}

pub fn skeleton_member_cell(ui: &mut Ui) {
    ui.horizontal(|ui| {
        let (rect, avatar) = ui.allocate_exact_size(Vec2::splat(AVATAR_SIZE), Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), AVATAR_SIZE / 2.0, SKELETON_COLOR);
        avatar.widget_info(|| WidgetInfo::labeled(WidgetType::Other, true, SKELETON_LABEL));

        ui.vertical(|ui| {
            bar(ui, 96.0);
            bar(ui, 144.0);
        });
    });
}

pub fn skeleton_role_cell(ui: &mut Ui) {
    bar(ui, 48.0);
}

pub fn skeleton_date_cell(ui: &mut Ui) {
    bar(ui, 80.0);
}

pub fn skeleton_actions_cell(ui: &mut Ui) {
    bar(ui, 24.0);
}

/// Replaces the rows when the listing failed to load.
pub fn render_error_banner(ui: &mut Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(RichText::new("Something went wrong").strong().color(Color32::RED));
        ui.label("We encountered an error while loading this page. Please try again later.");
        ui.label(RichText::new(message).weak().small());
        ui.add_space(12.0);
    });
}
