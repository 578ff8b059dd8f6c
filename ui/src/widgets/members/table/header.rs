use egui::{Color32, Frame, Margin, Ui};

use super::columns::MemberColumn;

const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Renders the header row with one bold label per column.
pub fn render_table_header(ui: &mut Ui, columns: &[MemberColumn]) {
    for column in columns {
        Frame::NONE
            .fill(HEADER_BG_COLOR)
            .inner_margin(Margin::symmetric(8, 8))
            .show(ui, |ui| {
                ui.strong(column.header);
            });
    }
    ui.end_row();
}
