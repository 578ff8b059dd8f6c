use egui::{Button, ComboBox, Ui};
use quire_business::PageResult;

pub const PAGE_SIZES: [u32; 5] = [10, 20, 30, 40, 50];

/// Requested `(page, per_page)`.
pub type PageChange = (u32, u32);

/// Footer under the table. Returns the page the user asked for; the caller
/// writes it to the URL.
pub fn render_pagination<T>(ui: &mut Ui, page: &PageResult<T>, visible_rows: usize) -> Option<PageChange> {
    let mut change = None;
    let current = page.current_page;
    let total = page.total_pages.max(1);

    ui.horizontal(|ui| {
        ui.label(format!("Showing {visible_rows} results."));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right to left: last button first.
            if ui.add_enabled(current < total, Button::new("Last")).clicked() {
                change = Some((total, page.per_page));
            }
            if ui.add_enabled(current < total, Button::new("Next")).clicked() {
                change = Some((current + 1, page.per_page));
            }
            if ui.add_enabled(current > 1, Button::new("Previous")).clicked() {
                change = Some((current - 1, page.per_page));
            }
            if ui.add_enabled(current > 1, Button::new("First")).clicked() {
                change = Some((1, page.per_page));
            }

            ui.label(format!("Page {current} of {total}"));

            let mut per_page = page.per_page;
            ComboBox::from_id_salt("members_per_page")
                .selected_text(per_page.to_string())
                .show_ui(ui, |ui| {
                    for size in PAGE_SIZES {
                        ui.selectable_value(&mut per_page, size, size.to_string());
                    }
                });
            ui.label("Rows per page");

            if per_page != page.per_page {
                change = Some((1, per_page));
            }
        });
    });

    change
}
