use egui::{Response, RichText, Ui};
use quire_business::Route;

/// Section headers for the personal settings pages. Their forms live
/// elsewhere; only the navigation into them is part of this app.
pub fn settings_page(route: &Route, ui: &mut Ui) -> Response {
    let (title, description) = match route {
        Route::Profile => ("Profile", "Manage your personal information."),
        Route::Password => ("Password", "Change the password you sign in with."),
        Route::Billing => ("Billing", "Manage your subscription and invoices."),
        _ => ("Settings", ""),
    };

    ui.vertical(|ui| {
        ui.heading(title);
        ui.label(RichText::new(description).weak());
    })
    .response
}
