//! Pages addressed by the `Location` path.
//!
//! - `settings_page`: profile, password and billing sections
//! - `team_members_page`: the members table of the current team

mod settings_page;
mod team_members_page;

use egui::{Response, Ui};
use quire_business::{Location, Route};

use crate::state::State;

pub use settings_page::settings_page;
pub use team_members_page::team_members_page;

/// Renders the page for the current path.
pub fn route_page(state: &mut State, ui: &mut Ui) -> Response {
    let route = Route::from_path(&state.ctx.state::<Location>().path);
    match route {
        Route::TeamMembers { team_url } => team_members_page(state, &team_url, ui),
        Route::NotFound => ui.label("Page not found"),
        settings => settings_page(&settings, ui),
    }
}
