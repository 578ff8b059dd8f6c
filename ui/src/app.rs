use std::time::Duration;

use quire_business::{
    CurrentTeamCompute, Location, MemberMutationCompute, Route, TeamMembersCompute,
    TeamMembersStatus,
};
use quire_states::StateCtx;

use crate::{pages, state::State, widgets};

/// How often to poll for command results while work is pending.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

pub struct QuireApp {
    state: State,
    /// Last URL written to the browser's address bar.
    #[cfg(target_arch = "wasm32")]
    last_href: String,
}

impl QuireApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            last_href: state.ctx.state::<Location>().href(),
            state,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for QuireApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::mobile_nav(&mut self.state.ctx, ui);
                ui.separator();
                team_link(&mut self.state.ctx, ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            pages::route_page(&mut self.state, ui);
        });

        #[cfg(target_arch = "wasm32")]
        self.sync_browser_url();

        // Run background jobs
        self.state.ctx.flush_commands();

        if has_pending_work(&self.state.ctx) {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl QuireApp {
    /// Mirrors `Location` into the address bar without adding history entries.
    fn sync_browser_url(&mut self) {
        let href = self.state.ctx.state::<Location>().href();
        if href == self.last_href {
            return;
        }
        let history = web_sys::window().and_then(|window| window.history().ok());
        match history {
            Some(history) => {
                if let Err(err) =
                    history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&href))
                {
                    log::warn!("Failed to update the address bar: {err:?}");
                }
            }
            None => log::warn!("No browser history available"),
        }
        self.last_href = href;
    }
}

/// Link to the current team's members page, once the team is known.
fn team_link(state_ctx: &mut StateCtx, ui: &mut egui::Ui) {
    let Some(team) = state_ctx.compute::<CurrentTeamCompute>().team() else {
        return;
    };
    let href = Route::TeamMembers {
        team_url: team.url.clone(),
    }
    .path();
    let active = state_ctx.state::<Location>().path.starts_with(&href);

    if ui.selectable_label(active, "Members").clicked() {
        state_ctx.update::<Location>(|location| location.navigate(href));
    }
}

/// Native builds can count running tasks; wasm tasks are invisible, so the
/// loading states are checked too.
fn has_pending_work(state_ctx: &StateCtx) -> bool {
    state_ctx.task_count() > 0
        || matches!(
            state_ctx.compute::<CurrentTeamCompute>(),
            CurrentTeamCompute::Loading
        )
        || state_ctx.compute::<TeamMembersCompute>().status == TeamMembersStatus::Loading
        || state_ctx.compute::<MemberMutationCompute>().is_in_flight()
}
