use egui::{Color32, Response, Ui};
use quire_business::CurrentTeamCompute;

use crate::state::State;
use crate::widgets::{MembersTableCtx, members_table};

/// Members page of `team_url`. Waits for the current team before rendering
/// the table, since row permissions depend on it.
pub fn team_members_page(state: &mut State, team_url: &str, ui: &mut Ui) -> Response {
    let team = match state.ctx.compute::<CurrentTeamCompute>() {
        CurrentTeamCompute::Loaded(team) => team.clone(),
        CurrentTeamCompute::Error(err) => {
            return ui.colored_label(Color32::RED, format!("Failed to load team: {err}"));
        }
        CurrentTeamCompute::Idle | CurrentTeamCompute::Loading => return ui.spinner(),
    };

    if team.url != team_url {
        return ui.label(format!("Team \"{team_url}\" not found"));
    }

    ui.vertical(|ui| {
        ui.heading("Team Members");
        ui.label(format!("Manage the members of {}.", team.name));
        ui.add_space(12.0);

        let table_ctx = MembersTableCtx::new(&state.ctx, team);
        members_table(&mut state.ctx, &table_ctx, ui);
    })
    .response
}
