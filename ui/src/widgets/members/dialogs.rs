//! Update-role and remove-member dialogs.
//!
//! A dialog submits through `MemberMutationInput` + command and stays open
//! while the request runs. On success it closes and the members listing is
//! refetched; on failure the error is shown inline. A mutation that finishes
//! after its dialog was dismissed still refetches the listing.

use egui::{Color32, RichText, Ui, Window};
use quire_business::{
    DeleteTeamMemberCommand, MemberMutation, MemberMutationCompute, MemberMutationInput,
    MemberMutationStatus, ResetMemberMutationCommand, TeamMembersInput, UpdateTeamMemberCommand,
    roles_assignable_by,
};
use quire_states::StateCtx;

use super::state::{MemberDialog, MemberDialogs, RemoveDialog, UpdateRoleDialog};

enum DialogEvent {
    Submit(MemberMutation),
    Close,
}

/// Shows the open dialog, if any, and applies what happened in it.
pub fn member_dialogs(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let mutation = state_ctx.compute::<MemberMutationCompute>().clone();
    let Some(mut dialog) = state_ctx.state::<MemberDialogs>().open.clone() else {
        if mutation.status == MemberMutationStatus::Succeeded {
            finish_mutation(state_ctx);
        }
        return;
    };

    // Results of another dialog are not shown here.
    let foreign = mutation
        .mutation
        .as_ref()
        .is_some_and(|submitted| !dialog.targets(submitted));
    let mutation = if foreign { MemberMutationCompute::default() } else { mutation };

    if mutation.status == MemberMutationStatus::Succeeded {
        state_ctx.update::<MemberDialogs>(|dialogs| dialogs.open = None);
        finish_mutation(state_ctx);
        return;
    }

    let event = match &mut dialog {
        MemberDialog::UpdateRole(update) => show_update_role_dialog(ui, update, &mutation),
        MemberDialog::Remove(remove) => show_remove_dialog(ui, remove, &mutation),
    };

    match event {
        Some(DialogEvent::Submit(submitted)) => {
            let remove = matches!(submitted, MemberMutation::Remove { .. });
            state_ctx.update::<MemberMutationInput>(|input| input.mutation = Some(submitted));
            if remove {
                state_ctx.dispatch::<DeleteTeamMemberCommand>();
            } else {
                state_ctx.dispatch::<UpdateTeamMemberCommand>();
            }
            state_ctx.update::<MemberDialogs>(|dialogs| dialogs.open = Some(dialog));
        }
        Some(DialogEvent::Close) => {
            // The request may already have reached the server.
            if mutation.is_in_flight() {
                state_ctx.update::<TeamMembersInput>(TeamMembersInput::invalidate);
            }
            state_ctx.update::<MemberDialogs>(|dialogs| dialogs.open = None);
            state_ctx.dispatch::<ResetMemberMutationCommand>();
        }
        None => state_ctx.update::<MemberDialogs>(|dialogs| dialogs.open = Some(dialog)),
    }
}

/// Refetches the listing and clears the mutation result.
fn finish_mutation(state_ctx: &mut StateCtx) {
    state_ctx.update::<TeamMembersInput>(TeamMembersInput::invalidate);
    state_ctx.dispatch::<ResetMemberMutationCommand>();
}

fn show_error(ui: &mut Ui, mutation: &MemberMutationCompute) {
    if let Some(error) = mutation.error_message() {
        ui.colored_label(Color32::RED, format!("Error: {error}"));
        ui.add_space(8.0);
    }
}

fn show_update_role_dialog(
    ui: &mut Ui,
    dialog: &mut UpdateRoleDialog,
    mutation: &MemberMutationCompute,
) -> Option<DialogEvent> {
    let mut open = true;
    let mut event = None;

    Window::new("Update team member")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!("You are currently updating {}.", dialog.member_name));
            ui.add_space(8.0);
            show_error(ui, mutation);

            ui.label("Role");
            for role in roles_assignable_by(dialog.acting_role) {
                ui.radio_value(&mut dialog.selected, *role, role.label());
            }
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let busy = mutation.is_in_flight();
                if ui.add_enabled(!busy, egui::Button::new("Update")).clicked() {
                    event = Some(DialogEvent::Submit(MemberMutation::UpdateRole {
                        team_id: dialog.team_id,
                        member_id: dialog.member_id,
                        role: dialog.selected,
                    }));
                }
                if ui.button("Cancel").clicked() {
                    event = Some(DialogEvent::Close);
                }
                if busy {
                    ui.spinner();
                }
            });
        });

    if !open {
        event = Some(DialogEvent::Close);
    }
    event
}

fn show_remove_dialog(
    ui: &mut Ui,
    dialog: &mut RemoveDialog,
    mutation: &MemberMutationCompute,
) -> Option<DialogEvent> {
    let mut open = true;
    let mut event = None;

    Window::new("Are you sure?")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!(
                "You are about to remove the following user from {}.",
                dialog.team_name
            ));
            ui.add_space(4.0);
            ui.strong(&dialog.member_name);
            ui.label(RichText::new(&dialog.member_email).weak());
            ui.add_space(8.0);
            show_error(ui, mutation);

            ui.horizontal(|ui| {
                let busy = mutation.is_in_flight();
                if ui
                    .add_enabled(!busy, egui::Button::new(RichText::new("Delete").color(Color32::RED)))
                    .clicked()
                {
                    event = Some(DialogEvent::Submit(MemberMutation::Remove {
                        team_id: dialog.team_id,
                        member_id: dialog.member_id,
                    }));
                }
                if ui.button("Cancel").clicked() {
                    event = Some(DialogEvent::Close);
                }
                if busy {
                    ui.spinner();
                }
            });
        });

    if !open {
        event = Some(DialogEvent::Close);
    }
    event
}
