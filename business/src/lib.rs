pub mod api;
mod config;
mod current_team;
mod feature_flags;
pub mod http;
mod i18n;
mod location;
mod member_mutations;
mod members_query;
mod route;
mod search_params;
pub mod teams;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod test_utils;

pub use api::{ApiError, ApiResult};
pub use config::BusinessConfig;
pub use current_team::{CurrentTeamCompute, FetchCurrentTeamCommand};
pub use feature_flags::{BILLING_FLAG, FeatureFlags, FetchFeatureFlagsCommand};
pub use i18n::{I18n, Locale, UnknownLocale};
pub use location::Location;
pub use member_mutations::{
    DeleteTeamMemberCommand, MemberMutation, MemberMutationCompute, MemberMutationInput,
    MemberMutationStatus, ResetMemberMutationCommand, UpdateTeamMemberCommand,
};
pub use members_query::{
    FetchTeamMembersCommand, MembersBody, SKELETON_ROWS, TeamMembersCompute, TeamMembersInput,
    TeamMembersKey, TeamMembersStatus, request_team_members,
};
pub use route::Route;
pub use search_params::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, SearchParams, set_pagination, update_search_params,
};
pub use teams::{
    CurrentTeamMember, PageResult, Team, TeamMember, TeamMemberRole, TeamMemberUser,
    avatar_fallback, extract_initials, is_team_role_within_user_hierarchy,
    member_actions_disabled, role_label, roles_assignable_by,
};

use quire_states::StateCtx;

/// Registers every state, compute and command of the app.
///
/// `location` is the URL the app starts on.
pub fn register_states(ctx: &mut StateCtx, config: BusinessConfig, location: Location) {
    ctx.add_state(I18n::new(config.locale));
    ctx.add_state(location);
    ctx.add_state(TeamMembersInput::default());
    ctx.add_state(MemberMutationInput::default());

    ctx.record_compute(FeatureFlags::from_config(&config));
    ctx.record_compute(CurrentTeamCompute::default());
    ctx.record_compute(TeamMembersCompute::default());
    ctx.record_compute(MemberMutationCompute::default());

    ctx.record_command(FetchFeatureFlagsCommand);
    ctx.record_command(FetchCurrentTeamCommand);
    ctx.record_command(FetchTeamMembersCommand);
    ctx.record_command(UpdateTeamMemberCommand);
    ctx.record_command(DeleteTeamMemberCommand);
    ctx.record_command(ResetMemberMutationCommand);

    ctx.add_state(config);
}
