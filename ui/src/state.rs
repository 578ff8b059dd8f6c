use quire_business::{
    BusinessConfig, FetchCurrentTeamCommand, FetchFeatureFlagsCommand, Location, register_states,
};
use quire_states::StateCtx;

use crate::widgets::members::state::MemberDialogs;

/// Path opened when the app starts without one.
pub const START_PATH: &str = "/settings/profile";

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default(), Location::parse(START_PATH))
    }
}

impl State {
    /// Registers every state and queues the startup fetches; they run on the
    /// first frame's `flush_commands`.
    pub fn new(config: BusinessConfig, location: Location) -> Self {
        let mut ctx = StateCtx::new();

        register_states(&mut ctx, config, location);
        ctx.add_state(MemberDialogs::default());

        ctx.enqueue_command::<FetchFeatureFlagsCommand>();
        ctx.enqueue_command::<FetchCurrentTeamCommand>();

        Self { ctx }
    }
}
