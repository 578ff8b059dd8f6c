use std::collections::HashMap;

use log::{info, warn};
use quire_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, State,
};

use crate::BusinessConfig;
use crate::api;

pub const BILLING_FLAG: &str = "billing";

/// Named boolean toggles resolved at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    flags: HashMap<String, bool>,
}

impl State for FeatureFlags {}
impl Compute for FeatureFlags {}

impl FeatureFlags {
    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::default().with_flag(BILLING_FLAG, config.feature_billing)
    }

    pub fn with_flag(mut self, name: &str, enabled: bool) -> Self {
        self.flags.insert(name.to_string(), enabled);
        self
    }

    /// Unknown flags are off.
    pub fn get_flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

/// Replaces the flags with the server's; a failed refresh keeps the current ones.
#[derive(Debug, Default)]
pub struct FetchFeatureFlagsCommand;

impl Command for FetchFeatureFlagsCommand {
    fn run(
        &self,
        snap: CommandSnapshot<'_>,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let api_url = snap.state::<BusinessConfig>().api_url();

        Box::pin(async move {
            match api::get_feature_flags(&api_url).await {
                Ok(flags) => {
                    info!("Loaded {} feature flags", flags.len());
                    updater.set(FeatureFlags { flags });
                }
                Err(err) => warn!("Keeping current feature flags, refresh failed: {err}"),
            }
        })
    }
}
