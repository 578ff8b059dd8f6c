//! Settings navigation shown above the settings pages on narrow screens.

use egui::{Response, Ui};
use quire_business::{BILLING_FLAG, FeatureFlags, Location, Route};
use quire_states::StateCtx;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// What the nav renders against, read once per frame.
#[derive(Debug, Clone)]
pub struct NavCtx {
    /// `None` when no route is known yet; nothing is active then.
    pub path: Option<String>,
    pub flags: FeatureFlags,
}

impl NavCtx {
    pub fn new(state_ctx: &StateCtx) -> Self {
        Self {
            path: Some(state_ctx.state::<Location>().path.clone()),
            flags: state_ctx.compute::<FeatureFlags>().clone(),
        }
    }
}

/// Destinations in display order. Billing is left out entirely unless its
/// flag is on.
pub fn nav_items(path: Option<&str>, flags: &FeatureFlags) -> Vec<NavItem> {
    let mut destinations = vec![("Profile", Route::Profile), ("Password", Route::Password)];
    if flags.get_flag(BILLING_FLAG) {
        destinations.push(("Billing", Route::Billing));
    }

    destinations
        .into_iter()
        .map(|(label, route)| {
            let href = route.path();
            let active = path.is_some_and(|path| path.starts_with(&href));
            NavItem {
                label,
                href,
                active,
            }
        })
        .collect()
}

pub fn mobile_nav(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let nav_ctx = NavCtx::new(state_ctx);
    let mut picked = None;

    let response = ui
        .horizontal(|ui| {
            for item in nav_items(nav_ctx.path.as_deref(), &nav_ctx.flags) {
                if ui.selectable_label(item.active, item.label).clicked() {
                    picked = Some(item.href);
                }
            }
        })
        .response;

    if let Some(href) = picked {
        log::info!("Navigating to {href}");
        state_ctx.update::<Location>(|location| location.navigate(href));
    }

    response
}
