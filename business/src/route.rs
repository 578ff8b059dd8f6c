//! Pages addressable by the `Location` path.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Profile,
    Password,
    Billing,
    /// `/t/{team_url}/settings/members`
    TeamMembers { team_url: String },
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["settings", "profile", ..] => Self::Profile,
            ["settings", "password", ..] => Self::Password,
            ["settings", "billing", ..] => Self::Billing,
            ["t", team_url, "settings", "members"] => Self::TeamMembers {
                team_url: (*team_url).to_string(),
            },
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Profile => "/settings/profile".to_string(),
            Self::Password => "/settings/password".to_string(),
            Self::Billing => "/settings/billing".to_string(),
            Self::TeamMembers { team_url } => format!("/t/{team_url}/settings/members"),
            Self::NotFound => "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_subpaths_resolve_to_their_page() {
        assert_eq!(Route::from_path("/settings/password/change"), Route::Password);
        assert_eq!(Route::from_path("/settings/billing"), Route::Billing);
    }

    #[test]
    fn team_members_path_round_trips() {
        let route = Route::from_path("/t/acme/settings/members");
        assert_eq!(
            route,
            Route::TeamMembers {
                team_url: "acme".to_string()
            }
        );
        assert_eq!(route.path(), "/t/acme/settings/members");
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/documents"), Route::NotFound);
        assert_eq!(Route::from_path(""), Route::NotFound);
    }
}
