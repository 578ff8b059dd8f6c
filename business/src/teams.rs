//! Team domain types and the role rules shared by the members views.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamMemberRole {
    Admin,
    Manager,
    Member,
}

impl TeamMemberRole {
    pub const ALL: [TeamMemberRole; 3] = [Self::Admin, Self::Manager, Self::Member];

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Member => "Member",
        }
    }

    /// Roles a member holding `self` may act upon, highest first.
    pub fn hierarchy(self) -> &'static [TeamMemberRole] {
        match self {
            Self::Admin => &[Self::Admin, Self::Manager, Self::Member],
            Self::Manager => &[Self::Manager, Self::Member],
            Self::Member => &[Self::Member],
        }
    }
}

impl Display for TeamMemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberUser {
    pub name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u64,
    pub team_id: u64,
    pub user_id: u64,
    pub role: TeamMemberRole,
    pub created_at: DateTime<Utc>,
    pub user: TeamMemberUser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTeamMember {
    pub role: TeamMemberRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub owner_user_id: u64,
    pub current_team_member: CurrentTeamMember,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub per_page: u32,
    pub current_page: u32,
    pub total_pages: u32,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            per_page: 10,
            current_page: 1,
            total_pages: 1,
        }
    }
}

/// Whether a member with role `acting` may manage a member with role `subject`.
///
/// Roles can manage their own level and everything below it. Owners are not
/// special-cased here.
pub fn is_team_role_within_user_hierarchy(acting: TeamMemberRole, subject: TeamMemberRole) -> bool {
    acting.hierarchy().contains(&subject)
}

/// Roles `acting` may hand out in the update dialog.
pub fn roles_assignable_by(acting: TeamMemberRole) -> &'static [TeamMemberRole] {
    acting.hierarchy()
}

/// Upper-cased first letters of the first two space-separated parts of `name`.
///
/// Empty parts count, so `"Ada  Lovelace"` yields `"A"`.
pub fn extract_initials(name: &str) -> String {
    name.split(' ')
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn avatar_fallback(user: &TeamMemberUser) -> String {
    match user.name.as_deref() {
        Some(name) if !name.is_empty() => extract_initials(name),
        _ => user
            .email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default(),
    }
}

pub fn is_owner(member: &TeamMember, team: &Team) -> bool {
    member.user_id == team.owner_user_id
}

pub fn role_label(member: &TeamMember, team: &Team) -> &'static str {
    if is_owner(member, team) {
        "Owner"
    } else {
        member.role.label()
    }
}

/// Update and remove are unavailable for the owner and for members above the
/// acting user's role.
pub fn member_actions_disabled(member: &TeamMember, team: &Team) -> bool {
    is_owner(member, team)
        || !is_team_role_within_user_hierarchy(team.current_team_member.role, member.role)
}


#[cfg(test)]
mod tests {
    use super::fixtures::{member, team};
    use super::*;
    use TeamMemberRole::{Admin, Manager, Member};

    #[test]
    fn hierarchy_allows_same_level_and_below() {
        assert!(is_team_role_within_user_hierarchy(Admin, Admin));
        assert!(is_team_role_within_user_hierarchy(Admin, Member));
        assert!(is_team_role_within_user_hierarchy(Manager, Manager));
        assert!(is_team_role_within_user_hierarchy(Manager, Member));
        assert!(!is_team_role_within_user_hierarchy(Manager, Admin));
        assert!(is_team_role_within_user_hierarchy(Member, Member));
        assert!(!is_team_role_within_user_hierarchy(Member, Manager));
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(extract_initials("ada lovelace"), "AL");
        assert_eq!(extract_initials("Jean Luc Picard"), "JL");
        assert_eq!(extract_initials("Cher"), "C");
        assert_eq!(extract_initials(""), "");
    }

    #[test]
    fn initials_count_empty_parts() {
        assert_eq!(extract_initials("Ada  Lovelace"), "A");
        assert_eq!(extract_initials(" Ada Lovelace"), "A");
    }

    #[test]
    fn avatar_falls_back_to_email() {
        let named = member(1, Some("Grace Hopper"), "grace@navy.mil", Member);
        let unnamed = member(2, None, "zoe@example.com", Member);
        let empty_name = member(3, Some(""), "eve@example.com", Member);

        assert_eq!(avatar_fallback(&named.user), "GH");
        assert_eq!(avatar_fallback(&unnamed.user), "Z");
        assert_eq!(avatar_fallback(&empty_name.user), "E");
    }

    #[test]
    fn owner_label_overrides_stored_role() {
        let owner = member(1, Some("Owner Person"), "o@example.com", Member);
        let admin = member(2, Some("Admin Person"), "a@example.com", Admin);
        let team = team(owner.user_id, Admin);

        assert_eq!(role_label(&owner, &team), "Owner");
        assert_eq!(role_label(&admin, &team), "Admin");
    }

    #[test]
    fn actions_disabled_for_owner_and_higher_roles() {
        let owner = member(1, None, "o@example.com", Admin);
        let admin = member(2, None, "a@example.com", Admin);
        let peer = member(3, None, "m@example.com", Manager);
        let junior = member(4, None, "j@example.com", Member);
        let team = team(owner.user_id, Manager);

        assert!(member_actions_disabled(&owner, &team));
        assert!(member_actions_disabled(&admin, &team));
        assert!(!member_actions_disabled(&peer, &team));
        assert!(!member_actions_disabled(&junior, &team));
    }

    #[test]
    fn members_deserialize_from_camel_case() {
        let json = serde_json::json!({
            "id": 3,
            "teamId": 7,
            "userId": 30,
            "role": "MANAGER",
            "createdAt": "2024-01-15T12:00:00Z",
            "user": { "name": null, "email": "m@example.com" }
        });

        let parsed: TeamMember = serde_json::from_value(json).expect("valid member");
        assert_eq!(parsed.role, Manager);
        assert_eq!(parsed.user.name, None);
    }
}
