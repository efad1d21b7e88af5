// Player search parameter assembly.
//
// The players endpoint filters server-side on up to three optional inputs.
// Only non-empty inputs are emitted, always in the order {q, role, team};
// clearing an input removes its parameter and widens the result set.

use crate::model::Role;

/// Current state of the Players view filter bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerQuery {
    /// Free-text search over player names.
    pub q: String,
    /// Role filter; `None` means all roles.
    pub role: Option<Role>,
    /// Team id filter; `None` means all teams.
    pub team: Option<String>,
}

impl PlayerQuery {
    /// Query parameters to send, containing exactly the non-empty inputs.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.q.is_empty() {
            params.push(("q", self.q.clone()));
        }
        if let Some(role) = &self.role {
            params.push(("role", role.as_str().to_string()));
        }
        if let Some(team) = &self.team {
            if !team.is_empty() {
                params.push(("team", team.clone()));
            }
        }
        params
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
