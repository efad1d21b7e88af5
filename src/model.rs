// Wire types for the league API.
//
// Every entity is owned by the backend; this layer deserializes and renders,
// never mutates. Field names on the wire are camelCase. All fields beyond
// `id` and `name` are optional so a sparse record renders with placeholders
// instead of failing the whole response.

use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(rename = "homeGround", default)]
    pub home_ground: Option<String>,
    #[serde(default)]
    pub captain: Option<String>,
    #[serde(rename = "headCoach", default)]
    pub head_coach: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub social: Option<SocialLinks>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub roster: Roster,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

/// Squad grouped by playing role. A missing category is an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub batsmen: Vec<String>,
    #[serde(default)]
    pub bowlers: Vec<String>,
    #[serde(rename = "allRounders", default)]
    pub all_rounders: Vec<String>,
    #[serde(default)]
    pub wicketkeepers: Vec<String>,
}

impl Roster {
    /// Categories in display order, paired with their section labels.
    pub fn sections(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Batsmen", self.batsmen.as_slice()),
            ("Bowlers", self.bowlers.as_slice()),
            ("All-rounders", self.all_rounders.as_slice()),
            ("Wicketkeepers", self.wicketkeepers.as_slice()),
        ]
    }
}

/// Player id used by roster links: `{teamId}-{name-slug}` where the slug is
/// the lowercased name with whitespace runs collapsed to `-`.
pub fn roster_player_id(team_id: &str, player_name: &str) -> String {
    let slug = player_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{team_id}-{slug}")
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
    #[serde(rename = "iplStats", default)]
    pub ipl_stats: Option<IplStats>,
}

/// Playing role. Unknown values are carried through verbatim rather than
/// rejecting the record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Role {
    Batsman,
    Bowler,
    AllRounder,
    Wicketkeeper,
    Other(String),
}

impl Role {
    /// The four known roles, in the order the search filter cycles them.
    pub const ALL: [Role; 4] = [
        Role::Batsman,
        Role::Bowler,
        Role::AllRounder,
        Role::Wicketkeeper,
    ];

    /// Wire value, as sent in the `role` query parameter.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-rounder",
            Role::Wicketkeeper => "Wicketkeeper",
            Role::Other(s) => s,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Batsman" => Role::Batsman,
            "Bowler" => Role::Bowler,
            "All-rounder" => Role::AllRounder,
            "Wicketkeeper" => Role::Wicketkeeper,
            _ => Role::Other(s),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Career aggregates. Each field is individually optional; a missing value
/// renders as `-`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IplStats {
    #[serde(default)]
    pub matches: Option<u32>,
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub wickets: Option<u32>,
    #[serde(rename = "strikeRate", default)]
    pub strike_rate: Option<f64>,
}

// ---------------------------------------------------------------------------
// Staff and owners
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Stat leaderboards
// ---------------------------------------------------------------------------

/// One row of the top-runs leaderboard, pre-ranked by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct RunsEntry {
    pub name: String,
    #[serde(default)]
    pub runs: Option<u64>,
}

/// One row of the top-wickets leaderboard, pre-ranked by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct WicketsEntry {
    pub name: String,
    #[serde(default)]
    pub wickets: Option<u64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
