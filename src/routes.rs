// Route table: URL-style paths mapped to views.
//
// Parsing is total — every input resolves to a route, unmatched paths to
// `NotFound`. Routes render back to a canonical path for the header line
// and the `iplpedia [PATH]` start argument.

use std::fmt;

/// One navigable view. Detail routes carry the path parameter that scopes
/// their fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Teams,
    TeamDetail { team_id: String },
    Players,
    PlayerDetail { player_id: String },
    Staff,
    Owners,
    Stats,
    NotFound { path: String },
}

impl Route {
    /// Resolve a path to its route. Leading/trailing slashes are tolerated;
    /// anything that doesn't match the table becomes `NotFound`.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => Route::Home,
            ["teams"] => Route::Teams,
            ["teams", id] => Route::TeamDetail {
                team_id: (*id).to_string(),
            },
            ["players"] => Route::Players,
            ["players", id] => Route::PlayerDetail {
                player_id: (*id).to_string(),
            },
            ["staff"] => Route::Staff,
            ["owners"] => Route::Owners,
            ["stats"] => Route::Stats,
            _ => Route::NotFound {
                path: format!("/{trimmed}"),
            },
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Teams => "/teams".to_string(),
            Route::TeamDetail { team_id } => format!("/teams/{team_id}"),
            Route::Players => "/players".to_string(),
            Route::PlayerDetail { player_id } => format!("/players/{player_id}"),
            Route::Staff => "/staff".to_string(),
            Route::Owners => "/owners".to_string(),
            Route::Stats => "/stats".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Title shown in the header and the content block border.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Teams => "All Teams",
            Route::TeamDetail { .. } => "Team",
            Route::Players => "Players",
            Route::PlayerDetail { .. } => "Player",
            Route::Staff => "Coaching & Management",
            Route::Owners => "Owners",
            Route::Stats => "Stats",
            Route::NotFound { .. } => "Not Found",
        }
    }

    /// Index of the nav tab this route highlights, if it belongs to one.
    /// Detail routes highlight their parent list tab.
    pub fn nav_index(&self) -> Option<usize> {
        match self {
            Route::Home => Some(0),
            Route::Teams | Route::TeamDetail { .. } => Some(1),
            Route::Players | Route::PlayerDetail { .. } => Some(2),
            Route::Staff => Some(3),
            Route::Owners => Some(4),
            Route::Stats => Some(5),
            Route::NotFound { .. } => None,
        }
    }
}

/// Nav bar entries in display order, with the route each one opens.
pub const NAV_TABS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Teams", "/teams"),
    ("Players", "/players"),
    ("Staff", "/staff"),
    ("Owners", "/owners"),
    ("Stats", "/stats"),
];

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_table_entry() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/teams"), Route::Teams);
        assert_eq!(
            Route::parse("/teams/mi"),
            Route::TeamDetail {
                team_id: "mi".into()
            }
        );
        assert_eq!(Route::parse("/players"), Route::Players);
        assert_eq!(
            Route::parse("/players/mi-rohit-sharma"),
            Route::PlayerDetail {
                player_id: "mi-rohit-sharma".into()
            }
        );
        assert_eq!(Route::parse("/staff"), Route::Staff);
        assert_eq!(Route::parse("/owners"), Route::Owners);
        assert_eq!(Route::parse("/stats"), Route::Stats);
    }

    #[test]
    fn parse_is_total() {
        assert_eq!(
            Route::parse("/no/such/page"),
            Route::NotFound {
                path: "/no/such/page".into()
            }
        );
        assert_eq!(
            Route::parse("/teams/mi/extra"),
            Route::NotFound {
                path: "/teams/mi/extra".into()
            }
        );
    }

    #[test]
    fn tolerates_slash_variants() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("teams"), Route::Teams);
        assert_eq!(Route::parse("/teams/"), Route::Teams);
        assert_eq!(Route::parse("  /stats  "), Route::Stats);
    }

    #[test]
    fn path_round_trips() {
        let routes = [
            Route::Home,
            Route::Teams,
            Route::TeamDetail {
                team_id: "rcb".into(),
            },
            Route::Players,
            Route::PlayerDetail {
                player_id: "p1".into(),
            },
            Route::Staff,
            Route::Owners,
            Route::Stats,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn detail_routes_highlight_parent_tab() {
        assert_eq!(
            Route::TeamDetail {
                team_id: "mi".into()
            }
            .nav_index(),
            Some(1)
        );
        assert_eq!(
            Route::PlayerDetail {
                player_id: "x".into()
            }
            .nav_index(),
            Some(2)
        );
        assert_eq!(
            Route::NotFound {
                path: "/nope".into()
            }
            .nav_index(),
            None
        );
    }

    #[test]
    fn nav_tabs_parse_to_their_routes() {
        for (i, (_, path)) in NAV_TABS.iter().enumerate() {
            assert_eq!(Route::parse(path).nav_index(), Some(i));
        }
    }
}
