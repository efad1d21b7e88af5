// Integration tests for the encyclopedia client.
//
// These exercise the real HTTP client and the orchestrator together against
// a local mock server that speaks just enough HTTP to serve canned JSON.
// Every request the server sees is recorded so tests can assert on the
// exact paths and query strings the client emitted.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use ipl_encyclopedia::api::{ApiBackend, ApiClient, ApiError, PlayerQuery};
use ipl_encyclopedia::app::{AppState, DataEvent};
use ipl_encyclopedia::config::ApiConfig;
use ipl_encyclopedia::model::Role;
use ipl_encyclopedia::protocol::{FetchStatus, UserCommand};
use ipl_encyclopedia::routes::Route;

// ===========================================================================
// Mock HTTP server
// ===========================================================================

type Router = Arc<dyn Fn(&str) -> (u16, String) + Send + Sync>;

/// Requests the server has seen, as "path?query" strings in arrival order.
type RequestLog = Arc<Mutex<Vec<String>>>;

/// Start a mock server. The router maps "path?query" to (status, body).
/// Connections are closed after one response.
async fn spawn_mock_server(router: Router) -> (SocketAddr, RequestLog) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let log_clone = Arc::clone(&log);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let router = Arc::clone(&router);
            let log = Arc::clone(&log_clone);
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();

                // "GET /path?query HTTP/1.1"
                let target = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                log.lock().unwrap().push(target.clone());

                let (status, body) = router(&target);
                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\
                     \r\n\
                     {body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.flush().await;
            });
        }
    });

    (addr, log)
}

/// Router serving a small consistent league across all endpoints.
fn league_router() -> Router {
    Arc::new(|target: &str| {
        let path = target.split('?').next().unwrap_or(target);
        let body = match path {
            "/api/teams" => {
                r#"[{"id":"mi","name":"Mumbai Indians","shortName":"MI","logo":"u1","homeGround":"Wankhede"},
                    {"id":"csk","name":"Chennai Super Kings","shortName":"CSK"}]"#
                    .to_string()
            }
            "/api/teams/mi" => r#"{
                "id": "mi",
                "name": "Mumbai Indians",
                "homeGround": "Wankhede",
                "captain": "Hardik Pandya",
                "roster": {
                    "batsmen": ["Rohit Sharma"],
                    "bowlers": ["Jasprit Bumrah"],
                    "allRounders": [],
                    "wicketkeepers": ["Ishan Kishan"]
                }
            }"#
            .to_string(),
            "/api/players" => {
                // A role filter narrows the result; bowlers are all taken.
                if target.contains("role=Bowler") {
                    "[]".to_string()
                } else {
                    r#"[{"id":"mi-rohit-sharma","name":"Rohit Sharma","role":"Batsman","teamName":"Mumbai Indians"}]"#
                        .to_string()
                }
            }
            "/api/players/mi-rohit-sharma" => r#"{
                "id": "mi-rohit-sharma",
                "name": "Rohit Sharma",
                "role": "Batsman",
                "teamName": "Mumbai Indians",
                "iplStats": { "matches": 243, "runs": 6211 }
            }"#
            .to_string(),
            "/api/staff" => {
                r#"[{"id":"s1","name":"Mahela Jayawardene","role":"Head Coach","teamName":"Mumbai Indians"}]"#
                    .to_string()
            }
            "/api/owners" => {
                r#"[{"id":"o1","name":"Reliance Industries","teamName":"Mumbai Indians"}]"#
                    .to_string()
            }
            "/api/stats/top-runs" => {
                r#"[{"name":"Virat Kohli","runs":7263},{"name":"Rohit Sharma","runs":6211}]"#
                    .to_string()
            }
            "/api/stats/top-wickets" => "[]".to_string(),
            _ => return (404, "{\"error\":\"not found\"}".to_string()),
        };
        (200, body)
    })
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
    })
    .unwrap()
}

/// Drain `n` fetch results into the state.
async fn pump(state: &mut AppState, data_rx: &mut mpsc::Receiver<DataEvent>, n: usize) {
    for _ in 0..n {
        let event = data_rx.recv().await.expect("fetch task should report");
        state.apply_event(event);
    }
}

// ===========================================================================
// HTTP client
// ===========================================================================

#[tokio::test]
async fn client_decodes_team_list() {
    let (addr, _log) = spawn_mock_server(league_router()).await;
    let client = client_for(addr);

    let teams = client.teams().await.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].name, "Mumbai Indians");
    assert_eq!(teams[0].short_name.as_deref(), Some("MI"));
    assert_eq!(teams[0].home_ground.as_deref(), Some("Wankhede"));
}

#[tokio::test]
async fn client_decodes_single_team_with_roster() {
    let (addr, _log) = spawn_mock_server(league_router()).await;
    let client = client_for(addr);

    let team = client.team("mi").await.unwrap();
    assert_eq!(team.roster.batsmen, vec!["Rohit Sharma"]);
    assert!(team.roster.all_rounders.is_empty());
}

#[tokio::test]
async fn players_request_carries_only_nonempty_params() {
    let (addr, log) = spawn_mock_server(league_router()).await;
    let client = client_for(addr);

    client.players(&PlayerQuery::default()).await.unwrap();
    client
        .players(&PlayerQuery {
            q: "rohit".into(),
            role: Some(Role::Batsman),
            team: Some("mi".into()),
        })
        .await
        .unwrap();
    client
        .players(&PlayerQuery {
            role: Some(Role::Bowler),
            ..Default::default()
        })
        .await
        .unwrap();

    let requests = log.lock().unwrap().clone();
    assert_eq!(requests[0], "/api/players");
    assert_eq!(requests[1], "/api/players?q=rohit&role=Batsman&team=mi");
    assert_eq!(requests[2], "/api/players?role=Bowler");
}

#[tokio::test]
async fn staff_and_owners_scope_by_team_param() {
    let (addr, log) = spawn_mock_server(league_router()).await;
    let client = client_for(addr);

    client.staff(None).await.unwrap();
    client.staff(Some("mi")).await.unwrap();
    client.owners(Some("csk")).await.unwrap();

    let requests = log.lock().unwrap().clone();
    assert_eq!(requests[0], "/api/staff");
    assert_eq!(requests[1], "/api/staff?team=mi");
    assert_eq!(requests[2], "/api/owners?team=csk");
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let (addr, _log) = spawn_mock_server(league_router()).await;
    let client = client_for(addr);

    let err = client.player("unknown-player").await.unwrap_err();
    match err {
        ApiError::Status { status, path } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(path, "/api/players/unknown-player");
        }
        other => panic!("expected Status error, got: {other}"),
    }
}

#[tokio::test]
async fn invalid_json_maps_to_parse_error() {
    let router: Router = Arc::new(|_| (200, "this is not json".to_string()));
    let (addr, _log) = spawn_mock_server(router).await;
    let client = client_for(addr);

    let err = client.teams().await.unwrap_err();
    assert!(matches!(err, ApiError::Parse { .. }), "got: {err}");
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    // Bind and immediately drop a listener so the port refuses connections.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let err = client.teams().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got: {err}");
}

// ===========================================================================
// Orchestrator over the real client
// ===========================================================================

#[tokio::test]
async fn teams_route_loads_team_cards() {
    let (addr, _log) = spawn_mock_server(league_router()).await;
    let api = Arc::new(client_for(addr));

    let (data_tx, mut data_rx) = mpsc::channel(64);
    let mut state = AppState::new(api, data_tx, Route::Teams);
    pump(&mut state, &mut data_rx, 1).await;

    let snapshot = state.build_snapshot();
    assert_eq!(snapshot.teams.status, FetchStatus::Loaded);
    let teams = snapshot.teams.data.unwrap();
    assert_eq!(teams[0].name, "Mumbai Indians");
    assert_eq!(teams[0].short_name.as_deref(), Some("MI"));
}

#[tokio::test]
async fn bowler_filter_yields_empty_grid_without_error() {
    let (addr, _log) = spawn_mock_server(league_router()).await;
    let api = Arc::new(client_for(addr));

    let (data_tx, mut data_rx) = mpsc::channel(64);
    let mut state = AppState::new(api, data_tx, Route::Players);
    pump(&mut state, &mut data_rx, 2).await;

    state.handle_command(UserCommand::RoleFilter(Some(Role::Bowler)));
    pump(&mut state, &mut data_rx, 1).await;

    let snapshot = state.build_snapshot();
    assert_eq!(snapshot.players.status, FetchStatus::Loaded);
    assert!(snapshot.players.data.unwrap().is_empty());
}

#[tokio::test]
async fn team_detail_is_fetched_once_per_id() {
    let (addr, log) = spawn_mock_server(league_router()).await;
    let api = Arc::new(client_for(addr));

    let (data_tx, mut data_rx) = mpsc::channel(64);
    let mut state = AppState::new(
        api,
        data_tx,
        Route::TeamDetail {
            team_id: "mi".into(),
        },
    );
    pump(&mut state, &mut data_rx, 1).await;

    state.handle_command(UserCommand::Navigate(Route::TeamDetail {
        team_id: "mi".into(),
    }));

    let detail_requests: Vec<String> = log
        .lock()
        .unwrap()
        .iter()
        .filter(|t| t.starts_with("/api/teams/"))
        .cloned()
        .collect();
    assert_eq!(detail_requests, ["/api/teams/mi"]);
}

#[tokio::test]
async fn server_error_surfaces_as_failed_with_retry() {
    let healthy = league_router();
    let broken = Arc::new(std::sync::atomic::AtomicBool::new(true));
    let broken_flag = Arc::clone(&broken);
    let router: Router = Arc::new(move |target| {
        if broken_flag.load(std::sync::atomic::Ordering::SeqCst) {
            (500, "{\"error\":\"boom\"}".to_string())
        } else {
            healthy(target)
        }
    });
    let (addr, _log) = spawn_mock_server(router).await;
    let api = Arc::new(client_for(addr));

    let (data_tx, mut data_rx) = mpsc::channel(64);
    let mut state = AppState::new(api, data_tx, Route::Teams);
    pump(&mut state, &mut data_rx, 1).await;
    assert!(state.build_snapshot().teams.status.is_failed());

    // The server recovers; retry loads the list.
    broken.store(false, std::sync::atomic::Ordering::SeqCst);
    state.handle_command(UserCommand::Retry);
    pump(&mut state, &mut data_rx, 1).await;
    assert_eq!(state.build_snapshot().teams.status, FetchStatus::Loaded);
}

#[tokio::test]
async fn late_response_from_superseded_search_is_discarded() {
    // The unfiltered players request stalls; the narrowed one answers
    // immediately. The stalled response arrives last and must not win.
    let router: Router = Arc::new(|target: &str| {
        let path = target.split('?').next().unwrap_or(target);
        match path {
            "/api/teams" => (200, "[]".to_string()),
            "/api/players" if target.contains("q=") => (
                200,
                r#"[{"id":"p-new","name":"Newer Result"}]"#.to_string(),
            ),
            "/api/players" => (
                200,
                r#"[{"id":"p-old","name":"Stale Result"}]"#.to_string(),
            ),
            _ => (404, "{}".to_string()),
        }
    });

    // Wrap the real client so the unfiltered request is delayed past the
    // filtered one.
    struct SlowUnfiltered(ApiClient);

    #[async_trait::async_trait]
    impl ApiBackend for SlowUnfiltered {
        async fn teams(&self) -> Result<Vec<ipl_encyclopedia::model::Team>, ApiError> {
            self.0.teams().await
        }
        async fn team(&self, id: &str) -> Result<ipl_encyclopedia::model::Team, ApiError> {
            self.0.team(id).await
        }
        async fn players(
            &self,
            query: &PlayerQuery,
        ) -> Result<Vec<ipl_encyclopedia::model::Player>, ApiError> {
            if query.q.is_empty() {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            }
            self.0.players(query).await
        }
        async fn player(
            &self,
            id: &str,
        ) -> Result<ipl_encyclopedia::model::Player, ApiError> {
            self.0.player(id).await
        }
        async fn staff(
            &self,
            team: Option<&str>,
        ) -> Result<Vec<ipl_encyclopedia::model::StaffMember>, ApiError> {
            self.0.staff(team).await
        }
        async fn owners(
            &self,
            team: Option<&str>,
        ) -> Result<Vec<ipl_encyclopedia::model::Owner>, ApiError> {
            self.0.owners(team).await
        }
        async fn top_runs(&self) -> Result<Vec<ipl_encyclopedia::model::RunsEntry>, ApiError> {
            self.0.top_runs().await
        }
        async fn top_wickets(
            &self,
        ) -> Result<Vec<ipl_encyclopedia::model::WicketsEntry>, ApiError> {
            self.0.top_wickets().await
        }
    }

    let (addr, _log) = spawn_mock_server(router).await;
    let api = Arc::new(SlowUnfiltered(client_for(addr)));

    let (data_tx, mut data_rx) = mpsc::channel(64);
    let mut state = AppState::new(api, data_tx, Route::Players);

    // Supersede the in-flight unfiltered request before it resolves.
    state.handle_command(UserCommand::SearchInput("new".into()));

    // Three results arrive: teams, the filtered players, then the stale
    // unfiltered players last.
    pump(&mut state, &mut data_rx, 3).await;

    let snapshot = state.build_snapshot();
    assert_eq!(snapshot.players.status, FetchStatus::Loaded);
    let players = snapshot.players.data.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Newer Result");
}

#[tokio::test]
async fn full_browse_session() {
    let (addr, log) = spawn_mock_server(league_router()).await;
    let api = Arc::new(client_for(addr));

    let (data_tx, mut data_rx) = mpsc::channel(64);
    let mut state = AppState::new(api, data_tx, Route::Home);
    pump(&mut state, &mut data_rx, 1).await;

    // Home -> team detail -> roster player -> stats.
    state.handle_command(UserCommand::Navigate(Route::TeamDetail {
        team_id: "mi".into(),
    }));
    pump(&mut state, &mut data_rx, 1).await;

    state.handle_command(UserCommand::Navigate(Route::PlayerDetail {
        player_id: "mi-rohit-sharma".into(),
    }));
    pump(&mut state, &mut data_rx, 1).await;

    state.handle_command(UserCommand::Navigate(Route::Stats));
    pump(&mut state, &mut data_rx, 2).await;

    let snapshot = state.build_snapshot();
    assert_eq!(snapshot.team_detail.status, FetchStatus::Loaded);
    assert_eq!(
        snapshot.player_detail.data.as_ref().unwrap().name,
        "Rohit Sharma"
    );
    assert_eq!(snapshot.top_runs.data.as_ref().unwrap().len(), 2);
    // An empty leaderboard is a loaded state, not an error.
    assert_eq!(snapshot.top_wickets.status, FetchStatus::Loaded);
    assert!(snapshot.top_wickets.data.unwrap().is_empty());

    let requests = log.lock().unwrap().clone();
    assert!(requests.contains(&"/api/teams".to_string()));
    assert!(requests.contains(&"/api/teams/mi".to_string()));
    assert!(requests.contains(&"/api/players/mi-rohit-sharma".to_string()));
    assert!(requests.contains(&"/api/stats/top-runs".to_string()));
    assert!(requests.contains(&"/api/stats/top-wickets".to_string()));
}
