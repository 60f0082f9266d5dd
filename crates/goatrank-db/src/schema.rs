//! Table names and DDL for the SQLite schema.

pub const TABLE_PLAYERS: &str = "players";
pub const TABLE_CAREER_STATS: &str = "career_stats";
pub const TABLE_ACHIEVEMENTS: &str = "achievements";
pub const TABLE_USER_SESSIONS: &str = "user_sessions";

/// Statements run by `Database::initialize`, in order.
/// All are idempotent.
pub const CREATE_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS players (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        nba_id      INTEGER NOT NULL UNIQUE,
        full_name   TEXT    NOT NULL,
        first_name  TEXT,
        last_name   TEXT,
        position    TEXT,
        height      TEXT,
        weight      INTEGER,
        from_year   INTEGER,
        to_year     INTEGER,
        is_active   BOOLEAN NOT NULL DEFAULT 0,
        teams       TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS career_stats (
        player_id               INTEGER PRIMARY KEY REFERENCES players(id) ON DELETE CASCADE,
        games_played            INTEGER,
        games_started           INTEGER,
        minutes_per_game        REAL,
        points_per_game         REAL,
        rebounds_per_game       REAL,
        assists_per_game        REAL,
        steals_per_game         REAL,
        blocks_per_game         REAL,
        turnovers_per_game      REAL,
        field_goal_percentage   REAL,
        three_point_percentage  REAL,
        free_throw_percentage   REAL,
        total_points            INTEGER,
        total_rebounds          INTEGER,
        total_assists           INTEGER
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS achievements (
        player_id                 INTEGER PRIMARY KEY REFERENCES players(id) ON DELETE CASCADE,
        championships             INTEGER NOT NULL DEFAULT 0,
        finals_appearances        INTEGER NOT NULL DEFAULT 0,
        mvp_awards                INTEGER NOT NULL DEFAULT 0,
        finals_mvp_awards         INTEGER NOT NULL DEFAULT 0,
        all_star_selections       INTEGER NOT NULL DEFAULT 0,
        all_nba_first_team        INTEGER NOT NULL DEFAULT 0,
        all_defensive_first_team  INTEGER NOT NULL DEFAULT 0,
        hall_of_fame              BOOLEAN NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_sessions (
        session_id               TEXT PRIMARY KEY,
        offense_weight           REAL NOT NULL,
        defense_weight           REAL NOT NULL,
        team_success_weight      REAL NOT NULL,
        longevity_weight         REAL NOT NULL,
        efficiency_weight        REAL NOT NULL,
        peak_performance_weight  REAL NOT NULL,
        era_preference           TEXT NOT NULL DEFAULT 'any',
        ranked_players           TEXT,
        ip_address               TEXT,
        created_at               TEXT NOT NULL,
        completed_at             TEXT
    )
    "#,
];
