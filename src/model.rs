// Core league records: teams, players, games, and per-game statistics.
//
// These are plain data carriers with no lifecycle beyond in-memory CRUD.
// Teams and games are immutable in this system; only the player collection
// is mutated (through the admin screen) and mirrored to storage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub arena: String,
    pub founded: u16,
    pub logo_url: String,
    pub primary_color: String,
    pub wins: u32,
    pub losses: u32,
}

impl Team {
    /// Win-loss differential used for the standings ordering.
    pub fn record_diff(&self) -> i64 {
        self.wins as i64 - self.losses as i64
    }

    /// Win percentage over played games, or 0.0 when none have been played.
    pub fn win_rate(&self) -> f64 {
        let played = self.wins + self.losses;
        if played == 0 {
            return 0.0;
        }
        self.wins as f64 / played as f64 * 100.0
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// The five on-court positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "PG")]
    PointGuard,
    #[serde(rename = "SG")]
    ShootingGuard,
    #[serde(rename = "SF")]
    SmallForward,
    #[serde(rename = "PF")]
    PowerForward,
    #[serde(rename = "C")]
    Center,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    /// Short code as shown in rosters and filters ("PG", "SG", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Position::PointGuard => "Point Guard",
            Position::ShootingGuard => "Shooting Guard",
            Position::SmallForward => "Small Forward",
            Position::PowerForward => "Power Forward",
            Position::Center => "Center",
        }
    }

    /// Parse a short code. Accepts exactly the codes produced by `code()`.
    pub fn from_code(code: &str) -> Option<Position> {
        match code {
            "PG" => Some(Position::PointGuard),
            "SG" => Some(Position::ShootingGuard),
            "SF" => Some(Position::SmallForward),
            "PF" => Some(Position::PowerForward),
            "C" => Some(Position::Center),
            _ => None,
        }
    }
}

/// Season per-game averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonAverages {
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Reference to `Team.id`. Not validated anywhere: a stored snapshot may
    /// carry an id that matches no team, in which case views show "Unknown".
    pub team_id: String,
    pub position: Position,
    pub number: u32,
    /// Height in centimeters.
    pub height: u32,
    /// Weight in kilograms.
    pub weight: u32,
    pub nationality: String,
    /// ISO date string, e.g. "1987-11-15". Free-form in the editor.
    pub birth_date: String,
    pub stats: SeasonAverages,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Last First" key used for the lexicographic name sort.
    pub fn sort_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

/// A player record without an id, as captured by the admin editor. The
/// repository assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub first_name: String,
    pub last_name: String,
    pub team_id: String,
    pub position: Position,
    pub number: u32,
    pub height: u32,
    pub weight: u32,
    pub nationality: String,
    pub birth_date: String,
    pub stats: SeasonAverages,
}

impl PlayerDraft {
    pub fn into_player(self, id: String) -> Player {
        Player {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            team_id: self.team_id,
            position: self.position,
            number: self.number,
            height: self.height,
            weight: self.weight,
            nationality: self.nationality,
            birth_date: self.birth_date,
            stats: self.stats,
        }
    }
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Upcoming,
    Finished,
}

/// Per-quarter score breakdown for a finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterScores {
    pub home: Vec<u32>,
    pub away: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    /// Naive local date-time, e.g. "2025-01-05T20:00:00".
    pub date: chrono::NaiveDateTime,
    pub venue: String,
    pub status: GameStatus,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub quarter_scores: Option<QuarterScores>,
}

/// Violation of the game/score invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameInvariantError {
    #[error("finished game {id} is missing a final score")]
    MissingScore { id: String },

    #[error("upcoming game {id} carries a score")]
    UnexpectedScore { id: String },
}

impl Game {
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Check the status/score invariant: finished games carry both final
    /// scores, upcoming games carry neither.
    pub fn check_invariant(&self) -> Result<(), GameInvariantError> {
        match self.status {
            GameStatus::Finished => {
                if self.home_score.is_none() || self.away_score.is_none() {
                    return Err(GameInvariantError::MissingScore {
                        id: self.id.clone(),
                    });
                }
            }
            GameStatus::Upcoming => {
                if self.home_score.is_some() || self.away_score.is_some() {
                    return Err(GameInvariantError::UnexpectedScore {
                        id: self.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GameStats
// ---------------------------------------------------------------------------

/// Aggregate team line for one side of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGameStats {
    pub team_id: String,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fg_percentage: f64,
    pub three_percentage: f64,
    pub ft_percentage: f64,
}

/// Box-score line for one player in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameStats {
    pub player_id: String,
    pub team_id: String,
    pub minutes: u32,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fg_made: u32,
    pub fg_attempts: u32,
    pub three_made: u32,
    pub three_attempts: u32,
    pub ft_made: u32,
    pub ft_attempts: u32,
    pub efficiency: i32,
}

/// Full statistics sheet for one game: both team lines plus the individual
/// box scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub game_id: String,
    pub home_team: TeamGameStats,
    pub away_team: TeamGameStats,
    pub player_stats: Vec<PlayerGameStats>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
