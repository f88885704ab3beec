// League data access.
//
// The repository is the single owner of the in-memory collections and the
// only writer of the player snapshot. Views receive a reference to it
// instead of reaching into ambient shared state. Teams, games, and stats are
// fixed; only players change, and every change rewrites the whole snapshot.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::model::{Game, GameStats, Player, PlayerDraft, Team};
use crate::store::{self, SnapshotStore, StoreError, PLAYERS_KEY};
use crate::{seed, store::load_typed};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("player {id} not found")]
    PlayerNotFound { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// LeagueRepository
// ---------------------------------------------------------------------------

pub struct LeagueRepository {
    teams: Vec<Team>,
    players: Vec<Player>,
    games: Vec<Game>,
    stats: Vec<GameStats>,
    store: Arc<dyn SnapshotStore>,
    /// Simulated latency applied to each player mutation. Cosmetic only.
    mutation_delay: Duration,
}

impl LeagueRepository {
    /// Build a repository over `store`.
    ///
    /// Teams, games, and per-game statistics always come from the seed
    /// dataset. The player collection is restored from the stored snapshot
    /// when one exists; a corrupt snapshot is discarded in favor of the seed
    /// rather than failing startup.
    pub fn open(store: Arc<dyn SnapshotStore>, mutation_delay: Duration) -> Self {
        let players = match load_typed::<Vec<Player>>(store.as_ref(), PLAYERS_KEY) {
            Ok(Some(players)) => {
                info!("restored {} players from snapshot", players.len());
                players
            }
            Ok(None) => seed::players(),
            Err(e) => {
                warn!("discarding unreadable player snapshot: {e}");
                seed::players()
            }
        };

        Self {
            teams: seed::teams(),
            players,
            games: seed::games(),
            stats: seed::game_stats(),
            store,
            mutation_delay,
        }
    }

    // -- read accessors -----------------------------------------------------

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn team_by_id(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn player_by_id(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Exactly the players whose `team_id` equals `team_id`.
    pub fn players_by_team(&self, team_id: &str) -> Vec<&Player> {
        self.players.iter().filter(|p| p.team_id == team_id).collect()
    }

    pub fn game_by_id(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn stats_for_game(&self, game_id: &str) -> Option<&GameStats> {
        self.stats.iter().find(|s| s.game_id == game_id)
    }

    // -- player mutations ---------------------------------------------------

    /// Append a new player built from `draft` and persist the collection.
    ///
    /// The id is derived from the current millisecond timestamp. The team
    /// reference is stored as given; it is not checked against the team
    /// collection.
    pub async fn add_player(&mut self, draft: PlayerDraft) -> Result<Player, RepoError> {
        tokio::time::sleep(self.mutation_delay).await;

        let id = format!("p{}", Utc::now().timestamp_millis());
        let player = draft.into_player(id);
        self.players.push(player.clone());
        self.persist()?;
        info!(player = %player.full_name(), id = %player.id, "player added");
        Ok(player)
    }

    /// Replace the record with id `id` by `draft` (keeping the id) and
    /// persist the collection.
    pub async fn update_player(&mut self, id: &str, draft: PlayerDraft) -> Result<(), RepoError> {
        tokio::time::sleep(self.mutation_delay).await;

        let slot = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RepoError::PlayerNotFound { id: id.to_string() })?;
        *slot = draft.into_player(id.to_string());
        self.persist()?;
        info!(id, "player updated");
        Ok(())
    }

    /// Remove the record with id `id` and persist the collection. Exactly
    /// one record is removed; all others are left untouched.
    pub async fn delete_player(&mut self, id: &str) -> Result<(), RepoError> {
        tokio::time::sleep(self.mutation_delay).await;

        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        if self.players.len() == before {
            return Err(RepoError::PlayerNotFound { id: id.to_string() });
        }
        self.persist()?;
        info!(id, "player deleted");
        Ok(())
    }

    /// Whole-collection snapshot write. Runs after every successful mutation.
    fn persist(&self) -> Result<(), StoreError> {
        store::save_typed(self.store.as_ref(), PLAYERS_KEY, &self.players)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
