// Widget modules, one per screen plus the shared chrome.

pub mod admin;
pub mod game_detail;
pub mod header;
pub mod home;
pub mod login;
pub mod not_found;
pub mod player_detail;
pub mod players;
pub mod schedule;
pub mod team_detail;
pub mod teams;

use crate::app::App;

/// Resolve a team id to its display name, or "Unknown" for a dangling
/// reference.
pub fn team_name<'a>(app: &'a App, team_id: &str) -> &'a str {
    app.repo
        .team_by_id(team_id)
        .map(|t| t.name.as_str())
        .unwrap_or("Unknown")
}

/// Schedule date format shared by the fixtures, results, and game screens.
pub fn format_date(date: &chrono::NaiveDateTime) -> String {
    date.format("%d %b %Y %H:%M").to_string()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::app::App;
    use crate::auth::{SessionManager, StaticAuthenticator};
    use crate::repository::LeagueRepository;
    use crate::store::{MemoryStore, SnapshotStore};

    /// App over an empty in-memory store, seeded with the static dataset.
    pub fn test_app() -> App {
        let store: Arc<dyn SnapshotStore> = Arc::new(MemoryStore::new());
        App::new(
            LeagueRepository::open(Arc::clone(&store), Duration::ZERO),
            SessionManager::restore(store),
            Box::new(StaticAuthenticator::new(Duration::ZERO)),
        )
    }
}
