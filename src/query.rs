// List shaping: filtering, sorting, and the derived views the screens show.
//
// All functions here are pure over repository slices. The screens call them
// on every render rather than caching the results, which keeps the derived
// lists trivially in sync with the player collection.

use crate::model::{Game, Player, Position, Team};

// ---------------------------------------------------------------------------
// Player filtering and sorting
// ---------------------------------------------------------------------------

/// Active filters on the player list. All criteria are conjunctive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
    /// Case-insensitive substring match against the player's full name.
    pub search: String,
    /// Restrict to one team when set.
    pub team_id: Option<String>,
    /// Restrict to one position when set.
    pub position: Option<Position>,
}

impl PlayerFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.team_id.is_none() && self.position.is_none()
    }

    fn matches(&self, player: &Player) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !player.full_name().to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(team_id) = &self.team_id {
            if &player.team_id != team_id {
                return false;
            }
        }
        if let Some(position) = self.position {
            if player.position != position {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSortKey {
    Name,
    Points,
    Rebounds,
    Assists,
    Efficiency,
}

impl PlayerSortKey {
    pub const ALL: [PlayerSortKey; 5] = [
        PlayerSortKey::Name,
        PlayerSortKey::Points,
        PlayerSortKey::Rebounds,
        PlayerSortKey::Assists,
        PlayerSortKey::Efficiency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlayerSortKey::Name => "Name",
            PlayerSortKey::Points => "PPG",
            PlayerSortKey::Rebounds => "RPG",
            PlayerSortKey::Assists => "APG",
            PlayerSortKey::Efficiency => "EFF",
        }
    }

    /// Default direction when this key is first selected: names read top-down
    /// alphabetically, statistics lead with the highest value.
    pub fn default_ascending(&self) -> bool {
        matches!(self, PlayerSortKey::Name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSort {
    pub key: PlayerSortKey,
    pub ascending: bool,
}

impl Default for PlayerSort {
    fn default() -> Self {
        // Efficiency, best first.
        PlayerSort {
            key: PlayerSortKey::Efficiency,
            ascending: false,
        }
    }
}

/// Apply `filter` then `sort` to the full player slice, returning references
/// in display order.
pub fn filter_and_sort_players<'a>(
    players: &'a [Player],
    filter: &PlayerFilter,
    sort: PlayerSort,
) -> Vec<&'a Player> {
    let mut out: Vec<&Player> = players.iter().filter(|p| filter.matches(p)).collect();
    out.sort_by(|a, b| match sort.key {
        PlayerSortKey::Name => a.sort_name().cmp(&b.sort_name()),
        PlayerSortKey::Points => a.stats.ppg.total_cmp(&b.stats.ppg),
        PlayerSortKey::Rebounds => a.stats.rpg.total_cmp(&b.stats.rpg),
        PlayerSortKey::Assists => a.stats.apg.total_cmp(&b.stats.apg),
        PlayerSortKey::Efficiency => a.stats.efficiency.total_cmp(&b.stats.efficiency),
    });
    // Reversing the sorted list, rather than reversing the comparator, keeps
    // the two directions exact mirrors of each other even across tied keys
    // (a reversed comparator under a stable sort leaves ties in insertion
    // order both ways).
    if !sort.ascending {
        out.reverse();
    }
    out
}

// ---------------------------------------------------------------------------
// Team standings
// ---------------------------------------------------------------------------

/// Teams ordered by win-loss differential, best record first.
pub fn standings(teams: &[Team]) -> Vec<&Team> {
    let mut out: Vec<&Team> = teams.iter().collect();
    out.sort_by_key(|t| std::cmp::Reverse(t.record_diff()));
    out
}

// ---------------------------------------------------------------------------
// Game schedules
// ---------------------------------------------------------------------------

/// Upcoming games, soonest first.
pub fn fixtures(games: &[Game]) -> Vec<&Game> {
    let mut out: Vec<&Game> = games.iter().filter(|g| !g.is_finished()).collect();
    out.sort_by_key(|g| g.date);
    out
}

/// Finished games, most recent first.
pub fn results(games: &[Game]) -> Vec<&Game> {
    let mut out: Vec<&Game> = games.iter().filter(|g| g.is_finished()).collect();
    out.sort_by_key(|g| std::cmp::Reverse(g.date));
    out
}

// ---------------------------------------------------------------------------
// Home summary
// ---------------------------------------------------------------------------

/// The front screen's digest: the next games, the latest results, and the
/// head of the standings table.
pub struct HomeSummary<'a> {
    pub next_games: Vec<&'a Game>,
    pub latest_results: Vec<&'a Game>,
    pub top_teams: Vec<&'a Team>,
}

pub fn home_summary<'a>(teams: &'a [Team], games: &'a [Game]) -> HomeSummary<'a> {
    let mut next_games = fixtures(games);
    next_games.truncate(2);
    let mut latest_results = results(games);
    latest_results.truncate(2);
    let mut top_teams = standings(teams);
    top_teams.truncate(4);
    HomeSummary {
        next_games,
        latest_results,
        top_teams,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn search_matches_full_name_case_insensitively() {
        let players = seed::players();
        let filter = PlayerFilter {
            search: "sergio".into(),
            ..Default::default()
        };
        let hits = filter_and_sort_players(&players, &filter, PlayerSort::default());
        // Sergio Llull and Sergio Rodriguez.
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.first_name == "Sergio"));

        let filter = PlayerFilter {
            search: "gio LLu".into(),
            ..Default::default()
        };
        let hits = filter_and_sort_players(&players, &filter, PlayerSort::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p1");
    }

    #[test]
    fn team_and_position_filters_are_conjunctive() {
        let players = seed::players();
        let filter = PlayerFilter {
            search: String::new(),
            team_id: Some("rm".into()),
            position: Some(Position::Center),
        };
        let hits = filter_and_sort_players(&players, &filter, PlayerSort::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p2"); // Tavares
    }

    #[test]
    fn no_match_yields_empty_list() {
        let players = seed::players();
        let filter = PlayerFilter {
            search: "zzzz".into(),
            ..Default::default()
        };
        assert!(filter_and_sort_players(&players, &filter, PlayerSort::default()).is_empty());
    }

    #[test]
    fn efficiency_sort_descends_by_default_and_reverses_cleanly() {
        let players = seed::players();
        let filter = PlayerFilter::default();

        let desc = filter_and_sort_players(&players, &filter, PlayerSort::default());
        assert_eq!(desc.len(), players.len());
        for pair in desc.windows(2) {
            assert!(pair[0].stats.efficiency >= pair[1].stats.efficiency);
        }
        assert_eq!(desc[0].id, "p11"); // Mike James, 20.1

        let asc = filter_and_sort_players(
            &players,
            &filter,
            PlayerSort {
                key: PlayerSortKey::Efficiency,
                ascending: true,
            },
        );
        let reversed: Vec<&str> = desc.iter().rev().map(|p| p.id.as_str()).collect();
        let asc_ids: Vec<&str> = asc.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(asc_ids, reversed);
    }

    #[test]
    fn tied_keys_reverse_with_the_rest_of_the_list() {
        // Hezonja (p3) and Spanoulis (p7) share an efficiency of 15.8.
        let players = seed::players();
        let filter = PlayerFilter {
            search: String::new(),
            team_id: None,
            position: None,
        };
        let sort = |ascending| PlayerSort {
            key: PlayerSortKey::Efficiency,
            ascending,
        };

        let desc = filter_and_sort_players(&players, &filter, sort(false));
        let asc = filter_and_sort_players(&players, &filter, sort(true));

        let desc_pos = |id: &str| desc.iter().position(|p| p.id == id).unwrap();
        let asc_pos = |id: &str| asc.iter().position(|p| p.id == id).unwrap();
        for id in ["p3", "p7"] {
            assert_eq!(desc_pos(id), desc.len() - 1 - asc_pos(id), "{id}");
        }
    }

    #[test]
    fn name_sort_uses_last_name_first() {
        let players = seed::players();
        let sorted = filter_and_sort_players(
            &players,
            &PlayerFilter::default(),
            PlayerSort {
                key: PlayerSortKey::Name,
                ascending: true,
            },
        );
        assert_eq!(sorted[0].id, "p13"); // Brown, Lorenzo
        for pair in sorted.windows(2) {
            assert!(pair[0].sort_name() <= pair[1].sort_name());
        }
    }

    #[test]
    fn standings_order_by_record_differential() {
        let teams = seed::teams();
        let table = standings(&teams);
        assert_eq!(table[0].id, "rm"); // 18-6
        assert_eq!(table.last().unwrap().id, "mil"); // 10-14
        for pair in table.windows(2) {
            assert!(pair[0].record_diff() >= pair[1].record_diff());
        }
    }

    #[test]
    fn fixtures_ascend_and_results_descend_by_date() {
        let games = seed::games();

        let upcoming = fixtures(&games);
        assert_eq!(upcoming.len(), 4);
        assert!(upcoming.iter().all(|g| !g.is_finished()));
        for pair in upcoming.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }

        let finished = results(&games);
        assert_eq!(finished.len(), 4);
        assert!(finished.iter().all(|g| g.is_finished()));
        for pair in finished.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        assert_eq!(finished[0].id, "g5"); // most recent result
    }

    #[test]
    fn home_summary_takes_the_heads() {
        let teams = seed::teams();
        let games = seed::games();
        let summary = home_summary(&teams, &games);

        assert_eq!(summary.next_games.len(), 2);
        assert_eq!(summary.next_games[0].id, "g1");
        assert_eq!(summary.latest_results.len(), 2);
        assert_eq!(summary.latest_results[0].id, "g5");
        assert_eq!(summary.top_teams.len(), 4);
        assert_eq!(summary.top_teams[0].id, "rm");
    }
}
