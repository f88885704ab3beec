// Static league dataset.
//
// Used as the initial contents of the repository when storage holds no
// player snapshot. Teams, games, and game statistics always come from here;
// the player collection is replaced by the stored snapshot when one exists.

use chrono::NaiveDateTime;

use crate::model::{
    Game, GameStats, GameStatus, Player, PlayerGameStats, Position, QuarterScores, SeasonAverages,
    Team, TeamGameStats,
};

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("valid seed timestamp")
}

#[allow(clippy::too_many_arguments)]
fn team(
    id: &str,
    name: &str,
    city: &str,
    country: &str,
    arena: &str,
    founded: u16,
    primary_color: &str,
    wins: u32,
    losses: u32,
) -> Team {
    Team {
        id: id.into(),
        name: name.into(),
        city: city.into(),
        country: country.into(),
        arena: arena.into(),
        founded,
        logo_url: format!("assets/logos/{id}.png"),
        primary_color: primary_color.into(),
        wins,
        losses,
    }
}

#[allow(clippy::too_many_arguments)]
fn player(
    id: &str,
    first: &str,
    last: &str,
    team_id: &str,
    position: Position,
    number: u32,
    height: u32,
    weight: u32,
    nationality: &str,
    birth_date: &str,
    stats: [f64; 4],
) -> Player {
    Player {
        id: id.into(),
        first_name: first.into(),
        last_name: last.into(),
        team_id: team_id.into(),
        position,
        number,
        height,
        weight,
        nationality: nationality.into(),
        birth_date: birth_date.into(),
        stats: SeasonAverages {
            ppg: stats[0],
            rpg: stats[1],
            apg: stats[2],
            efficiency: stats[3],
        },
    }
}

pub fn teams() -> Vec<Team> {
    vec![
        team("rm", "Real Madrid", "Madrid", "Spain", "WiZink Center", 1931, "#FFFFFF", 18, 6),
        team("bar", "FC Barcelona", "Barcelona", "Spain", "Palau Blaugrana", 1926, "#A50044", 17, 7),
        team(
            "oly",
            "Olympiacos",
            "Piraeus",
            "Greece",
            "Peace and Friendship Stadium",
            1931,
            "#CC0000",
            15,
            9,
        ),
        team(
            "fen",
            "Fenerbahçe",
            "Istanbul",
            "Turkey",
            "Ülker Sports Arena",
            1913,
            "#FFED00",
            14,
            10,
        ),
        team("cska", "CSKA Moscow", "Moscow", "Russia", "Megasport Arena", 1924, "#ED1B2F", 13, 11),
        team(
            "mac",
            "Maccabi Tel Aviv",
            "Tel Aviv",
            "Israel",
            "Menora Mivtachim Arena",
            1932,
            "#FFD100",
            12,
            12,
        ),
        team(
            "pao",
            "Panathinaikos",
            "Athens",
            "Greece",
            "OAKA Indoor Hall",
            1919,
            "#008749",
            11,
            13,
        ),
        team(
            "mil",
            "EA7 Emporio Armani Milano",
            "Milan",
            "Italy",
            "Mediolanum Forum",
            1936,
            "#CE0037",
            10,
            14,
        ),
    ]
}

pub fn players() -> Vec<Player> {
    use Position::*;
    vec![
        player("p1", "Sergio", "Llull", "rm", PointGuard, 23, 190, 93, "Spain", "1987-11-15", [12.5, 2.1, 5.8, 14.2]),
        player("p2", "Walter", "Tavares", "rm", Center, 22, 220, 120, "Cape Verde", "1992-03-22", [10.8, 8.4, 1.2, 18.5]),
        player("p3", "Mario", "Hezonja", "rm", SmallForward, 8, 203, 100, "Croatia", "1995-02-25", [14.2, 4.5, 2.3, 15.8]),
        player("p4", "Nikola", "Mirotic", "bar", PowerForward, 33, 208, 107, "Spain", "1991-02-11", [16.8, 6.2, 1.8, 19.4]),
        player("p5", "Cory", "Higgins", "bar", ShootingGuard, 22, 196, 92, "USA", "1989-06-14", [11.2, 2.8, 2.5, 12.6]),
        player("p6", "Nicolas", "Laprovittola", "bar", PointGuard, 20, 183, 80, "Argentina", "1990-01-31", [10.4, 1.9, 4.8, 11.2]),
        player("p7", "Vassilis", "Spanoulis", "oly", PointGuard, 7, 191, 91, "Greece", "1982-08-07", [13.4, 2.2, 6.1, 15.8]),
        player("p8", "Sasha", "Vezenkov", "oly", PowerForward, 8, 206, 102, "Bulgaria", "1995-08-04", [15.6, 5.8, 2.1, 17.2]),
        player("p9", "Nando", "De Colo", "fen", ShootingGuard, 1, 196, 91, "France", "1987-06-23", [14.8, 3.1, 4.2, 16.4]),
        player("p10", "Jan", "Vesely", "fen", PowerForward, 24, 213, 108, "Czech Republic", "1990-04-24", [12.2, 5.4, 2.8, 15.1]),
        player("p11", "Mike", "James", "cska", PointGuard, 5, 185, 82, "USA", "1990-08-18", [18.4, 3.2, 5.6, 20.1]),
        player("p12", "Nikola", "Milutinov", "cska", Center, 21, 213, 118, "Serbia", "1994-11-30", [9.8, 7.2, 1.4, 14.6]),
        player("p13", "Lorenzo", "Brown", "mac", PointGuard, 3, 196, 85, "Spain", "1990-08-30", [11.6, 3.4, 5.2, 13.8]),
        player("p14", "Georgios", "Papagiannis", "pao", Center, 5, 216, 120, "Greece", "1997-07-01", [8.4, 6.8, 1.1, 12.4]),
        player("p15", "Sergio", "Rodriguez", "mil", PointGuard, 13, 191, 83, "Spain", "1986-06-12", [10.2, 2.0, 6.8, 13.2]),
    ]
}

pub fn games() -> Vec<Game> {
    let upcoming = |id: &str, home: &str, away: &str, date: &str, venue: &str| Game {
        id: id.into(),
        home_team_id: home.into(),
        away_team_id: away.into(),
        date: dt(date),
        venue: venue.into(),
        status: GameStatus::Upcoming,
        home_score: None,
        away_score: None,
        quarter_scores: None,
    };
    let finished = |id: &str,
                    home: &str,
                    away: &str,
                    date: &str,
                    venue: &str,
                    score: (u32, u32),
                    quarters: ([u32; 4], [u32; 4])| Game {
        id: id.into(),
        home_team_id: home.into(),
        away_team_id: away.into(),
        date: dt(date),
        venue: venue.into(),
        status: GameStatus::Finished,
        home_score: Some(score.0),
        away_score: Some(score.1),
        quarter_scores: Some(QuarterScores {
            home: quarters.0.to_vec(),
            away: quarters.1.to_vec(),
        }),
    };

    vec![
        upcoming("g1", "rm", "bar", "2025-01-05T20:00:00", "WiZink Center"),
        upcoming("g2", "oly", "fen", "2025-01-06T19:00:00", "Peace and Friendship Stadium"),
        upcoming("g3", "cska", "mac", "2025-01-07T18:00:00", "Megasport Arena"),
        upcoming("g4", "pao", "mil", "2025-01-08T20:30:00", "OAKA Indoor Hall"),
        finished(
            "g5",
            "rm",
            "oly",
            "2024-12-20T20:00:00",
            "WiZink Center",
            (85, 78),
            ([22, 18, 24, 21], [20, 19, 18, 21]),
        ),
        finished(
            "g6",
            "bar",
            "cska",
            "2024-12-19T19:00:00",
            "Palau Blaugrana",
            (92, 88),
            ([24, 22, 21, 25], [23, 24, 20, 21]),
        ),
        finished(
            "g7",
            "fen",
            "pao",
            "2024-12-18T20:00:00",
            "Ülker Sports Arena",
            (76, 72),
            ([18, 20, 17, 21], [19, 16, 18, 19]),
        ),
        finished(
            "g8",
            "mac",
            "mil",
            "2024-12-17T19:30:00",
            "Menora Mivtachim Arena",
            (81, 79),
            ([20, 21, 19, 21], [22, 18, 20, 19]),
        ),
    ]
}

pub fn game_stats() -> Vec<GameStats> {
    let line = |player_id: &str,
                team_id: &str,
                minutes: u32,
                pra: [u32; 3],
                stk: [u32; 3],
                shooting: [u32; 6],
                efficiency: i32| PlayerGameStats {
        player_id: player_id.into(),
        team_id: team_id.into(),
        minutes,
        points: pra[0],
        rebounds: pra[1],
        assists: pra[2],
        steals: stk[0],
        blocks: stk[1],
        turnovers: stk[2],
        fg_made: shooting[0],
        fg_attempts: shooting[1],
        three_made: shooting[2],
        three_attempts: shooting[3],
        ft_made: shooting[4],
        ft_attempts: shooting[5],
        efficiency,
    };

    vec![GameStats {
        game_id: "g5".into(),
        home_team: TeamGameStats {
            team_id: "rm".into(),
            points: 85,
            rebounds: 38,
            assists: 22,
            steals: 8,
            blocks: 4,
            turnovers: 12,
            fg_percentage: 48.2,
            three_percentage: 38.5,
            ft_percentage: 82.1,
        },
        away_team: TeamGameStats {
            team_id: "oly".into(),
            points: 78,
            rebounds: 34,
            assists: 18,
            steals: 6,
            blocks: 3,
            turnovers: 14,
            fg_percentage: 44.8,
            three_percentage: 32.1,
            ft_percentage: 78.5,
        },
        player_stats: vec![
            line("p1", "rm", 28, [18, 3, 7], [2, 0, 3], [6, 12, 2, 5, 4, 5], 21),
            line("p2", "rm", 26, [14, 10, 1], [1, 3, 2], [6, 9, 0, 0, 2, 3], 24),
            line("p7", "oly", 32, [22, 4, 6], [1, 0, 4], [7, 15, 3, 7, 5, 6], 20),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_games_satisfy_score_invariant() {
        for game in games() {
            game.check_invariant().unwrap();
        }
    }

    #[test]
    fn seed_players_reference_seeded_teams() {
        // The repository never enforces this, but the shipped dataset should
        // start out consistent.
        let team_ids: HashSet<String> = teams().into_iter().map(|t| t.id).collect();
        for p in players() {
            assert!(team_ids.contains(&p.team_id), "dangling team for {}", p.id);
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let players = players();
        let ids: HashSet<&str> = players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), players.len());

        let games = games();
        let ids: HashSet<&str> = games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids.len(), games.len());
    }

    #[test]
    fn stats_sheet_matches_final_score() {
        let sheet = &game_stats()[0];
        let game = games().into_iter().find(|g| g.id == sheet.game_id).unwrap();
        assert_eq!(game.home_score, Some(sheet.home_team.points));
        assert_eq!(game.away_score, Some(sheet.away_team.points));
    }
}
