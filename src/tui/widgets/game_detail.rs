// Game detail: score header, quarter breakdown, and the box score.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::model::{Game, GameStats};
use crate::tui::widgets::{format_date, team_name};

pub fn render(frame: &mut Frame, area: Rect, app: &App, game_id: &str) {
    let Some(game) = app.repo.game_by_id(game_id) else {
        frame.render_widget(
            Paragraph::new(format!("No game with id {game_id}"))
                .block(Block::default().borders(Borders::ALL).title("Game")),
            area,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(5),
        ])
        .split(area);

    render_score_header(frame, rows[0], app, game);
    render_quarters(frame, rows[1], app, game);

    match app.repo.stats_for_game(game_id) {
        Some(stats) => render_box_score(frame, rows[2], app, stats),
        None => frame.render_widget(
            Paragraph::new(" No statistics recorded for this game")
                .block(Block::default().borders(Borders::ALL).title("Box score")),
            rows[2],
        ),
    }
}

fn render_score_header(frame: &mut Frame, area: Rect, app: &App, game: &Game) {
    let score = match (game.home_score, game.away_score) {
        (Some(h), Some(a)) => format!("{h} - {a}"),
        _ => "vs".to_string(),
    };
    let lines = vec![
        Line::from(format!(
            " {}  {}  {}",
            team_name(app, &game.home_team_id),
            score,
            team_name(app, &game.away_team_id),
        ))
        .style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(format!(
            " {}  {}",
            format_date(&game.date),
            game.venue
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Game")),
        area,
    );
}

fn render_quarters(frame: &mut Frame, area: Rect, app: &App, game: &Game) {
    let Some(quarters) = &game.quarter_scores else {
        frame.render_widget(
            Paragraph::new(" Not played yet")
                .block(Block::default().borders(Borders::ALL).title("Quarters")),
            area,
        );
        return;
    };

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Q1"),
        Cell::from("Q2"),
        Cell::from("Q3"),
        Cell::from("Q4"),
        Cell::from("T"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let line = |team_id: &str, scores: &[u32]| {
        let mut cells = vec![Cell::from(team_name(app, team_id).to_string())];
        for q in scores {
            cells.push(Cell::from(format!("{q}")));
        }
        cells.push(Cell::from(format!("{}", scores.iter().sum::<u32>())));
        Row::new(cells)
    };

    let rows = vec![
        line(&game.home_team_id, &quarters.home),
        line(&game.away_team_id, &quarters.away),
    ];
    let widths = [
        Constraint::Min(20),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(5),
    ];
    frame.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Quarters")),
        area,
    );
}

fn render_box_score(frame: &mut Frame, area: Rect, app: &App, stats: &GameStats) {
    let header = Row::new(vec![
        Cell::from("Player"),
        Cell::from("Team"),
        Cell::from("MIN"),
        Cell::from("PTS"),
        Cell::from("REB"),
        Cell::from("AST"),
        Cell::from("STL"),
        Cell::from("BLK"),
        Cell::from("TO"),
        Cell::from("FG"),
        Cell::from("3PT"),
        Cell::from("FT"),
        Cell::from("EFF"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = stats
        .player_stats
        .iter()
        .map(|line| {
            let name = app
                .repo
                .player_by_id(&line.player_id)
                .map(|p| p.full_name())
                .unwrap_or_else(|| line.player_id.clone());
            Row::new(vec![
                Cell::from(name),
                Cell::from(team_name(app, &line.team_id).to_string()),
                Cell::from(format!("{}", line.minutes)),
                Cell::from(format!("{}", line.points)),
                Cell::from(format!("{}", line.rebounds)),
                Cell::from(format!("{}", line.assists)),
                Cell::from(format!("{}", line.steals)),
                Cell::from(format!("{}", line.blocks)),
                Cell::from(format!("{}", line.turnovers)),
                Cell::from(format!("{}/{}", line.fg_made, line.fg_attempts)),
                Cell::from(format!("{}/{}", line.three_made, line.three_attempts)),
                Cell::from(format!("{}/{}", line.ft_made, line.ft_attempts)),
                Cell::from(format!("{}", line.efficiency)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Min(14),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(4),
    ];
    frame.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Box score")),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::test_app;

    #[test]
    fn render_finished_game_with_stats() {
        let backend = ratatui::backend::TestBackend::new(140, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = test_app();
        terminal
            .draw(|frame| render(frame, frame.area(), &app, "g5"))
            .unwrap();
    }

    #[test]
    fn render_finished_game_without_stats() {
        let backend = ratatui::backend::TestBackend::new(140, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = test_app();
        terminal
            .draw(|frame| render(frame, frame.area(), &app, "g6"))
            .unwrap();
    }

    #[test]
    fn render_upcoming_game() {
        let backend = ratatui::backend::TestBackend::new(140, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = test_app();
        terminal
            .draw(|frame| render(frame, frame.area(), &app, "g1"))
            .unwrap();
    }

    #[test]
    fn render_survives_a_missing_game() {
        let backend = ratatui::backend::TestBackend::new(140, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = test_app();
        terminal
            .draw(|frame| render(frame, frame.area(), &app, "ghost"))
            .unwrap();
    }
}
