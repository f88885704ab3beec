// Fixtures and results screens. Both are selectable game lists; they only
// differ in which games they show and in the score column.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::app::App;
use crate::model::Game;
use crate::query;
use crate::tui::widgets::{format_date, team_name};

pub fn render_fixtures(frame: &mut Frame, area: Rect, app: &App) {
    let games = query::fixtures(app.repo.games());
    render_games(
        frame,
        area,
        app,
        "Fixtures",
        &games,
        app.fixtures_selected,
        false,
    );
}

pub fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let games = query::results(app.repo.games());
    render_games(
        frame,
        area,
        app,
        "Results",
        &games,
        app.results_selected,
        true,
    );
}

fn render_games(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    title: &str,
    games: &[&Game],
    selected: usize,
    with_scores: bool,
) {
    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Home"),
        Cell::from(if with_scores { "Score" } else { "" }),
        Cell::from("Away"),
        Cell::from("Venue"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = if games.is_empty() {
        vec![Row::new(vec![Cell::from("  No games scheduled")])]
    } else {
        games
            .iter()
            .map(|g| {
                let score = match (g.home_score, g.away_score) {
                    (Some(h), Some(a)) => format!("{h} - {a}"),
                    _ => "vs".to_string(),
                };
                Row::new(vec![
                    Cell::from(format_date(&g.date)),
                    Cell::from(team_name(app, &g.home_team_id).to_string()),
                    Cell::from(score),
                    Cell::from(team_name(app, &g.away_team_id).to_string()),
                    Cell::from(g.venue.clone()),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(18),
        Constraint::Min(18),
        Constraint::Length(9),
        Constraint::Min(18),
        Constraint::Min(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));

    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::test_app;

    #[test]
    fn fixtures_render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(110, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = test_app();
        terminal
            .draw(|frame| render_fixtures(frame, frame.area(), &app))
            .unwrap();
    }

    #[test]
    fn results_render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(110, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = test_app();
        terminal
            .draw(|frame| render_results(frame, frame.area(), &app))
            .unwrap();
    }
}
