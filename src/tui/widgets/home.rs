// Home screen: next fixtures, latest results, and the head of the table.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::query;
use crate::tui::widgets::{format_date, team_name};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // upcoming
            Constraint::Length(4), // results
            Constraint::Min(6),    // standings
        ])
        .split(area);

    let summary = query::home_summary(app.repo.teams(), app.repo.games());

    let upcoming: Vec<Line> = summary
        .next_games
        .iter()
        .map(|g| {
            Line::from(format!(
                " {}  {} vs {}",
                format_date(&g.date),
                team_name(app, &g.home_team_id),
                team_name(app, &g.away_team_id),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(upcoming).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Upcoming games"),
        ),
        rows[0],
    );

    let results: Vec<Line> = summary
        .latest_results
        .iter()
        .map(|g| {
            Line::from(format!(
                " {}  {} {} - {} {}",
                format_date(&g.date),
                team_name(app, &g.home_team_id),
                g.home_score.unwrap_or(0),
                g.away_score.unwrap_or(0),
                team_name(app, &g.away_team_id),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(results).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Latest results"),
        ),
        rows[1],
    );

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Team"),
        Cell::from("W"),
        Cell::from("L"),
        Cell::from("Win %"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let table_rows: Vec<Row> = summary
        .top_teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(team.name.clone()),
                Cell::from(format!("{}", team.wins)),
                Cell::from(format!("{}", team.losses)),
                Cell::from(format!("{:.1}", team.win_rate())),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(20),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(7),
    ];
    frame.render_widget(
        Table::new(table_rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Top of the table"),
        ),
        rows[2],
    );
}
