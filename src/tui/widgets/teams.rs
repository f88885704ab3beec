// Teams screen: selectable table of every club.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec![
        Cell::from("Team"),
        Cell::from("City"),
        Cell::from("Country"),
        Cell::from("W-L"),
        Cell::from("Arena"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .repo
        .teams()
        .iter()
        .map(|team| {
            Row::new(vec![
                Cell::from(team.name.clone()),
                Cell::from(team.city.clone()),
                Cell::from(team.country.clone()),
                Cell::from(format!("{}-{}", team.wins, team.losses)),
                Cell::from(team.arena.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(24),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("Teams"));

    let mut state = TableState::default();
    state.select(Some(app.teams_selected));
    frame.render_stateful_widget(table, area, &mut state);
}
