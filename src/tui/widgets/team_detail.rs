// Team detail: club facts next to the selectable roster.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::App;
use crate::tui::layout::split_body;

pub fn render(frame: &mut Frame, area: Rect, app: &App, team_id: &str) {
    let Some(team) = app.repo.team_by_id(team_id) else {
        frame.render_widget(
            Paragraph::new(format!("No team with id {team_id}"))
                .block(Block::default().borders(Borders::ALL).title("Team")),
            area,
        );
        return;
    };

    let (roster_area, info_area) = split_body(area);

    let info = vec![
        Line::from(format!(" City:     {} ({})", team.city, team.country)),
        Line::from(format!(" Arena:    {}", team.arena)),
        Line::from(format!(" Founded:  {}", team.founded)),
        Line::from(format!(" Record:   {}-{}", team.wins, team.losses)),
        Line::from(format!(" Win rate: {:.1}%", team.win_rate())),
    ];
    frame.render_widget(
        Paragraph::new(info).block(
            Block::default()
                .borders(Borders::ALL)
                .title(team.name.clone()),
        ),
        info_area,
    );

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Player"),
        Cell::from("Pos"),
        Cell::from("PPG"),
        Cell::from("EFF"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let roster = app.repo.players_by_team(team_id);
    let rows: Vec<Row> = if roster.is_empty() {
        vec![Row::new(vec![Cell::from("  No players on this roster")])]
    } else {
        roster
            .iter()
            .map(|p| {
                Row::new(vec![
                    Cell::from(format!("{}", p.number)),
                    Cell::from(p.full_name()),
                    Cell::from(p.position.code()),
                    Cell::from(format!("{:.1}", p.stats.ppg)),
                    Cell::from(format!("{:.1}", p.stats.efficiency)),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(3),
        Constraint::Min(20),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(6),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("Roster"));

    let mut state = TableState::default();
    state.select(Some(app.roster_selected));
    frame.render_stateful_widget(table, roster_area, &mut state);
}
