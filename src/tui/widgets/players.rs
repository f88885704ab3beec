// Players screen: search box, active filters, and the sortable table.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::{App, Mode};
use crate::tui::widgets::team_name;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_filter_bar(frame, rows[0], app);
    render_table(frame, rows[1], app);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let searching = app.mode == Mode::Search;
    let search = if app.player_filter.search.is_empty() && !searching {
        Span::styled("(/ to search)", Style::default().fg(Color::DarkGray))
    } else {
        let style = if searching {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Span::styled(format!("\"{}\"", app.player_filter.search), style)
    };

    let team = match &app.player_filter.team_id {
        Some(id) => team_name(app, id).to_string(),
        None => "all".to_string(),
    };
    let position = match app.player_filter.position {
        Some(p) => p.code().to_string(),
        None => "all".to_string(),
    };
    let direction = if app.player_sort.ascending { "asc" } else { "desc" };

    let line = Line::from(vec![
        Span::raw(" Search: "),
        search,
        Span::raw(format!(
            "  t:Team={team}  p:Pos={position}  s:Sort={} d:{direction}  c:clear",
            app.player_sort.key.label()
        )),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Filters")),
        area,
    );
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec![
        Cell::from("Player"),
        Cell::from("Team"),
        Cell::from("Pos"),
        Cell::from("PPG"),
        Cell::from("RPG"),
        Cell::from("APG"),
        Cell::from("EFF"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let visible = app.visible_players();
    let rows: Vec<Row> = if visible.is_empty() {
        vec![Row::new(vec![Cell::from("  No players match the filters")])]
    } else {
        visible
            .iter()
            .map(|p| {
                Row::new(vec![
                    Cell::from(p.full_name()),
                    Cell::from(team_name(app, &p.team_id).to_string()),
                    Cell::from(p.position.code()),
                    Cell::from(format!("{:.1}", p.stats.ppg)),
                    Cell::from(format!("{:.1}", p.stats.rpg)),
                    Cell::from(format!("{:.1}", p.stats.apg)),
                    Cell::from(format!("{:.1}", p.stats.efficiency)),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Min(22),
        Constraint::Min(18),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(6),
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
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Players ({})", visible.len())),
        );

    let mut state = TableState::default();
    state.select(Some(app.players_selected));
    frame.render_stateful_widget(table, area, &mut state);
}
