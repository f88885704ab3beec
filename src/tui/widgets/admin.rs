// Admin screen: the managed player table, the editor overlay, and the
// delete confirmation prompt.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::{App, Mode};
use crate::forms::{PlayerField, PlayerForm};
use crate::tui::widgets::team_name;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    render_table(frame, area, app);

    if let Some(form) = &app.player_form {
        render_form(frame, area, app, form);
    } else if let Mode::ConfirmDelete(id) = &app.mode {
        render_confirm(frame, area, app, id);
    }
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec![
        Cell::from("Player"),
        Cell::from("Team"),
        Cell::from("Pos"),
        Cell::from("#"),
        Cell::from("PPG"),
        Cell::from("EFF"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let players = app.repo.players();
    let rows: Vec<Row> = players
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.full_name()),
                Cell::from(team_name(app, &p.team_id).to_string()),
                Cell::from(p.position.code()),
                Cell::from(format!("{}", p.number)),
                Cell::from(format!("{:.1}", p.stats.ppg)),
                Cell::from(format!("{:.1}", p.stats.efficiency)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(22),
        Constraint::Min(18),
        Constraint::Length(4),
        Constraint::Length(3),
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
                .title("Manage players (n:new e:edit x:delete)"),
        );

    let mut state = TableState::default();
    state.select(Some(app.admin_selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn field_value(app: &App, form: &PlayerForm, field: PlayerField) -> String {
    match field {
        PlayerField::FirstName => form.first_name.clone(),
        PlayerField::LastName => form.last_name.clone(),
        PlayerField::Team => format!("< {} >", team_name(app, &form.team_id)),
        PlayerField::Position => format!("< {} >", form.position.label()),
        PlayerField::Number => form.number.clone(),
        PlayerField::Height => form.height.clone(),
        PlayerField::Weight => form.weight.clone(),
        PlayerField::Nationality => form.nationality.clone(),
        PlayerField::BirthDate => form.birth_date.clone(),
        PlayerField::Ppg => form.ppg.clone(),
        PlayerField::Rpg => form.rpg.clone(),
        PlayerField::Apg => form.apg.clone(),
        PlayerField::Efficiency => form.efficiency.clone(),
    }
}

fn render_form(frame: &mut Frame, area: Rect, app: &App, form: &PlayerForm) {
    let title = match &form.editing_id {
        Some(id) => format!("Edit player {id}"),
        None => "New player".to_string(),
    };

    let overlay = centered(area, 52, PlayerField::ALL.len() as u16 + 3);
    frame.render_widget(Clear, overlay);

    let mut lines = Vec::with_capacity(PlayerField::ALL.len() + 1);
    for (i, field) in PlayerField::ALL.into_iter().enumerate() {
        let focused = i == app.form_focus;
        let style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if focused && field.is_text() { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::raw(format!(" {:<13}", field.label())),
            Span::styled(format!("{}{cursor}", field_value(app, form, field)), style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        " Enter: save   Esc: cancel",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        overlay,
    );
}

fn render_confirm(frame: &mut Frame, area: Rect, app: &App, player_id: &str) {
    let name = app
        .repo
        .player_by_id(player_id)
        .map(|p| p.full_name())
        .unwrap_or_else(|| player_id.to_string());

    let overlay = centered(area, 46, 4);
    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(format!(" Delete {name}?")),
            Line::from(Span::styled(
                " y: delete   n: keep",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm")
                .border_style(Style::default().fg(Color::Red)),
        ),
        overlay,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1]);
    vertical[1]
}
