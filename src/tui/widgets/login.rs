// Sign-in screen. Two fields, password masked.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Mode};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let outer = Block::default().borders(Borders::ALL).title("Sign in");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let editing = app.mode == Mode::Login;
    let field = |label: &str, value: String, focused: bool| {
        let style = if focused && editing {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if focused && editing { "_" } else { "" };
        Line::from(vec![
            Span::raw(format!(" {label:<10}")),
            Span::styled(format!("{value}{cursor}"), style),
        ])
    };

    let masked = "*".repeat(app.login_form.password.chars().count());
    frame.render_widget(
        Paragraph::new(field(
            "Username:",
            app.login_form.username.clone(),
            !app.login_on_password,
        )),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(field("Password:", masked, app.login_on_password)),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Tab: switch field   Enter: sign in   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))),
        rows[3],
    );
}
