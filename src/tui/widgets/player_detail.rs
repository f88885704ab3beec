// Player detail: bio facts next to the season averages.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::tui::layout::split_body;
use crate::tui::widgets::team_name;

pub fn render(frame: &mut Frame, area: Rect, app: &App, player_id: &str) {
    let Some(player) = app.repo.player_by_id(player_id) else {
        frame.render_widget(
            Paragraph::new(format!("No player with id {player_id}"))
                .block(Block::default().borders(Borders::ALL).title("Player")),
            area,
        );
        return;
    };

    let (bio_area, stats_area) = split_body(area);

    let bio = vec![
        Line::from(format!(" Number:      #{}", player.number)),
        Line::from(format!(" Position:    {}", player.position.label())),
        Line::from(format!(
            " Team:        {} (Enter to open)",
            team_name(app, &player.team_id)
        )),
        Line::from(format!(" Height:      {} cm", player.height)),
        Line::from(format!(" Weight:      {} kg", player.weight)),
        Line::from(format!(" Nationality: {}", player.nationality)),
        Line::from(format!(" Born:        {}", player.birth_date)),
    ];
    frame.render_widget(
        Paragraph::new(bio).block(
            Block::default()
                .borders(Borders::ALL)
                .title(player.full_name()),
        ),
        bio_area,
    );

    let stat_line = |label: &str, value: f64| {
        Line::from(vec![
            Span::raw(format!(" {label:<12}")),
            Span::styled(
                format!("{value:.1}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };
    let stats = vec![
        stat_line("Points", player.stats.ppg),
        stat_line("Rebounds", player.stats.rpg),
        stat_line("Assists", player.stats.apg),
        stat_line("Efficiency", player.stats.efficiency),
    ];
    frame.render_widget(
        Paragraph::new(stats).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Season averages"),
        ),
        stats_area,
    );
}
