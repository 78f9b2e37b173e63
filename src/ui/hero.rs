//! Hero section rendering: intro, typewriter line, stats, and the race panel.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::anim::RacePhase;
use crate::app::App;
use crate::theme::{
    pulse_color, AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, GREEN_DIM, GREEN_PRIMARY,
    GREEN_SUCCESS, RED_ACCENT, RED_DIM, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::utils::format_latency;

pub fn render_hero(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_intro_column(frame, columns[0], app);
    render_race_column(frame, columns[1], app);
}

fn render_intro_column(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // whoami block
            Constraint::Length(2), // name
            Constraint::Length(4), // current position card
            Constraint::Length(2), // typewriter line
            Constraint::Length(4), // stat cards
            Constraint::Min(0),
        ])
        .split(area);

    let profile = &app.portfolio.profile;

    // Terminal-style intro, titled after the owner's first name
    let dir_name = profile
        .name
        .split_whitespace()
        .next()
        .unwrap_or("dev")
        .to_lowercase();
    let whoami = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" ~/{}-portfolio ", dir_name),
            Style::default().fg(TEXT_MUTED),
        )),
        Line::from(vec![
            Span::styled(" $ ", Style::default().fg(GREEN_PRIMARY)),
            Span::styled("whoami", Style::default().fg(TEXT_SECONDARY)),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE)),
    );
    frame.render_widget(whoami, rows[0]);

    let name = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {}", profile.name),
        Style::default()
            .fg(GREEN_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )]));
    frame.render_widget(name, rows[1]);

    // Current position card with a pulsing "current" dot
    let dot = pulse_color(app.animation_tick, GREEN_PRIMARY, GREEN_DIM);
    let position = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(dot)),
            Span::styled(
                &profile.position.title,
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" @ {}", profile.position.company),
                Style::default().fg(TEXT_SECONDARY),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} · {}", profile.position.location, profile.position.period),
            Style::default().fg(TEXT_MUTED),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY)),
    );
    frame.render_widget(position, rows[2]);

    // Typewriter line with a blinking caret
    let caret = pulse_color(app.animation_tick, GREEN_PRIMARY, BG_SECONDARY);
    let typed = Paragraph::new(Line::from(vec![
        Span::styled(" ❯ ", Style::default().fg(GREEN_PRIMARY)),
        Span::styled(app.typewriter.visible(), Style::default().fg(TEXT_SECONDARY)),
        Span::styled("▌", Style::default().fg(caret)),
    ]));
    frame.render_widget(typed, rows[3]);

    render_stat_cards(frame, rows[4], app);
}

/// Headline stat cards in one row: bold value over a muted label
fn render_stat_cards(frame: &mut Frame, area: Rect, app: &App) {
    let stats = &app.portfolio.stats;
    if stats.is_empty() {
        return;
    }
    let percent = (100 / stats.len().max(1)) as u16;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(percent); stats.len()])
        .split(area);

    for (stat, cell) in stats.iter().zip(cells.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY));
        let content = vec![
            Line::from(Span::styled(
                stat.value.clone(),
                Style::default()
                    .fg(GREEN_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                stat.label.clone(),
                Style::default().fg(TEXT_MUTED),
            )),
        ];
        let card = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(card, *cell);
    }
}

fn render_race_column(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // availability card
            Constraint::Length(12), // race panel
            Constraint::Min(0),
        ])
        .split(area);

    let profile = &app.portfolio.profile;
    if let Some(availability) = &profile.availability {
        let card = Paragraph::new(Line::from(vec![
            Span::styled("⚡ Availability  ", Style::default().fg(TEXT_PRIMARY)),
            Span::styled(availability.clone(), Style::default().fg(TEXT_SECONDARY)),
            Span::styled("  [Available]", Style::default().fg(GREEN_SUCCESS)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(ROUNDED_BORDERS)
                .border_style(Style::default().fg(BORDER_SUBTLE))
                .style(Style::default().bg(BG_SECONDARY)),
        );
        frame.render_widget(card, rows[0]);
    }

    render_race_panel(frame, rows[1], app);
}

/// The "Redis vs SQL" speed test panel
fn render_race_panel(frame: &mut Frame, area: Rect, app: &App) {
    let race = &app.race;

    let title = if race.is_running() {
        " Backend Speed Test · Racing... "
    } else {
        " Backend Speed Test · Redis vs SQL "
    };
    let panel = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = panel.inner(area);
    frame.render_widget(panel, area);

    let lanes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // SQL label + latency
            Constraint::Length(1), // SQL gauge
            Constraint::Length(1),
            Constraint::Length(1), // Redis label + latency
            Constraint::Length(1), // Redis gauge
            Constraint::Length(1),
            Constraint::Length(1), // result / hint
        ])
        .split(inner);

    // Lane labels pulse while their bar is still moving
    let sql_color = if race.is_running() && race.sql_progress() < 100.0 {
        pulse_color(app.animation_tick, GREEN_PRIMARY, GREEN_DIM)
    } else {
        GREEN_PRIMARY
    };
    let redis_color = if race.is_running() && race.redis_progress() < 100.0 {
        pulse_color(app.animation_tick, RED_ACCENT, RED_DIM)
    } else {
        RED_ACCENT
    };

    let sql_label = if race.sql_progress() > 0.0 {
        format_latency(race.sql_latency_ms(), 0)
    } else {
        "0ms".to_string()
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("SQL   ", Style::default().fg(sql_color)),
            Span::styled(sql_label, Style::default().fg(TEXT_SECONDARY)),
        ])),
        lanes[0],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(GREEN_PRIMARY).bg(BORDER_SUBTLE))
            .ratio(race.sql_progress() / 100.0)
            .label(""),
        lanes[1],
    );

    let redis_label = if race.redis_progress() > 0.0 {
        format_latency(race.redis_latency_ms(), 1)
    } else {
        "0ms".to_string()
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Redis ", Style::default().fg(redis_color)),
            Span::styled(redis_label, Style::default().fg(TEXT_SECONDARY)),
        ])),
        lanes[3],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(RED_ACCENT).bg(BORDER_SUBTLE))
            .ratio(race.redis_progress() / 100.0)
            .label(""),
        lanes[4],
    );

    let footer = match race.phase() {
        RacePhase::Settled => Line::from(vec![
            Span::styled("Winner: Redis  ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled(
                format!(
                    "~{:.0}x faster",
                    crate::anim::race::SQL_NOMINAL_MS / crate::anim::race::REDIS_NOMINAL_MS
                ),
                Style::default()
                    .fg(GREEN_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        RacePhase::Running => Line::from(Span::styled(
            "Racing...",
            Style::default().fg(AMBER_WARNING),
        )),
        RacePhase::Idle => Line::from(Span::styled(
            "Press Enter to start the race!",
            Style::default().fg(TEXT_MUTED),
        )),
    };
    frame.render_widget(Paragraph::new(footer), lanes[6]);
}
