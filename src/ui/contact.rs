//! Contact section rendering: scheduling/links card and the message form.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::contact::{FormField, SubmitStatus};
use crate::models::InputMode;
use crate::theme::{
    pulse_color, BG_SECONDARY, BORDER_SUBTLE, GREEN_PRIMARY, GREEN_SUCCESS, RED_ACCENT,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

pub fn render_contact(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_links_card(frame, columns[0], app);
    render_form(frame, columns[1], app);
}

fn render_links_card(frame: &mut Frame, area: Rect, app: &App) {
    let profile = &app.portfolio.profile;
    let block = Block::default()
        .title(" Let's Connect ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let mut lines = vec![
        Line::from(Span::styled(
            "Interested in working together?",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(Span::styled(
            "Schedule a call or send a message.",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::default(),
    ];

    if let Some(url) = &profile.scheduling_url {
        lines.push(Line::from(Span::styled(
            "Schedule a Call",
            Style::default()
                .fg(GREEN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            url.clone(),
            Style::default().fg(TEXT_MUTED),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled("Email     ", Style::default().fg(TEXT_MUTED)),
        Span::styled(profile.email.clone(), Style::default().fg(TEXT_SECONDARY)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("GitHub    ", Style::default().fg(TEXT_MUTED)),
        Span::styled(profile.github.clone(), Style::default().fg(TEXT_SECONDARY)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("LinkedIn  ", Style::default().fg(TEXT_MUTED)),
        Span::styled(profile.linkedin.clone(), Style::default().fg(TEXT_SECONDARY)),
    ]));
    if let Some(resume) = &profile.resume_path {
        lines.push(Line::from(vec![
            Span::styled("Resume    ", Style::default().fg(TEXT_MUTED)),
            Span::styled(resume.clone(), Style::default().fg(TEXT_SECONDARY)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let outer = Block::default()
        .title(" Send a Message ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Length(3), // subject
            Constraint::Min(3),    // message
            Constraint::Length(1), // status banner
            Constraint::Length(1), // submit hint
        ])
        .split(inner);

    render_field(frame, rows[0], app, FormField::Name);
    render_field(frame, rows[1], app, FormField::Email);
    render_field(frame, rows[2], app, FormField::Subject);
    render_field(frame, rows[3], app, FormField::Message);

    let form = &app.form;
    let banner = match form.status() {
        SubmitStatus::Success => Line::from(Span::styled(
            "✓ Message sent successfully! I'll get back to you soon.",
            Style::default().fg(GREEN_SUCCESS),
        )),
        SubmitStatus::Error => Line::from(Span::styled(
            format!("✗ {}", form.error_message()),
            Style::default().fg(RED_ACCENT),
        )),
        SubmitStatus::Idle => Line::default(),
    };
    frame.render_widget(Paragraph::new(banner), rows[4]);

    let hint = if form.is_submitting() {
        Span::styled("Sending...", Style::default().fg(TEXT_MUTED))
    } else if app.input_mode == InputMode::Edit {
        Span::styled("Esc: done editing", Style::default().fg(TEXT_MUTED))
    } else if form.can_submit() {
        Span::styled("Enter: send message", Style::default().fg(GREEN_PRIMARY))
    } else {
        Span::styled("i: edit fields (all required)", Style::default().fg(TEXT_MUTED))
    };
    frame.render_widget(Paragraph::new(Line::from(hint)), rows[5]);
}

fn render_field(frame: &mut Frame, area: Rect, app: &App, field: FormField) {
    let form = &app.form;
    let focused = form.focus == field && app.input_mode == InputMode::Edit;
    let border_color = if focused { GREEN_PRIMARY } else { BORDER_SUBTLE };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_SECONDARY));

    let mut spans = vec![Span::styled(
        form.field(field).to_string(),
        Style::default().fg(TEXT_PRIMARY),
    )];
    if focused {
        let caret = pulse_color(app.animation_tick, GREEN_PRIMARY, BG_SECONDARY);
        spans.push(Span::styled("▌", Style::default().fg(caret)));
    }

    // The message body may span lines; everything else is a single line
    let paragraph = if field == FormField::Message {
        let mut lines: Vec<Line> = form
            .field(field)
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(TEXT_PRIMARY))))
            .collect();
        if focused {
            let caret = pulse_color(app.animation_tick, GREEN_PRIMARY, BG_SECONDARY);
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled("▌", Style::default().fg(caret)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(spans))
    };

    frame.render_widget(paragraph.block(block), area);
}
