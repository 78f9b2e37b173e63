//! Project showcase rendering: project list plus detail card with the
//! screenshot carousel indicator.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::App;
use crate::models::ProjectStatus;
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, GREEN_PRIMARY, GREEN_SUCCESS,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::{ellipsize, wrap_text};

pub fn render_projects(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    render_project_list(frame, columns[0], app);
    render_project_detail(frame, columns[1], app);
}

fn render_project_list(frame: &mut Frame, area: Rect, app: &App) {
    let outer = Block::default()
        .title(" Projects ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let mut y = inner.y;
    for (i, project) in app.portfolio.projects.iter().enumerate() {
        if y + 3 > inner.y + inner.height {
            break;
        }
        let card_area = Rect::new(inner.x, y, inner.width, 3);
        let selected = i == app.selected_project;

        let border_color = if selected { GREEN_PRIMARY } else { BORDER_SUBTLE };
        let bg = if selected { BG_TERTIARY } else { BG_SECONDARY };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(bg));

        let width = card_area.width.saturating_sub(4) as usize;
        let line = Line::from(vec![
            Span::styled(
                if selected { "● " } else { "○ " },
                Style::default().fg(border_color),
            ),
            Span::styled(
                ellipsize(&project.title, width.saturating_sub(2)),
                Style::default().fg(TEXT_PRIMARY),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), card_area);
        y += 3;
    }
}

fn status_badge(status: ProjectStatus) -> Span<'static> {
    match status {
        ProjectStatus::Completed => {
            Span::styled("[Completed]", Style::default().fg(GREEN_SUCCESS))
        }
        ProjectStatus::InDevelopment => {
            Span::styled("[In Development]", Style::default().fg(AMBER_WARNING))
        }
    }
}

fn render_project_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(project) = app.portfolio.projects.get(app.selected_project) else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", project.title))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            project.subtitle.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        status_badge(project.status),
    ]));
    lines.push(Line::default());

    for wrapped in wrap_text(&project.description, width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    lines.push(Line::default());

    for highlight in &project.highlights {
        for (i, wrapped) in wrap_text(highlight, width.saturating_sub(2)).into_iter().enumerate() {
            let bullet = if i == 0 { "· " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(bullet, Style::default().fg(GREEN_PRIMARY)),
                Span::styled(wrapped, Style::default().fg(TEXT_MUTED)),
            ]));
        }
    }
    lines.push(Line::default());

    let tech = project.tech.join(" · ");
    for wrapped in wrap_text(&tech, width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(GREEN_PRIMARY),
        )));
    }
    lines.push(Line::default());

    if let Some(live) = &project.live_url {
        lines.push(Line::from(vec![
            Span::styled("Live    ", Style::default().fg(TEXT_MUTED)),
            Span::styled(live.clone(), Style::default().fg(TEXT_SECONDARY)),
        ]));
    }
    if let Some(github) = &project.github_url {
        lines.push(Line::from(vec![
            Span::styled("Source  ", Style::default().fg(TEXT_MUTED)),
            Span::styled(github.clone(), Style::default().fg(TEXT_SECONDARY)),
        ]));
    }

    // Split detail area: text above, carousel strip below
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(lines).scroll((app.section_scroll, 0)),
        rows[0],
    );
    render_carousel_strip(frame, rows[1], app);
}

/// Carousel position indicator: which screenshot is "showing" and where
/// it lives on disk. Left/Right pages through 1..=image_count, wrapping.
fn render_carousel_strip(frame: &mut Frame, area: Rect, app: &App) {
    let Some(project) = app.portfolio.projects.get(app.selected_project) else {
        return;
    };
    if project.image_count == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(GREEN_PRIMARY).bg(BORDER_SUBTLE))
            .ratio(f64::from(app.carousel_index) / f64::from(project.image_count))
            .label(""),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("‹ {}/{} › ", app.carousel_index, project.image_count),
                Style::default().fg(TEXT_PRIMARY),
            ),
            Span::styled(
                project.screenshot_path(app.carousel_index),
                Style::default().fg(TEXT_MUTED),
            ),
        ])),
        rows[1],
    );
}
