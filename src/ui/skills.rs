//! Skills & experience section rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::theme::{
    BORDER_SUBTLE, GREEN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::wrap_text;

pub fn render_skills(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_experience(frame, columns[0], app);
    render_skill_groups(frame, columns[1], app);
}

fn render_experience(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Experience & Education ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let width = block.inner(area).width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for exp in &app.portfolio.experience {
        lines.push(Line::from(vec![
            Span::styled(
                exp.title.clone(),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", exp.period),
                Style::default().fg(TEXT_MUTED),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            exp.company.clone(),
            Style::default().fg(GREEN_PRIMARY),
        )));
        for wrapped in wrap_text(&exp.description, width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
        for highlight in &exp.highlights {
            for (i, wrapped) in wrap_text(highlight, width.saturating_sub(2)).into_iter().enumerate() {
                let bullet = if i == 0 { "· " } else { "  " };
                lines.push(Line::from(vec![
                    Span::styled(bullet, Style::default().fg(GREEN_PRIMARY)),
                    Span::styled(wrapped, Style::default().fg(TEXT_MUTED)),
                ]));
            }
        }
        lines.push(Line::default());
    }

    for edu in &app.portfolio.education {
        lines.push(Line::from(Span::styled(
            edu.degree.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            edu.institution.clone(),
            Style::default().fg(GREEN_PRIMARY),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} · GPA {}", edu.period, edu.gpa),
            Style::default().fg(TEXT_MUTED),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.section_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_skill_groups(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Skills ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let width = block.inner(area).width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for group in &app.portfolio.skills {
        lines.push(Line::from(Span::styled(
            group.category.clone(),
            Style::default()
                .fg(GREEN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        let joined = group.items.join(" · ");
        for wrapped in wrap_text(&joined, width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.section_scroll, 0));
    frame.render_widget(paragraph, area);
}
