//! UI module for folio-tui
//!
//! Top-level layout (nav tabs, section body, keybinding bar) and the
//! per-section renderers.

mod contact;
mod helpers;
mod hero;
mod projects;
mod skills;

pub use helpers::{ellipsize, wrap_text};

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::{InputMode, Section};
use crate::theme::{BG_PRIMARY, BG_SECONDARY, GREEN_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

/// Draw the whole frame
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav tab bar
            Constraint::Min(3),    // Section body
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_nav(frame, main_layout[0], app);

    match app.section {
        Section::Hero => hero::render_hero(frame, main_layout[1], app),
        Section::Skills => skills::render_skills(frame, main_layout[1], app),
        Section::Projects => projects::render_projects(frame, main_layout[1], app),
        Section::Contact => contact::render_contact(frame, main_layout[1], app),
    }

    render_bottom_bar(frame, main_layout[2], app);
}

fn render_nav(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![
        Span::styled(" ❯ ", Style::default().fg(GREEN_PRIMARY)),
        Span::styled(
            app.portfolio.profile.name.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for (i, section) in Section::all().iter().enumerate() {
        let style = if *section == app.section {
            Style::default()
                .fg(GREEN_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        spans.push(Span::styled(
            format!(" {}:{} ", i + 1, section.label()),
            style,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.input_mode == InputMode::Edit {
        " Esc: Done | Tab: Next Field | Enter: Newline/Next ".to_string()
    } else {
        let section_hint = match app.section {
            Section::Hero => "Enter: Race",
            Section::Skills => "j/k: Scroll",
            Section::Projects => "j/k: Project | ←/→: Screenshot",
            Section::Contact => "i: Edit | Enter: Send",
        };
        format!(" q: Quit | Tab: Section | 1-4: Jump | {} ", section_hint)
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(TEXT_MUTED).bg(BG_SECONDARY));
    frame.render_widget(bar, area);
}
