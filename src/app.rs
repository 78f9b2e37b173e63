//! Application state and core logic for folio-tui.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: navigation, the hero animation machines, the
//! contact form, and the submit/reload mailboxes polled between frames.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

use crate::anim::{ProgressRace, Typewriter};
use crate::contact::{
    apply_edit_key, spawn_submit, ContactForm, RelayClient, SubmitMailbox, SubmitResult,
    NOT_CONFIGURED_MESSAGE,
};
use crate::models::{InputMode, Portfolio, Section};

/// How often the cosmetic pulse tick advances
const ANIMATION_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub portfolio: Portfolio,
    pub content_path: Option<PathBuf>,
    pub content_needs_reload: Arc<Mutex<bool>>,
    // Navigation state
    pub section: Section,
    pub input_mode: InputMode,
    pub section_scroll: u16,
    pub selected_project: usize,
    /// 1-based screenshot index within the selected project's carousel
    pub carousel_index: u32,
    // Hero animation state
    pub typewriter: Typewriter,
    pub race: ProgressRace,
    // Contact state
    pub form: ContactForm,
    relay: Option<RelayClient>,
    submit_mailbox: SubmitMailbox,
    runtime: tokio::runtime::Handle,
    // Cosmetic animation state (caret blink, pulsing dots)
    pub animation_tick: u64,
    last_animation_update: Instant,
}

impl App {
    pub fn new(
        portfolio: Portfolio,
        content_path: Option<PathBuf>,
        relay: Option<RelayClient>,
        runtime: tokio::runtime::Handle,
        now: Instant,
    ) -> Self {
        let typewriter = Typewriter::new(portfolio.roles.clone(), now);
        Self {
            portfolio,
            content_path,
            content_needs_reload: Arc::new(Mutex::new(false)),
            section: Section::Hero,
            input_mode: InputMode::Browse,
            section_scroll: 0,
            selected_project: 0,
            carousel_index: 1,
            typewriter,
            race: ProgressRace::new(),
            form: ContactForm::new(),
            relay,
            submit_mailbox: Arc::new(Mutex::new(None)),
            runtime,
            animation_tick: 0,
            last_animation_update: now,
        }
    }

    /// Advance every clocked animation to `now`
    pub fn on_tick<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        self.typewriter.advance(now);
        self.race.advance(now, rng);
        if now.duration_since(self.last_animation_update) >= ANIMATION_TICK_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = now;
        }
    }

    /// Reload the content document from disk if the watcher flagged it
    pub fn reload_content_if_needed(&mut self, now: Instant) {
        let needs_reload = {
            let Ok(mut flag) = self.content_needs_reload.lock() else {
                return;
            };
            if *flag {
                *flag = false;
                true
            } else {
                false
            }
        };

        if needs_reload {
            if let Some(path) = &self.content_path {
                if let Ok(portfolio) = Portfolio::load(path) {
                    self.typewriter = Typewriter::new(portfolio.roles.clone(), now);
                    self.portfolio = portfolio;
                    self.selected_project = self
                        .selected_project
                        .min(self.portfolio.projects.len().saturating_sub(1));
                    self.carousel_index = 1;
                }
            }
        }
    }

    /// Pick up the outcome of an in-flight submission, if one has landed
    pub fn poll_submit(&mut self) {
        let result = {
            let Ok(mut slot) = self.submit_mailbox.lock() else {
                return;
            };
            slot.take()
        };
        if let Some(result) = result {
            self.form.apply_result(result);
        }
    }

    /// Kick off one contact submission on the runtime
    pub fn submit_contact(&mut self) {
        let Some(client) = self.relay.clone() else {
            if self.form.can_submit() {
                self.form
                    .apply_result(SubmitResult::Rejected(NOT_CONFIGURED_MESSAGE.to_string()));
            }
            return;
        };
        let Some(msg) = self.form.begin_submit() else {
            return;
        };
        spawn_submit(&self.runtime, client, msg, Arc::clone(&self.submit_mailbox));
    }

    /// Cancel all outstanding animation deadlines (teardown)
    pub fn shutdown(&mut self) {
        self.typewriter.stop();
        self.race.stop();
    }

    /// Handle one key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match self.input_mode {
            InputMode::Edit => {
                if key.code == KeyCode::Esc {
                    self.input_mode = InputMode::Browse;
                } else {
                    apply_edit_key(&mut self.form, key.code, key.modifiers);
                }
                false
            }
            InputMode::Browse => self.handle_browse_key(key.code, now),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode, now: Instant) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => self.switch_section(self.section.next()),
            KeyCode::BackTab => self.switch_section(self.section.prev()),
            KeyCode::Char('1') => self.switch_section(Section::Hero),
            KeyCode::Char('2') => self.switch_section(Section::Skills),
            KeyCode::Char('3') => self.switch_section(Section::Projects),
            KeyCode::Char('4') => self.switch_section(Section::Contact),
            KeyCode::Char('j') | KeyCode::Down => match self.section {
                Section::Projects => self.select_next_project(),
                _ => self.section_scroll = self.section_scroll.saturating_add(1),
            },
            KeyCode::Char('k') | KeyCode::Up => match self.section {
                Section::Projects => self.select_prev_project(),
                _ => self.section_scroll = self.section_scroll.saturating_sub(1),
            },
            KeyCode::Left => {
                if self.section == Section::Projects {
                    self.carousel_prev();
                }
            }
            KeyCode::Right => {
                if self.section == Section::Projects {
                    self.carousel_next();
                }
            }
            KeyCode::Enter => match self.section {
                Section::Hero => self.race.start(now),
                Section::Contact => self.submit_contact(),
                _ => {}
            },
            KeyCode::Char('i') | KeyCode::Char('e') => {
                if self.section == Section::Contact {
                    self.input_mode = InputMode::Edit;
                }
            }
            _ => {}
        }
        false
    }

    fn switch_section(&mut self, section: Section) {
        self.section = section;
        self.section_scroll = 0;
    }

    fn select_next_project(&mut self) {
        let count = self.portfolio.projects.len();
        if count == 0 {
            return;
        }
        self.selected_project = (self.selected_project + 1) % count;
        self.carousel_index = 1;
        self.section_scroll = 0;
    }

    fn select_prev_project(&mut self) {
        let count = self.portfolio.projects.len();
        if count == 0 {
            return;
        }
        self.selected_project = (self.selected_project + count - 1) % count;
        self.carousel_index = 1;
        self.section_scroll = 0;
    }

    fn carousel_count(&self) -> u32 {
        self.portfolio
            .projects
            .get(self.selected_project)
            .map(|p| p.image_count)
            .unwrap_or(0)
    }

    fn carousel_next(&mut self) {
        let count = self.carousel_count();
        if count == 0 {
            return;
        }
        self.carousel_index = self.carousel_index % count + 1;
    }

    fn carousel_prev(&mut self) {
        let count = self.carousel_count();
        if count == 0 {
            return;
        }
        self.carousel_index = if self.carousel_index <= 1 {
            count
        } else {
            self.carousel_index - 1
        };
    }
}
