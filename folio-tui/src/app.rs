//! Application state and event handling.
//!
//! A single `App` owns every piece of page state (scroll offset, active
//! section, pointer, menu, project catalog and draft) and is the only
//! thing that mutates it. Events come in through `handle_key`,
//! `handle_mouse`, `resize` and `tick`.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::catalog::{DraftField, DraftProject, ProjectCatalog};
use crate::cursor::PointerPosition;
use crate::page::Page;
use crate::particles::{ParticleMode, ParticleSystem};
use crate::profile::Profile;
use crate::sections::{Section, SectionLayout, SectionTracker};
use crate::ui;

/// Rows moved per mouse wheel notch
const WHEEL_ROWS: u32 = 3;

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Reading the page
    #[default]
    Normal,
    /// Collapsed navigation menu is open
    Menu,
    /// Add-project dialog is open
    Editing,
}

/// Focus slots of the add-project dialog, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(DraftField),
    Submit,
}

impl FormFocus {
    pub fn all() -> [FormFocus; 6] {
        [
            FormFocus::Field(DraftField::Title),
            FormFocus::Field(DraftField::Description),
            FormFocus::Field(DraftField::Technologies),
            FormFocus::Field(DraftField::GithubUrl),
            FormFocus::Field(DraftField::LiveUrl),
            FormFocus::Submit,
        ]
    }
}

/// Dialog focus; the draft itself lives on `App` so it survives closing
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub focused: usize,
}

impl FormState {
    pub fn current(&self) -> FormFocus {
        let all = FormFocus::all();
        all[self.focused % all.len()]
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FormFocus::all().len();
    }

    pub fn prev_field(&mut self) {
        let len = FormFocus::all().len();
        self.focused = self.focused.checked_sub(1).unwrap_or(len - 1);
    }
}

/// Scroll position plus an optional smooth-scroll destination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u32,
    pub target: Option<u32>,
}

/// Collapsed navigation menu
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuState {
    pub open: bool,
    pub selected: usize,
}

/// Log entry for the status line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: Instant,
    pub message: String,
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            timestamp: Instant::now(),
            message: message.into(),
            level: LogLevel::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            timestamp: Instant::now(),
            message: message.into(),
            level: LogLevel::Success,
        }
    }
}

/// Startup options for [`App`]
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub particles: ParticleMode,
    pub lookahead: u32,
    pub cursor: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            particles: ParticleMode::Stars,
            lookahead: 3,
            cursor: true,
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,

    /// Static content
    pub profile: Profile,
    /// Live project list
    pub catalog: ProjectCatalog,
    /// Add-project form contents
    pub draft: DraftProject,
    /// Add-project dialog (if open)
    pub form_state: Option<FormState>,

    pub tracker: SectionTracker,
    pub scroll: ScrollState,
    pub menu: MenuState,

    pub pointer: PointerPosition,
    /// Cursor follower allowed at all (`--no-cursor` turns it off)
    pub cursor_enabled: bool,
    /// Cursor follower currently shown
    pub show_cursor: bool,

    pub particle_system: ParticleSystem,

    /// Page laid out for the current width
    pub page: Page,
    /// Screen regions from the last resize
    pub screen: ui::ScreenLayout,

    pub logs: Vec<LogEntry>,
    max_logs: usize,

    pub show_help: bool,
}

impl App {
    pub fn new(profile: Profile, options: AppOptions) -> Self {
        let catalog = ProjectCatalog::new(profile.projects.clone());
        let mut app = Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            profile,
            catalog,
            draft: DraftProject::default(),
            form_state: None,
            tracker: SectionTracker::new(options.lookahead),
            scroll: ScrollState::default(),
            menu: MenuState::default(),
            pointer: PointerPosition::default(),
            cursor_enabled: options.cursor,
            show_cursor: options.cursor,
            particle_system: ParticleSystem::new(options.particles),
            page: Page::default(),
            screen: ui::ScreenLayout::default(),
            logs: Vec::new(),
            max_logs: 100,
            show_help: false,
        };

        app.log(LogEntry::info(format!(
            "Welcome to {}'s portfolio. Press ? for help",
            app.profile.name
        )));
        app
    }

    /// Add a log entry
    pub fn log(&mut self, entry: LogEntry) {
        tracing::info!(level = ?entry.level, "{}", entry.message);
        self.logs.push(entry);
        if self.logs.len() > self.max_logs {
            self.logs.remove(0);
        }
    }

    pub fn active_section(&self) -> Section {
        self.tracker.active()
    }

    // ============================================
    // Layout & scrolling
    // ============================================

    /// Adapt to the terminal size; rebuilds the page when the width changed
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = ui::ScreenLayout::new(Rect::new(0, 0, width, height));
        if self.page.width != self.screen.page.width || self.page.lines.is_empty() {
            self.relayout();
        } else {
            self.clamp_scroll();
        }
    }

    /// Rebuild the page for the current width and re-run the tracker
    pub fn relayout(&mut self) {
        self.page = Page::build(&self.profile, self.catalog.records(), self.screen.page.width);
        tracing::debug!(
            width = self.page.width,
            rows = self.page.total_rows(),
            "page laid out"
        );
        self.clamp_scroll();
    }

    fn viewport_rows(&self) -> u32 {
        self.screen.page.height as u32
    }

    pub fn max_scroll(&self) -> u32 {
        self.page.total_rows().saturating_sub(self.viewport_rows())
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        if let Some(target) = self.scroll.target.as_mut() {
            *target = (*target).min(max);
        }
        self.set_offset(self.scroll.offset);
    }

    /// Every offset change funnels through here so the tracker never lags
    fn set_offset(&mut self, offset: u32) {
        self.scroll.offset = offset.min(self.max_scroll());
        self.tracker.on_scroll(self.scroll.offset, &self.page.layout);
    }

    /// Jump straight to an offset, cancelling any smooth scroll
    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll.target = None;
        self.set_offset(offset);
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let offset = (self.scroll.offset as i64 + delta).max(0) as u32;
        self.scroll_to(offset);
    }

    /// Start a smooth scroll to the top of a section and close the menu
    pub fn scroll_to_section(&mut self, section: Section) {
        if let Some(geometry) = self.page.layout.geometry(section) {
            self.scroll.target = Some(geometry.top.min(self.max_scroll()));
        }
        self.close_menu();
    }

    /// Move a quarter of the remaining distance (at least one row)
    fn step_smooth_scroll(&mut self) {
        let Some(target) = self.scroll.target else {
            return;
        };
        let offset = self.scroll.offset;
        let distance = target.abs_diff(offset);
        let step = (distance / 4).max(1);
        let next = if target > offset {
            offset + step.min(distance)
        } else {
            offset - step.min(distance)
        };
        self.set_offset(next);
        if self.scroll.offset == target {
            self.scroll.target = None;
        }
    }

    // ============================================
    // Menu
    // ============================================

    pub fn toggle_menu(&mut self) {
        if self.menu.open {
            self.close_menu();
        } else {
            self.menu.open = true;
            self.menu.selected = self.active_section().index();
            self.input_mode = InputMode::Menu;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu.open = false;
        if self.input_mode == InputMode::Menu {
            self.input_mode = InputMode::Normal;
        }
    }

    // ============================================
    // Add-project dialog
    // ============================================

    pub fn open_form(&mut self) {
        self.close_menu();
        self.form_state = Some(FormState::default());
        self.input_mode = InputMode::Editing;
    }

    /// Close the dialog; the draft is kept for next time
    pub fn close_form(&mut self) {
        self.form_state = None;
        self.input_mode = InputMode::Normal;
    }

    /// Replace a draft field as the user types
    pub fn update_draft(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    /// Commit the draft. Invalid drafts are dropped without any visible feedback.
    pub fn submit_draft(&mut self) {
        match self.catalog.append(&mut self.draft) {
            Ok(record) => {
                tracing::info!(id = %record.id, title = %record.title, "project added");
                let message = format!("Added project \"{}\"", record.title);
                self.log(LogEntry::success(message));
                self.relayout();
            }
            Err(e) => {
                tracing::debug!(reason = %e, "draft not added");
            }
        }
    }

    // ============================================
    // Events
    // ============================================

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Handle help overlay
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                self.show_help = false;
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Menu => self.handle_menu_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        let page_rows = self.viewport_rows().max(1) as i64;

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('p') => {
                self.particle_system.toggle_mode();
                let mode = self.particle_system.mode().name();
                self.log(LogEntry::info(format!("Background: {}", mode)));
            }
            KeyCode::Char('c') if self.cursor_enabled => {
                self.show_cursor = !self.show_cursor;
            }
            KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Char('a') => self.open_form(),

            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page_rows),
            KeyCode::PageUp => self.scroll_by(-page_rows),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to(0),
            KeyCode::Char('G') | KeyCode::End => self.scroll_to(self.max_scroll()),

            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                if let Some(section) = Section::from_index(index) {
                    self.scroll_to_section(section);
                }
            }
            KeyCode::Char(']') => self.scroll_to_section(self.active_section().next()),
            KeyCode::Char('[') => self.scroll_to_section(self.active_section().previous()),
            KeyCode::Char('w') => self.scroll_to_section(Section::Projects),
            KeyCode::Char('t') => self.scroll_to_section(Section::Contact),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let total = Section::ALL.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => self.close_menu(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.menu.selected = (self.menu.selected + 1) % total;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.menu.selected = self.menu.selected.checked_sub(1).unwrap_or(total - 1);
            }
            KeyCode::Enter => {
                if let Some(section) = Section::from_index(self.menu.selected) {
                    self.scroll_to_section(section);
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                if let Some(section) = Section::from_index(index) {
                    self.scroll_to_section(section);
                }
            }
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form_state.as_mut() else {
            self.input_mode = InputMode::Normal;
            return;
        };

        match key.code {
            KeyCode::Esc => self.close_form(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => match form.current() {
                // Enter on a text field moves on instead of submitting
                FormFocus::Field(_) => form.next_field(),
                FormFocus::Submit => self.submit_draft(),
            },
            KeyCode::Backspace => {
                if let FormFocus::Field(field) = form.current() {
                    let mut value = self.draft.get(field).to_string();
                    value.pop();
                    self.update_draft(field, value);
                }
            }
            KeyCode::Char(c) => {
                if let FormFocus::Field(field) = form.current() {
                    let mut value = self.draft.get(field).to_string();
                    value.push(c);
                    self.update_draft(field, value);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = PointerPosition::new(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown if self.input_mode != InputMode::Editing => {
                self.scroll_by(WHEEL_ROWS as i64);
            }
            MouseEventKind::ScrollUp if self.input_mode != InputMode::Editing => {
                self.scroll_by(-(WHEEL_ROWS as i64));
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.input_mode == InputMode::Editing || self.show_help {
            return;
        }
        let position = Position::new(column, row);

        if self.menu.open {
            if let Some(section) = ui::menu_hit(&self.screen, position) {
                self.scroll_to_section(section);
                return;
            }
        }

        if ui::menu_toggle_hit(&self.screen, position) {
            self.toggle_menu();
            return;
        }

        if let Some(section) = ui::nav_hit(&self.screen, position) {
            self.scroll_to_section(section);
            return;
        }

        if self.screen.page.contains(position) {
            let page_row = self.scroll.offset + (row - self.screen.page.y) as u32;
            if Some(page_row) == self.page.add_project_row {
                self.open_form();
                return;
            }
        }

        // A click anywhere else dismisses the menu
        self.close_menu();
    }

    /// Update animations (called every frame)
    pub fn tick(&mut self) {
        self.particle_system.update();
        self.step_smooth_scroll();
    }

    /// Status line text
    pub fn status_text(&self) -> String {
        format!(
            "{} | {} projects | ?: Help | 1-7: Jump | a: Add Project | q: Quit",
            self.active_section().name(),
            self.catalog.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app() -> App {
        let mut app = App::new(Profile::builtin(), AppOptions::default());
        app.resize(120, 40);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn settle(app: &mut App) {
        for _ in 0..500 {
            app.tick();
            if app.scroll.target.is_none() {
                break;
            }
        }
    }

    #[test]
    fn test_starts_at_home() {
        let app = app();
        assert_eq!(app.active_section(), Section::Home);
        assert_eq!(app.scroll.offset, 0);
        assert_eq!(app.catalog.len(), 3);
    }

    #[test]
    fn test_scrolling_updates_active_section() {
        let mut app = app();
        let about = app.page.layout.geometry(Section::About).unwrap();

        app.scroll_to(about.top);
        assert_eq!(app.active_section(), Section::About);

        app.scroll_to(0);
        assert_eq!(app.active_section(), Section::Home);
    }

    #[test]
    fn test_smooth_scroll_reaches_section() {
        let mut app = app();
        let experience = app.page.layout.geometry(Section::Experience).unwrap();

        app.handle_key(key(KeyCode::Char('4')));
        assert!(app.scroll.target.is_some());
        settle(&mut app);

        assert_eq!(app.scroll.offset, experience.top);
        assert_eq!(app.active_section(), Section::Experience);
    }

    #[test]
    fn test_manual_scroll_cancels_smooth_scroll() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('5')));
        app.tick();
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.scroll.target, None);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app();
        app.scroll_by(-10);
        assert_eq!(app.scroll.offset, 0);

        app.handle_key(key(KeyCode::End));
        assert_eq!(app.scroll.offset, app.max_scroll());
        app.scroll_by(1_000);
        assert_eq!(app.scroll.offset, app.max_scroll());
    }

    #[test]
    fn test_wheel_scrolls_three_rows() {
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(app.scroll.offset, 3);
        app.handle_mouse(mouse(MouseEventKind::ScrollUp, 10, 10));
        assert_eq!(app.scroll.offset, 0);
    }

    #[test]
    fn test_pointer_follows_mouse_moves() {
        let mut app = app();
        assert!(!app.pointer.is_visible());

        app.handle_mouse(mouse(MouseEventKind::Moved, 17, 5));
        assert_eq!(app.pointer, PointerPosition::new(17, 5));
        assert!(app.pointer.is_visible());
    }

    #[test]
    fn test_add_project_through_dialog() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "Folio");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "Terminal portfolio");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "Rust, ratatui ,crossterm");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "https://x");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.catalog.len(), 4);
        let last = app.catalog.records().last().unwrap();
        assert_eq!(last.title, "Folio");
        assert_eq!(last.technologies, vec!["Rust", "ratatui", "crossterm"]);
        assert_eq!(last.github_url, None);
        assert_eq!(last.live_url.as_deref(), Some("https://x"));
        assert!(app.draft.is_empty());
        // dialog stays open for the next entry
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_invalid_draft_is_silently_kept() {
        let mut app = app();
        let logs_before = app.logs.len();
        app.open_form();
        type_text(&mut app, "Only a title");
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Tab));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.catalog.len(), 3);
        assert_eq!(app.draft.title, "Only a title");
        assert_eq!(app.logs.len(), logs_before);
    }

    #[test]
    fn test_enter_on_field_moves_focus() {
        let mut app = app();
        app.open_form();
        app.handle_key(key(KeyCode::Enter));
        let form = app.form_state.as_ref().unwrap();
        assert_eq!(form.current(), FormFocus::Field(DraftField::Description));
    }

    #[test]
    fn test_backspace_edits_focused_field_only() {
        let mut app = app();
        app.draft.set(DraftField::Description, "keep");
        app.open_form();
        type_text(&mut app, "abc");
        app.handle_key(key(KeyCode::Backspace));

        assert_eq!(app.draft.title, "ab");
        assert_eq!(app.draft.description, "keep");
    }

    #[test]
    fn test_draft_survives_closing_dialog() {
        let mut app = app();
        app.open_form();
        type_text(&mut app, "WIP");
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);

        app.open_form();
        assert_eq!(app.draft.title, "WIP");
    }

    #[test]
    fn test_typing_in_dialog_does_not_trigger_shortcuts() {
        let mut app = app();
        app.open_form();
        type_text(&mut app, "q7m");
        assert!(!app.should_quit);
        assert_eq!(app.scroll.target, None);
        assert_eq!(app.draft.title, "q7m");
    }

    #[test]
    fn test_append_grows_page() {
        let mut app = app();
        let rows_before = app.page.total_rows();
        app.draft = DraftProject {
            title: "X".into(),
            description: "Y".into(),
            ..Default::default()
        };
        app.submit_draft();
        assert!(app.page.total_rows() > rows_before);
    }

    #[test]
    fn test_menu_selection_scrolls_and_closes() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('m')));
        assert!(app.menu.open);
        assert_eq!(app.input_mode, InputMode::Menu);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert!(!app.menu.open);
        assert_eq!(app.input_mode, InputMode::Normal);
        settle(&mut app);
        assert_eq!(app.active_section(), Section::Education);
    }

    #[test]
    fn test_next_and_previous_section_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char(']')));
        settle(&mut app);
        assert_eq!(app.active_section(), Section::About);

        app.handle_key(key(KeyCode::Char('[')));
        settle(&mut app);
        assert_eq!(app.active_section(), Section::Home);
    }

    #[test]
    fn test_clicking_nav_item_scrolls_to_section() {
        let mut app = app();
        let (section, rect) = ui::nav_items(&app.screen)
            .into_iter()
            .find(|(s, _)| *s == Section::About)
            .unwrap();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y));
        assert_eq!(section, Section::About);
        settle(&mut app);
        assert_eq!(app.active_section(), Section::About);
    }

    #[test]
    fn test_narrow_terminal_uses_menu_toggle() {
        let mut app = App::new(Profile::builtin(), AppOptions::default());
        app.resize(60, 30);
        assert!(ui::nav_items(&app.screen).is_empty());

        let toggle = ui::menu_toggle_rect(&app.screen).unwrap();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), toggle.x, toggle.y));
        assert!(app.menu.open);

        let menu = ui::menu_rect(&app.screen);
        // first item row sits just inside the border
        app.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            menu.x + 2,
            menu.y + 1 + Section::Skills.index() as u16,
        ));
        assert!(!app.menu.open);
        settle(&mut app);
        assert_eq!(app.scroll.offset, app.page.layout.geometry(Section::Skills).unwrap().top.min(app.max_scroll()));
    }

    #[test]
    fn test_resize_keeps_tracker_consistent() {
        let mut app = app();
        app.handle_key(key(KeyCode::End));
        app.resize(50, 40);
        assert!(app.scroll.offset <= app.max_scroll());
        assert_eq!(app.page.width, 50);

        let mut expected = SectionTracker::new(3);
        expected.on_scroll(app.scroll.offset, &app.page.layout);
        if app.page.section_at(app.scroll.offset + 3).is_some() {
            assert_eq!(app.active_section(), expected.active());
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_cursor_toggle_respects_flag() {
        let mut app = App::new(
            Profile::builtin(),
            AppOptions {
                cursor: false,
                ..Default::default()
            },
        );
        app.resize(120, 40);
        app.handle_key(key(KeyCode::Char('c')));
        assert!(!app.show_cursor);

        let mut app = self::app();
        app.handle_key(key(KeyCode::Char('c')));
        assert!(!app.show_cursor);
        app.handle_key(key(KeyCode::Char('c')));
        assert!(app.show_cursor);
    }
}
