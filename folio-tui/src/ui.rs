//! UI rendering module.
//!
//! Draws the nav bar, the scrolled page, the status line and the overlays
//! (menu, add-project dialog, help). The geometry helpers at the top are
//! shared with `App` for mouse hit-testing, so what is drawn and what is
//! clickable always agree.

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, FormFocus, InputMode, LogLevel};
use crate::catalog::DraftField;
use crate::cursor::CursorFollower;
use crate::particles::ParticleWidget;
use crate::sections::Section;
use crate::theme::{colors, styles};

/// Below this width the nav items collapse behind a menu toggle
pub const NAV_COLLAPSE_WIDTH: u16 = 100;
/// Menu dropdown size
const MENU_WIDTH: u16 = 20;
/// Status messages fade back to the key hints after this long
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(6);

/// Screen regions for one terminal size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub area: Rect,
    pub nav: Rect,
    pub page: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Nav bar
                Constraint::Min(1),    // Page
                Constraint::Length(1), // Status line
            ])
            .split(area);
        Self {
            area,
            nav: chunks[0],
            page: chunks[1],
            status: chunks[2],
        }
    }

    /// Nav bar without its border
    fn nav_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.nav)
    }

    pub fn is_collapsed(&self) -> bool {
        self.area.width < NAV_COLLAPSE_WIDTH
    }
}

fn nav_label(section: Section) -> String {
    format!(" {} ", section.name())
}

/// Clickable nav items, right-aligned in the nav bar. Empty when collapsed.
pub fn nav_items(screen: &ScreenLayout) -> Vec<(Section, Rect)> {
    if screen.is_collapsed() {
        return Vec::new();
    }
    let inner = screen.nav_inner();
    let total: u16 = Section::ALL
        .iter()
        .map(|s| nav_label(*s).chars().count() as u16 + 1)
        .sum();

    let mut x = inner.right().saturating_sub(total);
    Section::ALL
        .iter()
        .map(|section| {
            let width = nav_label(*section).chars().count() as u16;
            let rect = Rect::new(x, inner.y, width, 1);
            x += width + 1;
            (*section, rect)
        })
        .collect()
}

pub fn nav_hit(screen: &ScreenLayout, position: Position) -> Option<Section> {
    nav_items(screen)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(section, _)| section)
}

/// The "☰ Menu" toggle, only present when the nav is collapsed
pub fn menu_toggle_rect(screen: &ScreenLayout) -> Option<Rect> {
    if !screen.is_collapsed() {
        return None;
    }
    let inner = screen.nav_inner();
    let width = 8.min(inner.width);
    Some(Rect::new(inner.right().saturating_sub(width), inner.y, width, 1))
}

pub fn menu_toggle_hit(screen: &ScreenLayout, position: Position) -> bool {
    menu_toggle_rect(screen).is_some_and(|rect| rect.contains(position))
}

/// Dropdown under the nav bar's right edge
pub fn menu_rect(screen: &ScreenLayout) -> Rect {
    let height = Section::ALL.len() as u16 + 2;
    let width = MENU_WIDTH.min(screen.area.width);
    let x = screen.area.right().saturating_sub(width + 1);
    Rect::new(x, screen.nav.bottom(), width, height.min(screen.page.height))
}

pub fn menu_hit(screen: &ScreenLayout, position: Position) -> Option<Section> {
    let rect = menu_rect(screen);
    if !rect.contains(position) || position.y == rect.y {
        return None;
    }
    Section::from_index((position.y - rect.y - 1) as usize)
}

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = ScreenLayout::new(area);

    // Fill background with theme color
    let bg_block = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg_block, area);

    // Stars go underneath everything else
    frame.render_widget(ParticleWidget::new(&app.particle_system), area);

    render_page(frame, app, screen.page);
    render_nav(frame, app, &screen);
    render_status(frame, app, screen.status);

    if app.show_cursor {
        frame.render_widget(CursorFollower::new(app.pointer), area);
    }

    // Render overlays (menu, dialog, help)
    if app.menu.open {
        render_menu(frame, app, &screen);
    }

    if app.input_mode == InputMode::Editing {
        render_form_modal(frame, app, area);
    }

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Render the nav bar
fn render_nav(frame: &mut Frame, app: &App, screen: &ScreenLayout) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border())
        .style(Style::default().bg(colors::BG_MEDIUM));
    frame.render_widget(block, screen.nav);

    let inner = screen.nav_inner();
    let brand = Paragraph::new(Span::styled(app.profile.name.clone(), styles::brand()));
    frame.render_widget(brand, Rect::new(inner.x, inner.y, inner.width, 1));

    for (section, rect) in nav_items(screen) {
        let style = if section == app.active_section() {
            styles::nav_active()
        } else {
            styles::nav_inactive()
        };
        frame.render_widget(Paragraph::new(Span::styled(nav_label(section), style)), rect);
    }

    if let Some(rect) = menu_toggle_rect(screen) {
        let label = if app.menu.open { "✕ Close" } else { "☰ Menu" };
        let toggle = Paragraph::new(Span::styled(label, styles::nav_active()))
            .alignment(Alignment::Right);
        frame.render_widget(toggle, rect);
    }
}

/// Render the visible window of the page
fn render_page(frame: &mut Frame, app: &App, area: Rect) {
    let visible: Vec<Line> = app
        .page
        .lines
        .iter()
        .skip(app.scroll.offset as usize)
        .take(area.height as usize)
        .cloned()
        .collect();

    frame.render_widget(Paragraph::new(visible), area);
}

/// Render the status line: the latest message while fresh, key hints otherwise
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let fresh = app
        .logs
        .last()
        .filter(|entry| entry.timestamp.elapsed() < STATUS_MESSAGE_TTL);

    let line = match fresh {
        Some(entry) => {
            let (prefix, color) = match entry.level {
                LogLevel::Info => ("i", colors::PURPLE_LIGHT),
                LogLevel::Success => ("+", colors::GREEN),
            };
            Line::from(vec![
                Span::styled(format!(" [{}] ", prefix), Style::default().fg(color)),
                Span::styled(entry.message.clone(), styles::text_dim()),
            ])
        }
        None => Line::from(Span::styled(format!(" {}", app.status_text()), styles::text_hint())),
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors::BG_MEDIUM)),
        area,
    );
}

/// Render the collapsed nav menu
fn render_menu(frame: &mut Frame, app: &App, screen: &ScreenLayout) {
    let area = menu_rect(screen);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            let style = if section.index() == app.menu.selected {
                styles::selected()
            } else if *section == app.active_section() {
                styles::nav_active()
            } else {
                styles::text()
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {} {}", section.index() + 1, section.name()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border())
            .style(Style::default().bg(colors::BG_MEDIUM)),
    );
    frame.render_widget(list, area);
}

/// Render the add-project dialog
fn render_form_modal(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form_state else {
        return;
    };

    // description(2) + 5 fields * 3 + spacer(1) + button(1) + borders(2)
    let popup_area = centered_rect(64, 21, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Add New Project ")
        .title_style(styles::heading())
        .borders(Borders::ALL)
        .border_style(styles::border_focused())
        .style(Style::default().bg(colors::BG_MEDIUM));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(DraftField::ALL.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled("Add a new project to your portfolio", styles::text_dim())),
        chunks[0],
    );

    for (i, field) in DraftField::ALL.iter().enumerate() {
        render_text_field(
            frame,
            *field,
            app.draft.get(*field),
            form.current() == FormFocus::Field(*field),
            chunks[i + 1],
        );
    }

    let submit_style = if form.current() == FormFocus::Submit {
        styles::button_focused()
    } else {
        styles::button()
    };
    let button = Paragraph::new(Span::styled("  [ Add Project ]  ", submit_style))
        .alignment(Alignment::Center);
    frame.render_widget(button, chunks[chunks.len() - 1]);
}

/// Render one labelled input box
fn render_text_field(frame: &mut Frame, field: DraftField, value: &str, is_focused: bool, area: Rect) {
    let (text, style) = if value.is_empty() && !is_focused {
        (field.placeholder().to_string(), styles::text_hint())
    } else if is_focused {
        (format!("{}█", value), styles::form_input_focused())
    } else {
        (value.to_string(), styles::form_input())
    };

    // Keep the tail of long input in view
    let width = area.width.saturating_sub(3) as usize;
    let count = text.chars().count();
    let shown: String = text.chars().skip(count.saturating_sub(width)).collect();

    let input = Paragraph::new(format!(" {}", shown)).style(style).block(
        Block::default()
            .title(format!(" {} ", field.label()))
            .title_style(styles::form_label())
            .borders(Borders::ALL)
            .border_style(if is_focused {
                styles::border_focused()
            } else {
                styles::border_dim()
            }),
    );
    frame.render_widget(input, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(56, 26, area);
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<16}", k), Style::default().fg(colors::YELLOW)),
            Span::raw(what),
        ])
    };
    let group = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(colors::PURPLE_LIGHT)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let help_text = vec![
        group("Reading"),
        key("j/k Up/Down", "Scroll one row"),
        key("PgUp/PgDn Space", "Scroll one screen"),
        key("g/G Home/End", "Top / bottom"),
        key("Mouse wheel", "Scroll"),
        Line::from(""),
        group("Navigation"),
        key("1-7", "Jump to section"),
        key("[ / ]", "Previous / next section"),
        key("w", "View my work"),
        key("t", "Get in touch"),
        key("m", "Toggle section menu"),
        key("Click", "Nav items, menu, + Add Project"),
        Line::from(""),
        group("Projects"),
        key("a", "Add a project"),
        key("Tab/Shift+Tab", "Next / previous field"),
        key("Enter", "Next field / add on button"),
        key("Esc", "Close dialog (draft is kept)"),
        Line::from(""),
        group("General"),
        key("p", "Cycle background"),
        key("c", "Toggle cursor follower"),
        key("q / Ctrl+C", "Quit"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(styles::title())
                .borders(Borders::ALL)
                .border_style(styles::border())
                .style(Style::default().bg(colors::BG_MEDIUM)),
        )
        .style(styles::text());

    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use crate::profile::Profile;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(&terminal)
    }

    fn app(width: u16, height: u16) -> App {
        let mut app = App::new(
            Profile::builtin(),
            AppOptions {
                particles: crate::particles::ParticleMode::None,
                ..Default::default()
            },
        );
        app.resize(width, height);
        app
    }

    #[test]
    fn test_nav_items_fit_in_nav_bar() {
        let screen = ScreenLayout::new(Rect::new(0, 0, 120, 40));
        let items = nav_items(&screen);
        assert_eq!(items.len(), 7);
        for (_, rect) in &items {
            assert!(rect.right() <= screen.nav.right());
            assert_eq!(rect.y, 1);
        }
        // no overlaps, left to right
        for pair in items.windows(2) {
            assert!(pair[0].1.right() < pair[1].1.x);
        }
    }

    #[test]
    fn test_collapsed_nav_has_toggle_only() {
        let screen = ScreenLayout::new(Rect::new(0, 0, 80, 30));
        assert!(nav_items(&screen).is_empty());
        let toggle = menu_toggle_rect(&screen).unwrap();
        assert!(menu_toggle_hit(&screen, Position::new(toggle.x, toggle.y)));
    }

    #[test]
    fn test_menu_hit_maps_rows_to_sections() {
        let screen = ScreenLayout::new(Rect::new(0, 0, 80, 30));
        let rect = menu_rect(&screen);
        assert_eq!(menu_hit(&screen, Position::new(rect.x + 1, rect.y)), None);
        assert_eq!(
            menu_hit(&screen, Position::new(rect.x + 1, rect.y + 1)),
            Some(Section::Home)
        );
        assert_eq!(
            menu_hit(&screen, Position::new(rect.x + 1, rect.y + 7)),
            Some(Section::Contact)
        );
    }

    #[test]
    fn test_render_shows_name_and_nav() {
        let app = app(120, 40);
        let text = draw(&app, 120, 40);
        assert!(text.contains("Ananya Pandey"));
        assert!(text.contains("Experience"));
    }

    #[test]
    fn test_render_form_modal() {
        let mut app = app(100, 40);
        app.open_form();
        let text = draw(&app, 100, 40);
        assert!(text.contains("Add New Project"));
        assert!(text.contains("Project Title"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut app = app(12, 5);
        app.open_form();
        app.show_help = true;
        draw(&app, 12, 5);
    }
}
