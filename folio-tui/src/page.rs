//! Page builder.
//!
//! Lays the whole portfolio out as one tall column of pre-wrapped lines for
//! a given terminal width, and records where each section starts and how
//! tall it is. The renderer shows a window of these lines; the section
//! tracker reads the geometry.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::catalog::ProjectRecord;
use crate::profile::Profile;
use crate::sections::{PageLayout, Section, SectionGeometry};
#[cfg(test)]
use crate::sections::SectionLayout;
use crate::theme::{badge_color, colors, styles};

/// Columns kept free on the left of every line
const MARGIN: usize = 2;
/// Body text never gets wider than this
const MAX_TEXT_WIDTH: usize = 96;
/// Width of one cell in the skills grid
const SKILL_CELL: usize = 26;

/// The laid-out page
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
    /// Row holding the "+ Add Project" action
    pub add_project_row: Option<u32>,
    /// Width the page was built for
    pub width: u16,
}

impl Page {
    pub fn total_rows(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Which section a page row belongs to, if any
    #[cfg(test)]
    pub fn section_at(&self, row: u32) -> Option<Section> {
        Section::ALL
            .iter()
            .copied()
            .find(|s| self.layout.geometry(*s).is_some_and(|g| g.contains(row)))
    }

    pub fn build(profile: &Profile, projects: &[ProjectRecord], width: u16) -> Self {
        let text_width = (width as usize)
            .saturating_sub(MARGIN * 2)
            .clamp(10, MAX_TEXT_WIDTH);
        let mut builder = Builder {
            lines: Vec::new(),
            layout: PageLayout::default(),
            add_project_row: None,
            text_width,
        };

        for section in Section::ALL {
            let top = builder.lines.len() as u32;
            match section {
                Section::Home => builder.home(profile),
                Section::About => builder.about(profile),
                Section::Education => builder.education(profile),
                Section::Experience => builder.experience(profile),
                Section::Projects => builder.projects(projects),
                Section::Skills => builder.skills(profile),
                Section::Contact => builder.contact(profile),
            }
            let height = builder.lines.len() as u32 - top;
            builder.layout.set(section, SectionGeometry::new(top, height));
        }

        // The footer sits below the last section and belongs to none of them
        builder.blank();
        builder.centered(&profile.footer, styles::text_hint());
        builder.blank();

        Page {
            lines: builder.lines,
            layout: builder.layout,
            add_project_row: builder.add_project_row,
            width,
        }
    }
}

struct Builder {
    lines: Vec<Line<'static>>,
    layout: PageLayout,
    add_project_row: Option<u32>,
    text_width: usize,
}

impl Builder {
    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = vec![Span::raw(" ".repeat(MARGIN))];
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn centered(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.text_width) {
            let pad = self.text_width.saturating_sub(row.chars().count()) / 2;
            self.push(vec![Span::raw(" ".repeat(pad)), Span::styled(row, style)]);
        }
    }

    fn paragraph(&mut self, text: &str, style: Style, indent: usize) {
        let width = self.text_width.saturating_sub(indent).max(1);
        for row in wrap(text, width) {
            self.push(vec![Span::raw(" ".repeat(indent)), Span::styled(row, style)]);
        }
    }

    fn heading(&mut self, text: &str) {
        self.blank();
        self.push(vec![Span::styled(text.to_string(), styles::heading())]);
        let rule = "─".repeat(text.chars().count().max(4));
        self.push(vec![Span::styled(rule, Style::default().fg(colors::PURPLE))]);
        self.blank();
    }

    /// A row of badges, wrapped onto as many lines as needed
    fn badges<'a>(&mut self, names: impl Iterator<Item = &'a str>, indent: usize) {
        let width = self.text_width.saturating_sub(indent);
        let mut row: Vec<Span<'static>> = vec![Span::raw(" ".repeat(indent))];
        let mut used = 0;

        for (i, name) in names.enumerate() {
            let label = format!("[{}]", name);
            let len = label.chars().count() + 1;
            if used > 0 && used + len > width {
                self.push(std::mem::replace(&mut row, vec![Span::raw(" ".repeat(indent))]));
                used = 0;
            }
            row.push(Span::styled(label, Style::default().fg(badge_color(i))));
            row.push(Span::raw(" "));
            used += len;
        }
        if used > 0 {
            self.push(row);
        }
    }

    fn home(&mut self, profile: &Profile) {
        self.blank();
        self.blank();
        self.centered(
            &format!("( {} )", profile.initials),
            Style::default()
                .fg(colors::BG_DARK)
                .bg(colors::YELLOW)
                .add_modifier(Modifier::BOLD),
        );
        self.blank();
        self.centered(&profile.name, styles::brand());
        self.centered(&profile.headline, styles::subtitle());
        self.blank();
        self.centered(&profile.tagline, styles::text_dim());
        self.blank();
        self.centered("[w] View My Work     [t] Get In Touch", styles::text());
        self.blank();
        self.centered("⌄", styles::text_hint());
        self.blank();
    }

    fn about(&mut self, profile: &Profile) {
        self.heading("About Me");
        for paragraph in &profile.about {
            self.paragraph(paragraph, styles::text_dim(), 0);
            self.blank();
        }
    }

    fn education(&mut self, profile: &Profile) {
        self.heading("Education");
        for entry in &profile.education {
            self.push(vec![
                Span::styled("◆ ", Style::default().fg(colors::YELLOW)),
                Span::styled(entry.title.clone(), styles::title()),
            ]);
            self.paragraph(&entry.subtitle, styles::subtitle(), 2);
            self.paragraph(&entry.summary, styles::text_dim(), 2);
            self.blank();
        }
    }

    fn experience(&mut self, profile: &Profile) {
        self.heading("Experience");
        for entry in &profile.experience {
            self.push(vec![
                Span::styled("◆ ", Style::default().fg(colors::PURPLE)),
                Span::styled(entry.role.clone(), styles::title()),
            ]);
            self.paragraph(&entry.organization, styles::subtitle(), 2);
            self.paragraph(&entry.summary, styles::text_dim(), 2);
            self.badges(entry.tags.iter().map(String::as_str), 2);
            self.blank();
        }
    }

    fn projects(&mut self, projects: &[ProjectRecord]) {
        self.heading("Projects");
        self.add_project_row = Some(self.lines.len() as u32);
        self.push(vec![Span::styled(
            "[a] + Add Project".to_string(),
            styles::button_focused(),
        )]);
        self.blank();

        for project in projects {
            self.push(vec![
                Span::styled("▸ ", Style::default().fg(colors::YELLOW)),
                Span::styled(project.title.clone(), styles::title()),
            ]);
            if let Some(url) = &project.github_url {
                self.push(vec![
                    Span::styled("  GitHub  ".to_string(), styles::text_hint()),
                    Span::styled(url.clone(), styles::link()),
                ]);
            }
            if let Some(url) = &project.live_url {
                self.push(vec![
                    Span::styled("  Live    ".to_string(), styles::text_hint()),
                    Span::styled(url.clone(), styles::link()),
                ]);
            }
            self.paragraph(&project.description, styles::text_dim(), 2);
            self.badges(project.badges(), 2);
            self.blank();
        }
    }

    fn skills(&mut self, profile: &Profile) {
        self.heading("Skills");
        let per_row = (self.text_width / SKILL_CELL).max(1);
        for chunk in profile.skills.chunks(per_row) {
            let spans = chunk
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    let cell = format!("✦ {:<width$}", skill, width = SKILL_CELL - 2);
                    Span::styled(cell, Style::default().fg(badge_color(i)))
                })
                .collect();
            self.push(spans);
        }
        self.blank();
    }

    fn contact(&mut self, profile: &Profile) {
        self.heading("Let's Connect");
        self.paragraph(&profile.contact_blurb, styles::text_dim(), 0);
        self.blank();
        for contact in &profile.contacts {
            self.push(vec![
                Span::styled(format!("{:<10}", contact.label), styles::title()),
                Span::styled(contact.url.clone(), styles::link()),
            ]);
        }
        self.blank();
    }
}

/// Greedy word wrap on character counts. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}
