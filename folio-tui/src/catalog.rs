//! Project catalog: the in-memory, append-only list of portfolio projects.
//!
//! Records are seeded from the profile at startup and grow only through
//! [`ProjectCatalog::append`], which consumes the add-project draft.
//! Nothing here is persisted; a restart brings back the seed list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A project shown in the projects section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl ProjectRecord {
    /// Technology names worth drawing as badges
    pub fn badges(&self) -> impl Iterator<Item = &str> {
        self.technologies
            .iter()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }
}

// ============================================
// Draft (add-project form)
// ============================================

/// Fields of the add-project form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Description,
    Technologies,
    GithubUrl,
    LiveUrl,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::Technologies,
        DraftField::GithubUrl,
        DraftField::LiveUrl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Project Title",
            DraftField::Description => "Description",
            DraftField::Technologies => "Technologies (comma-separated)",
            DraftField::GithubUrl => "GitHub URL (optional)",
            DraftField::LiveUrl => "Live URL (optional)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Title => "Enter project title",
            DraftField::Description => "Describe your project",
            DraftField::Technologies => "React, TypeScript, Node.js",
            DraftField::GithubUrl => "https://github.com/username/repo",
            DraftField::LiveUrl => "https://project-demo.com",
        }
    }
}

/// Raw, uncommitted form input. Technologies stay a single string until append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftProject {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub github_url: String,
    pub live_url: String,
}

impl DraftProject {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Technologies => &self.technologies,
            DraftField::GithubUrl => &self.github_url,
            DraftField::LiveUrl => &self.live_url,
        }
    }

    /// Replace a single field, leaving the others untouched. No validation.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
            DraftField::Technologies => &mut self.technologies,
            DraftField::GithubUrl => &mut self.github_url,
            DraftField::LiveUrl => &mut self.live_url,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Literal emptiness check, no trimming: `" "` is a valid title.
    pub fn validate(&self) -> Result<(), AppendError> {
        if self.title.is_empty() {
            return Err(AppendError::MissingTitle);
        }
        if self.description.is_empty() {
            return Err(AppendError::MissingDescription);
        }
        Ok(())
    }
}

/// Why a draft was not appended. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppendError {
    #[error("project title is empty")]
    MissingTitle,
    #[error("project description is empty")]
    MissingDescription,
}

/// Split comma-separated input and trim each piece.
///
/// Empty pieces are kept, so `""` yields `[""]` and `"a,,b"` yields
/// `["a", "", "b"]`.
pub fn split_technologies(input: &str) -> Vec<String> {
    input.split(',').map(|t| t.trim().to_string()).collect()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ============================================
// Id generation
// ============================================

/// Source of wall-clock milliseconds
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// The real clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Timestamp ids that never repeat: a same-millisecond (or backwards) clock
/// reading is bumped to one past the last issued id, and ids already taken
/// by seed records are skipped.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
    taken: HashSet<String>,
}

impl IdGenerator {
    /// A generator that never hands out any of `ids`
    pub fn reserving<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            last: None,
            taken: ids.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn next_id(&mut self, clock: &dyn Clock) -> String {
        let now = clock.now_millis();
        let mut id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        while self.taken.contains(&id.to_string()) {
            id += 1;
        }
        self.last = Some(id);
        let id = id.to_string();
        self.taken.insert(id.clone());
        id
    }
}

// ============================================
// Catalog
// ============================================

/// Ordered project list. Display order is insertion order.
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
    ids: IdGenerator,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for ProjectCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectCatalog")
            .field("records", &self.records)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl ProjectCatalog {
    pub fn new(seed: Vec<ProjectRecord>) -> Self {
        Self::with_clock(seed, Box::new(SystemClock))
    }

    pub fn with_clock(seed: Vec<ProjectRecord>, clock: Box<dyn Clock>) -> Self {
        let ids = IdGenerator::reserving(seed.iter().map(|r| r.id.as_str()));
        Self {
            records: seed,
            ids,
            clock,
        }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Commit the draft as a new last record and clear it.
    ///
    /// On rejection neither the catalog nor the draft changes.
    pub fn append(&mut self, draft: &mut DraftProject) -> Result<&ProjectRecord, AppendError> {
        draft.validate()?;

        let record = ProjectRecord {
            id: self.ids.next_id(self.clock.as_ref()),
            title: draft.title.clone(),
            description: draft.description.clone(),
            technologies: split_technologies(&draft.technologies),
            github_url: non_empty(&draft.github_url),
            live_url: non_empty(&draft.live_url),
        };
        self.records.push(record);
        draft.clear();

        Ok(&self.records[self.records.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clock frozen at a single millisecond
    struct FrozenClock(i64);

    impl Clock for FrozenClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    fn seed() -> Vec<ProjectRecord> {
        vec![ProjectRecord {
            id: "1".to_string(),
            title: "Chess Game".to_string(),
            description: "An interactive chess game".to_string(),
            technologies: vec!["React".to_string(), "CSS".to_string()],
            github_url: None,
            live_url: None,
        }]
    }

    fn draft(title: &str, description: &str, technologies: &str) -> DraftProject {
        DraftProject {
            title: title.to_string(),
            description: description.to_string(),
            technologies: technologies.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let mut catalog = ProjectCatalog::new(seed());
        let mut d = draft("", "Y", "A");

        assert_eq!(catalog.append(&mut d).unwrap_err(), AppendError::MissingTitle);
        assert_eq!(catalog.len(), 1);
        assert_eq!(d.description, "Y");
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let mut catalog = ProjectCatalog::new(seed());
        let mut d = draft("X", "", "A");

        assert_eq!(
            catalog.append(&mut d).unwrap_err(),
            AppendError::MissingDescription
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(d.title, "X");
        assert_eq!(d.technologies, "A");
    }

    #[test]
    fn test_whitespace_title_is_accepted() {
        let mut catalog = ProjectCatalog::new(seed());
        let mut d = draft(" ", " ", "");
        assert!(catalog.append(&mut d).is_ok());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_append_splits_and_trims_technologies() {
        let mut catalog = ProjectCatalog::new(seed());
        let mut d = draft("X", "Y", "A, B ,C");

        catalog.append(&mut d).unwrap();

        let last = catalog.records().last().unwrap();
        assert_eq!(last.title, "X");
        assert_eq!(last.description, "Y");
        assert_eq!(last.technologies, vec!["A", "B", "C"]);
        assert_eq!(catalog.records()[0].title, "Chess Game");
    }

    #[test]
    fn test_empty_technologies_keep_single_empty_name() {
        let mut catalog = ProjectCatalog::new(Vec::new());
        let mut d = draft("X", "Y", "");

        let record = catalog.append(&mut d).unwrap();
        assert_eq!(record.technologies, vec![String::new()]);
        assert_eq!(record.badges().count(), 0);
    }

    #[test]
    fn test_consecutive_commas_keep_empty_names() {
        assert_eq!(split_technologies("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_technologies(" Rust ,"), vec!["Rust", ""]);
    }

    #[test]
    fn test_blank_urls_become_absent() {
        let mut catalog = ProjectCatalog::new(Vec::new());
        let mut d = draft("X", "Y", "A");
        d.set(DraftField::LiveUrl, "https://x");

        let record = catalog.append(&mut d).unwrap();
        assert_eq!(record.github_url, None);
        assert_eq!(record.live_url.as_deref(), Some("https://x"));
    }

    #[test]
    fn test_urls_are_kept_verbatim() {
        let mut catalog = ProjectCatalog::new(Vec::new());
        let mut d = draft("X", "Y", "A");
        d.set(DraftField::GithubUrl, " not a url ");

        let record = catalog.append(&mut d).unwrap();
        assert_eq!(record.github_url.as_deref(), Some(" not a url "));
    }

    #[test]
    fn test_draft_is_cleared_after_append() {
        let mut catalog = ProjectCatalog::new(Vec::new());
        let mut d = DraftProject {
            title: "X".into(),
            description: "Y".into(),
            technologies: "A".into(),
            github_url: "g".into(),
            live_url: "l".into(),
        };

        catalog.append(&mut d).unwrap();
        assert!(d.is_empty());
        for field in DraftField::ALL {
            assert_eq!(d.get(field), "");
        }
    }

    #[test]
    fn test_same_millisecond_appends_get_distinct_ids() {
        let mut catalog = ProjectCatalog::with_clock(seed(), Box::new(FrozenClock(1_700_000_000_000)));

        let mut first = draft("A", "a", "");
        let mut second = draft("B", "b", "");
        catalog.append(&mut first).unwrap();
        catalog.append(&mut second).unwrap();

        let ids: Vec<&str> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "1700000000000", "1700000000001"]);
        assert_eq!(catalog.records()[1].title, "A");
        assert_eq!(catalog.records()[2].title, "B");
    }

    #[test]
    fn test_id_generator_handles_clock_going_backwards() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id(&FrozenClock(500)), "500");
        assert_eq!(ids.next_id(&FrozenClock(400)), "501");
        assert_eq!(ids.next_id(&FrozenClock(900)), "900");
    }

    #[test]
    fn test_generated_ids_skip_seed_ids() {
        let mut seeded = seed();
        let clash = ProjectRecord {
            id: "1700000000000".to_string(),
            ..seeded[0].clone()
        };
        seeded.push(clash);
        let mut catalog = ProjectCatalog::with_clock(seeded, Box::new(FrozenClock(1_700_000_000_000)));

        catalog.append(&mut draft("A", "a", "")).unwrap();
        catalog.append(&mut draft("B", "b", "")).unwrap();

        let ids: Vec<&str> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "1700000000000", "1700000000001", "1700000000002"]);
    }

    #[test]
    fn test_set_changes_only_one_field() {
        let mut d = draft("X", "Y", "Z");
        d.set(DraftField::Description, "new");

        assert_eq!(d.title, "X");
        assert_eq!(d.description, "new");
        assert_eq!(d.technologies, "Z");
        assert_eq!(d.github_url, "");
        assert_eq!(d.live_url, "");
    }
}
