//! Static portfolio content.
//!
//! Everything the page displays apart from the live project list comes from
//! a [`Profile`]. The built-in profile can be replaced by a TOML file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ProjectRecord;

/// Errors raised while loading a profile file
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("profile {path} lists project id {id:?} more than once")]
    DuplicateProjectId { path: PathBuf, id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub title: String,
    pub subtitle: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// Outbound link shown in the contact section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub headline: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    /// Seed data for the project catalog
    pub projects: Vec<ProjectRecord>,
    pub skills: Vec<String>,
    pub contact_blurb: String,
    pub contacts: Vec<Contact>,
    pub footer: String,
}

impl Profile {
    /// Load a profile from a TOML file
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profile: Profile = toml::from_str(&raw).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(id) = profile.duplicate_project_id() {
            return Err(ProfileError::DuplicateProjectId {
                path: path.to_path_buf(),
                id: id.to_string(),
            });
        }
        tracing::info!(path = %path.display(), "loaded profile");
        Ok(profile)
    }

    /// The built-in profile, or the file at `path` when given
    pub fn resolve(path: Option<&Path>) -> Result<Self, ProfileError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// First seed project id that appears twice
    fn duplicate_project_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .map(|p| p.id.as_str())
            .find(|id| !seen.insert(*id))
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn builtin() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            name: "Ananya Pandey".into(),
            initials: "AP".into(),
            headline: "AI/ML Student & Open Source Contributor".into(),
            tagline: "Building innovative solutions with AI and Machine Learning at Newton School Of Technology Pune".into(),
            about: strings(&[
                "Hi, I'm Ananya Pandey, a passionate and innovative B.Tech student specializing in Artificial Intelligence and Machine Learning at Newton School Of Technology Pune. With a strong drive for technology and innovation, I excel in building real-world solutions and continuously challenge myself to grow as a developer and problem solver.",
                "I'm an active contributor to open-source projects, most notably with AOSSIE (Australian Open Source Software Innovation and Education), where I improved the UI/UX of their main website and successfully raised a pull request that enhanced both design and functionality. Open source has taught me the value of writing clean, maintainable code and collaborating with diverse global teams.",
                "In addition to open source, I love working on creative development projects. One of my favorite builds is a Chess Game using React and CSS, where I combined logic with UI design to create an engaging user experience. I regularly participate in hackathons that push my limits in real-time coding, teamwork, and algorithmic thinking, helping me become more confident in fast-paced development environments.",
                "I've also volunteered at the ICPC Go for Gold Camp, supporting and guiding aspiring programmers. This role helped me sharpen my leadership and communication skills while giving back to the tech community.",
                "My key strengths include teamwork, leadership, and problem-solving, and I believe in constantly pushing my boundaries. Looking ahead, my long-term vision is to become a successful entrepreneur who leads with purpose, builds impactful technology, and inspires innovation.",
            ]),
            education: vec![
                Education {
                    title: "B.Tech in Artificial Intelligence and Machine Learning".into(),
                    subtitle: "NST, Pune • Currently Pursuing".into(),
                    summary: "Specializing in AI/ML with focus on real-world applications and innovative solutions.".into(),
                },
                Education {
                    title: "12th Grade".into(),
                    subtitle: "Bharat Ram Global School • CGPA: 7.4".into(),
                    summary: "Completed higher secondary education with strong foundation in science and mathematics.".into(),
                },
                Education {
                    title: "10th Grade".into(),
                    subtitle: "Bharat Ram Global School • CGPA: 9.1".into(),
                    summary: "Achieved excellent academic performance with strong fundamentals in core subjects.".into(),
                },
            ],
            experience: vec![
                Experience {
                    role: "Open Source Contributor".into(),
                    organization: "AOSSIE (Australian Open Source Software Innovation and Education)".into(),
                    summary: "Improved the UI/UX of AOSSIE's main website and successfully raised a pull request that enhanced both design and functionality. Gained valuable experience in collaborative development and writing clean, maintainable code.".into(),
                    tags: strings(&["UI/UX Design", "Frontend Development", "Open Source"]),
                },
                Experience {
                    role: "Volunteer".into(),
                    organization: "ICPC Go for Gold Camp".into(),
                    summary: "Volunteered as a mentor supporting and guiding aspiring programmers. Developed leadership and communication skills while contributing to the tech community.".into(),
                    tags: strings(&["Mentoring", "Leadership", "Programming"]),
                },
                Experience {
                    role: "Hackathon Participant".into(),
                    organization: "Various Hackathons".into(),
                    summary: "Regular participant in hackathons, pushing limits in real-time coding, teamwork, and algorithmic thinking. Gained confidence in fast-paced development environments.".into(),
                    tags: strings(&["Problem Solving", "Teamwork", "Rapid Development"]),
                },
            ],
            projects: vec![
                ProjectRecord {
                    id: "1".into(),
                    title: "Chess Game".into(),
                    description: "An interactive chess game built with React and CSS, featuring engaging UI design and game logic.".into(),
                    technologies: strings(&["React", "CSS", "JavaScript", "Game Logic"]),
                    github_url: Some("https://github.com/ananyapandey9895/Chess_Game".into()),
                    live_url: Some("https://chess-game-delta-ruddy.vercel.app/".into()),
                },
                ProjectRecord {
                    id: "shelfswap".into(),
                    title: "ShelfSwap".into(),
                    description: "I made an e-commerce website to buy and sell books easily, encouraging more people to learn and read.".into(),
                    technologies: strings(&["HTML", "CSS", "JavaScript"]),
                    github_url: None,
                    live_url: None,
                },
                ProjectRecord {
                    id: "todo-list-planner".into(),
                    title: "To Do List Planner".into(),
                    description: "I made a To Do List Planner using HTML, CSS, and JS, targeting to create such tough-sounding trackers with just basic coding languages.".into(),
                    technologies: strings(&["HTML", "CSS", "JavaScript"]),
                    github_url: None,
                    live_url: None,
                },
            ],
            skills: strings(&[
                "Artificial Intelligence",
                "Machine Learning",
                "React",
                "TypeScript",
                "JavaScript",
                "Python",
                "CSS",
                "HTML",
                "Git",
                "Open Source",
                "UI/UX Design",
                "Problem Solving",
            ]),
            contact_blurb: "I'm always open to discussing new opportunities, collaborations, or just having a chat about technology!".into(),
            contacts: vec![
                Contact {
                    label: "Email Me".into(),
                    url: "mailto:ananyapandey.brgs@gmail.com".into(),
                },
                Contact {
                    label: "LinkedIn".into(),
                    url: "https://www.linkedin.com/in/ananya-pandey-97b705259/".into(),
                },
                Contact {
                    label: "GitHub".into(),
                    url: "https://github.com/ananyapandey9895".into(),
                },
            ],
            footer: "Made by Ananya Pandey. Built with passion and a touch of magic ✨".into(),
        }
    }
}
