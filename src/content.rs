//! Static page content, embedded at build time from the `content/` folder.

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static GLOBAL_CONTENT: LazyLock<Result<Content, ContentError>> = LazyLock::new(Content::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
    /// Source repository.
    pub source: String,
    /// Live deployment.
    pub live: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub handle: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callout {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub headline: String,
    pub intro: String,
    pub about: Vec<String>,
    pub callout: Callout,
    pub skills: Vec<Skill>,
    pub links: Vec<ContactLink>,
    pub credit: String,
}

#[derive(Debug, Clone)]
pub struct Content {
    pub profile: Profile,
    pub projects: Vec<Project>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
}

impl Content {
    fn load() -> Result<Self, ContentError> {
        Ok(Self {
            profile: read_json("profile.json")?,
            projects: read_json("projects.json")?,
        })
    }
}

fn read_json<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let asset = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    parse_json(file, &asset.data)
}

fn parse_json<T: DeserializeOwned>(file: &str, bytes: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(bytes).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

/// The page content, parsed once per process.
pub fn content() -> Result<&'static Content, ContentError> {
    GLOBAL_CONTENT.as_ref().map_err(Clone::clone)
}

/// Year the site was built, for the footer.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = content().expect("embedded content should parse");
        assert!(!content.profile.name.is_empty());
        assert_eq!(content.profile.skills.len(), 3);
        assert_eq!(content.profile.about.len(), 3);
    }

    #[test]
    fn projects_keep_source_order() {
        let content = content().unwrap();
        let titles = content
            .projects
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["E-Commerce Platform", "Task Management System"]);
        assert_eq!(
            content.projects[1].tech,
            vec!["React", "Firebase", "TailwindCSS", "shadcn/UI"]
        );
    }

    #[test]
    fn every_project_links_out_twice() {
        for project in &content().unwrap().projects {
            assert!(project.source.starts_with("https://"), "{}", project.title);
            assert!(project.live.starts_with("https://"), "{}", project.title);
        }
    }

    #[test]
    fn contact_links_cover_code_network_and_mail() {
        let links = &content().unwrap().profile.links;
        let labels = links.iter().map(|l| l.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["GitHub", "LinkedIn", "Email"]);
        assert!(links[2].href.starts_with("mailto:"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_json::<Vec<Project>>("projects.json", b"[{\"title\": 1}]").unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref file, .. } if file == "projects.json"));
    }

    #[test]
    fn missing_file_is_not_found() {
        assert_eq!(
            read_json::<Profile>("nope.json").unwrap_err(),
            ContentError::NotFound("nope.json".to_string())
        );
    }

    #[test]
    fn build_year_is_stamped() {
        assert!(build_year().is_some_and(|y| y >= 2024));
    }
}
