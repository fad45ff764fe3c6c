use crate::animation::CARD_STAGGER;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub username: String,
    pub repo: String,
}

impl GitHubRepo {
    pub fn url(&self) -> String {
        format!("https://github.com/{}/{}", self.username, self.repo)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub github: Option<GitHubRepo>,
    #[serde(default)]
    pub live_url: Option<String>,
}

impl Project {
    pub fn links(&self) -> Vec<(&'static str, String)> {
        let mut links = Vec::new();
        if let Some(github) = &self.github {
            links.push(("GitHub", github.url()));
        }
        if let Some(url) = &self.live_url {
            links.push(("Live", url.clone()));
        }
        links
    }
}

pub fn card_delay(index: usize) -> Duration {
    CARD_STAGGER * index as u32
}

pub fn default_projects() -> Vec<Project> {
    vec![Project {
        id: "1".to_string(),
        title: "My Portfolio".to_string(),
        description: "This portfolio, with its radial navigation.".to_string(),
        tags: vec!["Rust".to_string(), "GTK".to_string(), "relm4".to_string()],
        github: Some(GitHubRepo {
            username: "MRMCBlob".to_string(),
            repo: "portfolio".to_string(),
        }),
        live_url: Some("https://mrmcblob.com".to_string()),
    }]
}
