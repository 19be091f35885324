//! Static site content, embedded at compile time.

use serde::Deserialize;

use crate::error::{PortfolioError, Result};

const CONTENT_JSON: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Real,
    Samples,
    Pitch,
    Graphics,
}

/// A gallery entry on the sample-work page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub images: Vec<String>,
    /// Wide media shown with internal scrolling in the viewer.
    #[serde(default)]
    pub scroll_images: Vec<String>,
}

impl Project {
    /// Media shown on the project card.
    pub fn preview(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkHighlight {
    pub title: String,
    pub link: String,
    pub media: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Content {
    pub projects: Vec<Project>,
    pub highlights: Vec<WorkHighlight>,
    pub steps: Vec<ProcessStep>,
}

impl Content {
    pub fn parse(json: &str) -> Result<Self> {
        let content: Content = serde_json::from_str(json)?;
        if content.projects.is_empty() {
            return Err(PortfolioError::EmptyContent("projects"));
        }
        Ok(content)
    }

    /// Content bundled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(CONTENT_JSON)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
