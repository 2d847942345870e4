//! Project records
//!
//! The data contract the showcase renders. Records arrive as JSON from the
//! content pipeline; every section beyond name and description is optional,
//! and a missing section suppresses its UI rather than failing the load.
//!
//! Metrics appear in two shapes across older and newer content files: a
//! nested `metrics` object, or flat `github_stars`/`forks`/`views` fields.
//! Both parse; the nested shape wins when both are present.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A technology tag with its display color
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTag {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// Nested repository metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    #[serde(default)]
    pub stars: Option<u64>,
    #[serde(default)]
    pub forks: Option<u64>,
    #[serde(default)]
    pub views: Option<u64>,
}

impl ProjectMetrics {
    pub fn is_empty(&self) -> bool {
        self.stars.is_none() && self.forks.is_none() && self.views.is_none()
    }
}

/// One showcase entry
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,

    /// Primary image, used when `images` is absent
    #[serde(default)]
    pub image: Option<String>,
    /// Carousel images, in display order
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub tags: Vec<ProjectTag>,
    #[serde(default)]
    pub features: Vec<String>,

    /// Nested metrics shape
    #[serde(default)]
    pub metrics: Option<ProjectMetrics>,
    /// Flat metrics shape (legacy content files)
    #[serde(default)]
    pub github_stars: Option<u64>,
    #[serde(default)]
    pub forks: Option<u64>,
    #[serde(default)]
    pub views: Option<u64>,

    #[serde(default)]
    pub live_demo_link: Option<String>,
    #[serde(default)]
    pub source_code_link: Option<String>,
}

impl ProjectRecord {
    /// The carousel image list: `images` when present, otherwise the primary
    /// image as a single-entry carousel
    pub fn carousel_images(&self) -> Vec<&str> {
        if !self.images.is_empty() {
            self.images.iter().map(String::as_str).collect()
        } else {
            self.image.iter().map(String::as_str).collect()
        }
    }

    /// Number of carousel positions; never zero, so index arithmetic stays
    /// well-defined even for records without images
    pub fn image_count(&self) -> usize {
        self.carousel_images().len().max(1)
    }

    /// Star count, nested shape first
    pub fn stars(&self) -> Option<u64> {
        self.metrics
            .and_then(|m| m.stars)
            .or(self.github_stars)
    }

    /// Fork count, nested shape first
    pub fn fork_count(&self) -> Option<u64> {
        self.metrics.and_then(|m| m.forks).or(self.forks)
    }

    /// View count, nested shape first
    pub fn view_count(&self) -> Option<u64> {
        self.metrics.and_then(|m| m.views).or(self.views)
    }

    /// Whether the record carries any metric in either shape
    pub fn has_metrics(&self) -> bool {
        self.stars().is_some() || self.fork_count().is_some() || self.view_count().is_some()
    }
}

/// Parse an ordered project catalog from JSON
pub fn projects_from_json(json: &str) -> Result<Vec<ProjectRecord>> {
    let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
    tracing::debug!(count = projects.len(), "project catalog loaded");
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_parses_with_defaults() {
        let projects = projects_from_json(r#"[{"name": "folio"}]"#).unwrap();
        let p = &projects[0];
        assert_eq!(p.name, "folio");
        assert!(p.tags.is_empty());
        assert!(p.features.is_empty());
        assert!(!p.has_metrics());
        assert!(p.carousel_images().is_empty());
        assert_eq!(p.image_count(), 1);
    }

    #[test]
    fn test_nested_metrics_win_over_flat() {
        let projects = projects_from_json(
            r#"[{
                "name": "folio",
                "metrics": {"stars": 120, "views": 3000},
                "github_stars": 5,
                "forks": 7,
                "views": 9
            }]"#,
        )
        .unwrap();
        let p = &projects[0];
        // Nested shape wins where it has a value, flat fills the gap
        assert_eq!(p.stars(), Some(120));
        assert_eq!(p.fork_count(), Some(7));
        assert_eq!(p.view_count(), Some(3000));
    }

    #[test]
    fn test_flat_metrics_alone() {
        let projects =
            projects_from_json(r#"[{"name": "folio", "github_stars": 42}]"#).unwrap();
        assert_eq!(projects[0].stars(), Some(42));
        assert!(projects[0].has_metrics());
    }

    #[test]
    fn test_primary_image_fallback() {
        let projects = projects_from_json(
            r#"[
                {"name": "a", "image": "cover.png"},
                {"name": "b", "image": "cover.png", "images": ["1.png", "2.png"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(projects[0].carousel_images(), vec!["cover.png"]);
        assert_eq!(projects[1].carousel_images(), vec!["1.png", "2.png"]);
        assert_eq!(projects[1].image_count(), 2);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(projects_from_json("not json").is_err());
        assert!(projects_from_json(r#"{"name": "not an array"}"#).is_err());
    }
}
