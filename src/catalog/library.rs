use super::{Catalog, Video};
use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

// Demo catalog compiled into the binary so it runs without any setup
const BUNDLED_CATALOG: &str = include_str!("../../data/videos.txt");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("line {line}: expected `title | id | tags`, got {found:?}")]
    MalformedLine { line: usize, found: String },

    #[error("line {line}: {field} is empty")]
    EmptyField { line: usize, field: &'static str },

    #[error("line {line}: duplicate video id '{id}'")]
    DuplicateId { line: usize, id: String },
}

/// In-memory catalog, fixed once loaded
#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: HashMap<String, Video>,
    ids_by_title: Vec<String>,
}

impl VideoLibrary {
    /// Parse catalog text - one `Title | video_id | #tag1 , #tag2` per line
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let mut videos = HashMap::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = raw.split('|').map(str::trim).collect();
            if fields.len() < 2 || fields.len() > 3 {
                return Err(CatalogError::MalformedLine {
                    line,
                    found: raw.to_string(),
                });
            }

            let (title, id) = (fields[0], fields[1]);
            if title.is_empty() {
                return Err(CatalogError::EmptyField { line, field: "title" });
            }
            if id.is_empty() {
                return Err(CatalogError::EmptyField { line, field: "id" });
            }

            let tags: Vec<String> = fields
                .get(2)
                .map(|tags| {
                    tags.split(',')
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();

            if videos.contains_key(id) {
                return Err(CatalogError::DuplicateId {
                    line,
                    id: id.to_string(),
                });
            }
            videos.insert(id.to_string(), Video::new(id, title, tags));
        }

        Ok(Self::from_videos(videos))
    }

    /// Load a catalog file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let library = Self::parse(&content)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

        info!("Loaded {} videos from {}", library.len(), path.display());
        Ok(library)
    }

    /// The demo catalog shipped with the binary
    pub fn bundled() -> Result<Self> {
        let library = Self::parse(BUNDLED_CATALOG).context("Bundled catalog is malformed")?;
        debug!("Using bundled catalog with {} videos", library.len());
        Ok(library)
    }

    fn from_videos(videos: HashMap<String, Video>) -> Self {
        let mut ids_by_title: Vec<String> = videos.keys().cloned().collect();
        ids_by_title.sort_by(|a, b| {
            let (va, vb) = (&videos[a], &videos[b]);
            va.title.cmp(&vb.title).then_with(|| va.id.cmp(&vb.id))
        });

        Self {
            videos,
            ids_by_title,
        }
    }
}

impl Catalog for VideoLibrary {
    fn contains(&self, id: &str) -> bool {
        self.videos.contains_key(id)
    }

    fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    fn video_ids(&self) -> Vec<&str> {
        self.ids_by_title.iter().map(String::as_str).collect()
    }

    fn random_id(&self) -> Option<&str> {
        self.ids_by_title
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }

    fn len(&self) -> usize {
        self.videos.len()
    }
}

/// Small fixed catalog shared by the unit tests
#[cfg(test)]
pub(crate) fn test_library() -> VideoLibrary {
    VideoLibrary::parse(
        "Video One | v1 | #first , #demo\n\
         Video Two | v2 | #demo\n\
         Video Three | v3 |\n",
    )
    .expect("test catalog parses")
}
