//! Fixture loader for candidate and job data files

use crate::error::{HireFlowError, Result};
use crate::input::normalize::{normalize_jobs, RawJob};
use crate::models::{Candidate, Job};
use log::{error, info};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct FixtureLoader {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl FixtureLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_candidates(&mut self, path: &Path) -> Result<Vec<Candidate>> {
        let candidates: Vec<Candidate> = self.load_json(path).await?;
        info!("Loaded {} candidates from {}", candidates.len(), path.display());
        Ok(candidates)
    }

    /// Load jobs, accepting either key naming for skills, experience and title
    pub async fn load_jobs(&mut self, path: &Path) -> Result<Vec<Job>> {
        let raw: Vec<RawJob> = self.load_json(path).await?;
        info!("Loaded {} jobs from {}", raw.len(), path.display());
        Ok(normalize_jobs(&raw))
    }

    /// Like `load_candidates`, but failures are logged and yield an empty list
    pub async fn candidates_or_empty(&mut self, path: &Path) -> Vec<Candidate> {
        self.load_candidates(path).await.unwrap_or_else(|e| {
            error!("Error loading candidates: {}", e);
            Vec::new()
        })
    }

    /// Like `load_jobs`, but failures are logged and yield an empty list
    pub async fn jobs_or_empty(&mut self, path: &Path) -> Vec<Job> {
        self.load_jobs(path).await.unwrap_or_else(|e| {
            error!("Error loading jobs: {}", e);
            Vec::new()
        })
    }

    async fn load_json<T: DeserializeOwned>(&mut self, path: &Path) -> Result<T> {
        let content = self.read(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn read(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached data for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(HireFlowError::NotFound(format!(
                "Data file does not exist: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).await?;

        if self.enable_cache {
            self.cache.insert(path_str, content.clone());
        }

        Ok(content)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for FixtureLoader {
    fn default() -> Self {
        Self::new()
    }
}
