//! Role catalog: category → role → `RoleProfile`, read once at startup and
//! shared read-only through `AppState`.

pub mod handlers;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::scoring::models::{RoleProfile, ScoringError};

/// Catalog compiled into the binary; `ROLE_CATALOG_PATH` replaces it.
const DEFAULT_CATALOG: &str = include_str!("../../config/job_roles.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse role catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid role '{role}' in category '{category}': {source}")]
    InvalidRole {
        category: String,
        role: String,
        #[source]
        source: ScoringError,
    },

    #[error("role catalog contains no roles")]
    Empty,
}

/// On-disk shape of a role; the name is the map key.
#[derive(Debug, Deserialize)]
struct RoleEntry {
    #[serde(default)]
    description: String,
    required_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RoleCatalog {
    categories: BTreeMap<String, BTreeMap<String, RoleProfile>>,
}

impl RoleCatalog {
    /// Reads the catalog from `path`, or uses the embedded default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read role catalog {}", path.display()))?;
                Self::from_json(&json)
                    .with_context(|| format!("Invalid role catalog {}", path.display()))?
            }
            None => Self::from_json(DEFAULT_CATALOG).context("Invalid embedded role catalog")?,
        };

        info!(
            "Role catalog loaded: {} categories, {} roles",
            catalog.categories().count(),
            catalog.role_count()
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, BTreeMap<String, RoleEntry>> = serde_json::from_str(json)?;

        let mut categories = BTreeMap::new();
        for (category, roles) in raw {
            let mut profiles = BTreeMap::new();
            for (role, entry) in roles {
                let profile = RoleProfile::new(role.clone(), entry.description, entry.required_skills)
                    .map_err(|source| CatalogError::InvalidRole {
                        category: category.clone(),
                        role: role.clone(),
                        source,
                    })?;
                profiles.insert(role, profile);
            }
            categories.insert(category, profiles);
        }

        let catalog = Self { categories };
        if catalog.role_count() == 0 {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// Category names in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn roles(&self, category: &str) -> Option<&BTreeMap<String, RoleProfile>> {
        self.categories.get(category)
    }

    pub fn get(&self, category: &str, role: &str) -> Option<&RoleProfile> {
        self.categories.get(category)?.get(role)
    }

    /// First role with this name in any category, with its category.
    pub fn find_role(&self, role: &str) -> Option<(&str, &RoleProfile)> {
        self.categories
            .iter()
            .find_map(|(category, roles)| roles.get(role).map(|p| (category.as_str(), p)))
    }

    pub fn role_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }
}
