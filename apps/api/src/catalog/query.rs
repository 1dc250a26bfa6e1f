//! Query Engine: case-insensitive lookups and projections over the career dataset.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::catalog::dataset::Dataset;
use crate::catalog::models::{CareerDetail, CareerRecord, Level, PathDetail};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0}")]
    NotFound(String),
}

/// Case-insensitive exact match against an already-lowercased `wanted`.
/// `None` cells never match anything.
fn matches_lowercase(value: Option<&str>, wanted: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase() == wanted)
}

/// Read-only query engine over an injected `Dataset`.
///
/// Cheap to clone; every clone shares the same dataset.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    dataset: Arc<Dataset>,
}

impl CareerCatalog {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn record_count(&self) -> usize {
        self.dataset.len()
    }

    /// Every career reachable with `language`, one detail per matching row.
    pub fn by_language(&self, language: &str) -> Result<Vec<CareerDetail>, CatalogError> {
        let wanted = language.to_lowercase();
        let details: Vec<CareerDetail> = self
            .dataset
            .records()
            .iter()
            .filter(|r| matches_lowercase(r.programming_language.as_deref(), &wanted))
            .map(CareerDetail::from_record)
            .collect();

        debug!("by_language({language:?}) matched {} rows", details.len());

        if details.is_empty() {
            return Err(CatalogError::NotFound(
                "No matching careers found.".to_string(),
            ));
        }
        Ok(details)
    }

    /// Distinct languages leading to `career`, sorted ascending (case-sensitive).
    pub fn languages_for_career(&self, career: &str) -> Result<Vec<String>, CatalogError> {
        let wanted = career.to_lowercase();
        let mut matched_any = false;
        let mut languages = BTreeSet::new();

        for record in self
            .dataset
            .records()
            .iter()
            .filter(|r| matches_lowercase(r.career_path.as_deref(), &wanted))
        {
            matched_any = true;
            if let Some(language) = &record.programming_language {
                languages.insert(language.clone());
            }
        }

        if !matched_any {
            return Err(CatalogError::NotFound(
                "No languages found for this career.".to_string(),
            ));
        }
        Ok(languages.into_iter().collect())
    }

    /// Level-scoped detail for a (career, language) pair.
    ///
    /// The dataset is expected to hold at most one row per pair. When it holds
    /// several, the first one in file order is returned, always. An unknown
    /// `level` produces an empty bundle rather than an error.
    pub fn detail(
        &self,
        career: &str,
        language: &str,
        level: &str,
    ) -> Result<PathDetail, CatalogError> {
        let career_wanted = career.to_lowercase();
        let language_wanted = language.to_lowercase();

        let record = self
            .dataset
            .records()
            .iter()
            .find(|r| {
                matches_lowercase(r.career_path.as_deref(), &career_wanted)
                    && matches_lowercase(r.programming_language.as_deref(), &language_wanted)
            })
            .ok_or_else(|| CatalogError::NotFound("No matching result".to_string()))?;

        let detail = path_detail(record, Level::from_column_fragment(level));
        if detail.bundle.is_empty() {
            debug!("detail({career:?}, {language:?}, {level:?}) has no recommendations");
        }
        Ok(detail)
    }

    /// Every distinct career in the dataset, sorted ascending.
    pub fn all_careers(&self) -> Vec<String> {
        self.dataset
            .records()
            .iter()
            .filter_map(|r| r.career_path.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn path_detail(record: &CareerRecord, level: Option<Level>) -> PathDetail {
    PathDetail {
        career: record.career_path.clone().unwrap_or_default(),
        programming_language: record.programming_language.clone().unwrap_or_default(),
        description: record.description_or_empty(),
        bundle: level.map(|l| record.bundle(l)).unwrap_or_default(),
    }
}
