#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Category index for incident cause labels.
//!
//! Built once from a loaded record store. Maps each selectable label —
//! every concrete cause plus the synthetic [`ALL_CAUSES`] grouping — to
//! the set of concrete causes it expands to, and assigns each cause a
//! fixed display color. Causes and colors never change after
//! construction.

use incident_dash_store::RecordStore;
use serde::Serialize;
use thiserror::Error;

/// The synthetic selector label that expands to every concrete cause.
pub const ALL_CAUSES: &str = "All";

/// Fixed display palette, assigned to causes in sorted order and cycled
/// when more causes exist than palette slots.
const PALETTE: &[&str] = &["red", "green", "black"];

/// Errors raised for selector values outside the index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The selector label is neither [`ALL_CAUSES`] nor a cause present
    /// in the record store. The delivery layer only ever offers valid
    /// values, so hitting this is a caller bug.
    #[error("invalid selection {label:?}: not a known cause")]
    InvalidSelection {
        /// The offending selector label.
        label: String,
    },
}

/// One entry of the selector option list exposed to the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    /// Selectable label ([`ALL_CAUSES`] or a concrete cause).
    pub label: String,
    /// Display color, `None` for the [`ALL_CAUSES`] grouping.
    pub color: Option<String>,
}

/// Mapping from selectable labels to concrete cause sets and from causes
/// to display colors.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    /// Distinct causes, sorted lexicographically. Sorted order doubles
    /// as the color-assignment order and the stacking/draw order of
    /// every per-cause output.
    causes: Vec<String>,
}

impl CategoryIndex {
    /// Builds the index from the distinct causes of a loaded store.
    #[must_use]
    pub fn from_store(store: &RecordStore) -> Self {
        Self {
            causes: store.causes(),
        }
    }

    /// Builds the index from an explicit cause list (deduplicated and
    /// sorted here). Used by tests and any host that already has the
    /// cause set at hand.
    #[must_use]
    pub fn from_causes(causes: impl IntoIterator<Item = String>) -> Self {
        let mut causes: Vec<String> = causes.into_iter().collect();
        causes.sort_unstable();
        causes.dedup();
        Self { causes }
    }

    /// Expands a selector label to the concrete causes it covers:
    /// [`ALL_CAUSES`] expands to every cause, a concrete cause to
    /// itself. The returned slice is non-empty and sorted.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidSelection`] for labels not in
    /// the index.
    pub fn expand(&self, label: &str) -> Result<&[String], SelectionError> {
        if label == ALL_CAUSES {
            return Ok(&self.causes);
        }
        match self.causes.binary_search_by(|c| c.as_str().cmp(label)) {
            Ok(idx) => Ok(std::slice::from_ref(&self.causes[idx])),
            Err(_) => Err(SelectionError::InvalidSelection {
                label: label.to_string(),
            }),
        }
    }

    /// The display color for a cause. Total over all known causes;
    /// `None` only for labels outside the index.
    #[must_use]
    pub fn color_of(&self, cause: &str) -> Option<&'static str> {
        let idx = self
            .causes
            .binary_search_by(|c| c.as_str().cmp(cause))
            .ok()?;
        Some(PALETTE[idx % PALETTE.len()])
    }

    /// All distinct causes, sorted lexicographically.
    #[must_use]
    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    /// The selector option list: [`ALL_CAUSES`] first, then every cause
    /// in sorted order with its color.
    #[must_use]
    pub fn options(&self) -> Vec<CategoryOption> {
        std::iter::once(CategoryOption {
            label: ALL_CAUSES.to_string(),
            color: None,
        })
        .chain(self.causes.iter().map(|cause| CategoryOption {
            label: cause.clone(),
            color: self.color_of(cause).map(str::to_string),
        }))
        .collect()
    }
}
