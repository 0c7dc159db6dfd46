// Page request DTO and its validation.
//
// The generator itself accepts any numbers; this is the check applied at the
// outer boundary (CLI, or any future HTTP layer) before calling it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tunesmith_lang::Localization;

use crate::likes::MAX_LIKES;

/// A rejected page request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("likes must be within [0, 10], got {0}")]
    LikesOutOfRange(f64),
    #[error("page must be at least 1, got {0}")]
    PageOutOfRange(i64),
    #[error("localization must not be empty")]
    EmptyLocalization,
}

/// Inputs for one page of the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub seed: i64,
    pub page: i64,
    pub likes: f64,
    pub localization: String,
}

impl PageRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        // Also rejects NaN.
        if !(0.0..=MAX_LIKES).contains(&self.likes) {
            return Err(RequestError::LikesOutOfRange(self.likes));
        }
        if self.page < 1 {
            return Err(RequestError::PageOutOfRange(self.page));
        }
        if self.localization.trim().is_empty() {
            return Err(RequestError::EmptyLocalization);
        }
        Ok(())
    }

    pub fn localization(&self) -> Localization {
        Localization::from_tag(&self.localization)
    }
}
