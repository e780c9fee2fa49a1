//! Limit/offset pagination shared by list queries

use crate::error::app_error::{AppError, AppResult};

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: u32,
    offset: u32,
}

impl Page {
    /// Build a page from optional caller input.
    ///
    /// A missing limit falls back to [`DEFAULT_LIMIT`]; zero or anything above
    /// [`MAX_LIMIT`] is rejected.
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> AppResult<Self> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 || limit > MAX_LIMIT {
            return Err(AppError::bad_request(format!(
                "Page limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }
        Ok(Self {
            limit,
            offset: offset.unwrap_or(0),
        })
    }

    pub fn first() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn next(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }

    /// Apply the page to an already ordered in-memory sequence.
    pub fn slice<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}
