//! Pagination bounds for catalog requests
//!
//! The remote catalog pages results 1-indexed and refuses page sizes above 100.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 15;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u64,

    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Check a requested page number
    pub fn check_page(page: i64) -> Result<u64, QueryError> {
        if page < 1 {
            return Err(QueryError::PageBelowOne { page });
        }
        Ok(page as u64)
    }

    /// Check a requested page size against the accepted range
    pub fn check_page_size(page_size: i64) -> Result<u32, QueryError> {
        if page_size < i64::from(MIN_PAGE_SIZE) || page_size > i64::from(MAX_PAGE_SIZE) {
            return Err(QueryError::PageSizeOutOfRange { page_size });
        }
        Ok(page_size as u32)
    }
}
