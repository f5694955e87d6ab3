//! Paging value object attached to list responses.
//!
//! Each field is optional and validated on its own: `page >= 0`,
//! `size > 0`, `total >= 0`. There is no cross-field check, so a page
//! beyond `total / size` is stored as given.

use crate::errors::{ResponseError, ResponseResult};
use serde::{Deserialize, Serialize};

/// Page, page size and total item count of a list response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPaging")]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<i64>,
}

/// Unvalidated wire shape; every deserialized `Paging` goes through the setters.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPaging {
    #[serde(default)]
    page: Option<i64>,
    #[serde(default)]
    size: Option<i64>,
    #[serde(default)]
    total: Option<i64>,
}

impl TryFrom<RawPaging> for Paging {
    type Error = ResponseError;

    fn try_from(raw: RawPaging) -> Result<Self, Self::Error> {
        Paging::new(raw.page, raw.size, raw.total)
    }
}

impl Paging {
    /// Create paging from optional fields, validating each one present
    pub fn new(page: Option<i64>, size: Option<i64>, total: Option<i64>) -> ResponseResult<Self> {
        Paging::default()
            .set_page(page)?
            .set_size(size)?
            .set_total(total)
    }

    /// Create paging with every field present
    pub fn of(page: i64, size: i64, total: i64) -> ResponseResult<Self> {
        Self::new(Some(page), Some(size), Some(total))
    }

    /// Set the page number; `None` leaves the current value untouched
    pub fn set_page(mut self, page: Option<i64>) -> ResponseResult<Self> {
        if let Some(page) = page {
            if page < 0 {
                return Err(ResponseError::invalid_argument(
                    "page",
                    format!("page number cannot be negative, got {}", page),
                ));
            }
            self.page = Some(page);
        }
        Ok(self)
    }

    /// Set the page size; `None` leaves the current value untouched
    pub fn set_size(mut self, size: Option<i64>) -> ResponseResult<Self> {
        if let Some(size) = size {
            if size <= 0 {
                return Err(ResponseError::invalid_argument(
                    "size",
                    format!("page size must be greater than 0, got {}", size),
                ));
            }
            self.size = Some(size);
        }
        Ok(self)
    }

    /// Set the total item count; `None` leaves the current value untouched
    pub fn set_total(mut self, total: Option<i64>) -> ResponseResult<Self> {
        if let Some(total) = total {
            if total < 0 {
                return Err(ResponseError::invalid_argument(
                    "total",
                    format!("total count cannot be negative, got {}", total),
                ));
            }
            self.total = Some(total);
        }
        Ok(self)
    }

    pub fn page(&self) -> Option<i64> {
        self.page
    }

    pub fn size(&self) -> Option<i64> {
        self.size
    }

    pub fn total(&self) -> Option<i64> {
        self.total
    }

    /// Number of pages needed for `total` items at `size` per page
    pub fn total_pages(&self) -> Option<i64> {
        match (self.size, self.total) {
            (Some(size), Some(total)) => Some(total / size + i64::from(total % size != 0)),
            _ => None,
        }
    }
}
