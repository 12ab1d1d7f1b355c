use serde::Deserialize;

use crate::error::ApiError;

pub const DEFAULT_LIMIT: u32 = 100;
pub const DEFAULT_PAGE: u32 = 1;

/// Raw `limit` / `page` query values. Kept as strings so that bad input is
/// reported as a validation error instead of a silent default.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub page: u32,
}

impl PageQuery {
    /// `limit` is clamped to `max_limit`.
    pub fn parse(&self, max_limit: u32) -> Result<PageRequest, ApiError> {
        let mut errors = Vec::new();

        let limit = parse_positive(self.limit.as_deref(), "limit", DEFAULT_LIMIT, &mut errors);
        let page = parse_positive(self.page.as_deref(), "page", DEFAULT_PAGE, &mut errors);

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(PageRequest {
            limit: limit.min(max_limit),
            page,
        })
    }
}

impl PageRequest {
    /// Number of pages needed for `total` records.
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.limit))
    }
}

fn parse_positive(raw: Option<&str>, name: &str, default: u32, errors: &mut Vec<String>) -> u32 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => {
            errors.push(format!("{} must be a positive integer", name));
            default
        }
    }
}
