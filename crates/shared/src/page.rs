use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

/// Zero-based page request with `sort=property[,property...][,asc|desc]` orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pageable {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<Sort>,
}

impl Default for Pageable {
    fn default() -> Self {
        Self {
            page: 0,
            size: Self::DEFAULT_SIZE,
            sort: vec![],
        }
    }
}

impl Pageable {
    pub const DEFAULT_SIZE: u64 = 20;
    pub const MAX_SIZE: u64 = 2000;
    /// SQLite binds OFFSET as a signed 64-bit integer.
    pub const MAX_OFFSET: u64 = i64::MAX as u64;

    pub fn new(page: Option<u64>, size: Option<u64>, sort: &[String]) -> Result<Self> {
        let size = match size {
            None | Some(0) => Self::DEFAULT_SIZE,
            Some(size) => size.min(Self::MAX_SIZE),
        };

        let page = page.unwrap_or_default();
        if page
            .checked_mul(size)
            .is_none_or(|offset| offset > Self::MAX_OFFSET)
        {
            return Err(Error::bad_request(
                "page",
                "page",
                format!("Page {page} is out of range"),
            ));
        }

        let mut orders = vec![];
        for param in sort {
            orders.extend(parse_sort(param)?);
        }

        Ok(Self {
            page,
            size,
            sort: orders,
        })
    }

    pub fn of(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: vec![],
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(Self::MAX_OFFSET)
    }
}

fn parse_sort(param: &str) -> Result<Vec<Sort>> {
    let mut parts: Vec<&str> = param
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let direction = match parts.last().map(|p| p.to_ascii_lowercase()) {
        Some(last) if last == "asc" => {
            parts.pop();
            Direction::Asc
        }
        Some(last) if last == "desc" => {
            parts.pop();
            Direction::Desc
        }
        _ => Direction::Asc,
    };

    if let Some(invalid) = parts
        .iter()
        .find(|p| !p.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
    {
        return Err(Error::bad_request(
            "sort",
            "sort",
            format!("Invalid sort property '{invalid}'"),
        ));
    }

    Ok(parts
        .into_iter()
        .map(|property| Sort {
            property: property.to_owned(),
            direction,
        })
        .collect())
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }

        self.total.div_ceil(self.size)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}
