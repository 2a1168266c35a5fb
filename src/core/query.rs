//! List filters, sorting and pagination

use crate::core::calendar::DateRange;
use crate::core::order::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// The list tabs: every order, or only open / closed ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StatusFilter {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => order.status == OrderStatus::Open,
            StatusFilter::Closed => order.status == OrderStatus::Closed,
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Order of creation
    #[default]
    Inserted,
    /// Oldest placement date first
    DateAsc,
    /// Newest placement date first
    DateDesc,
}

/// Query over the order collection.
///
/// The default query returns every order in insertion order.
///
/// # Example
/// ```rust,ignore
/// let page = store
///     .query(
///         &OrderQuery::new(StatusFilter::Open)
///             .placed_within(DateRange::month(Utc::now()))
///             .sorted(SortOrder::DateDesc)
///             .paginate(1, 20),
///     )
///     .await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderQuery {
    pub status: StatusFilter,
    pub placed_within: Option<DateRange>,
    pub sort: SortOrder,
    pub page: Option<PageRequest>,
}

impl OrderQuery {
    pub fn new(status: StatusFilter) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn placed_within(mut self, range: DateRange) -> Self {
        self.placed_within = Some(range);
        self
    }

    pub fn sorted(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(PageRequest { page, limit });
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.status.matches(order)
            && self
                .placed_within
                .is_none_or(|range| range.contains(&order.date))
    }

    /// Filter, sort and paginate an insertion-ordered snapshot.
    pub fn apply(&self, orders: Vec<Order>) -> Page<Order> {
        let mut data: Vec<Order> = orders.into_iter().filter(|o| self.matches(o)).collect();

        // Stable sorts, so equal dates keep insertion order.
        match self.sort {
            SortOrder::Inserted => {}
            SortOrder::DateAsc => data.sort_by(|a, b| a.date.cmp(&b.date)),
            SortOrder::DateDesc => data.sort_by(|a, b| b.date.cmp(&a.date)),
        }

        let total = data.len();
        let Some(request) = self.page else {
            return Page {
                data,
                pagination: None,
            };
        };

        let (page, limit) = (request.page(), request.limit());
        let data = data
            .into_iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .collect();

        Page {
            data,
            pagination: Some(PaginationMeta::new(page, limit, total)),
        }
    }
}

/// Requested page; values are clamped when read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, ensuring it doesn't exceed the maximum
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100)
    }
}

/// Query result, with pagination metadata when a page was requested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let limit = limit.max(1);
        let page = page.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1).saturating_mul(limit);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start.saturating_add(limit) < total,
            has_prev: page > 1,
        }
    }
}
