use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Number of numbered page buttons rendered at once
pub const DEFAULT_MAX_VISIBLE: u32 = 5;

/// Paginated list envelope returned by every list endpoint of the API
///
/// `from` / `to` are `null` when the page is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    #[serde(default)]
    pub per_page: Option<u32>,
    pub total: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

impl<T> PaginatedResponse<T>
where
    T: for<'de> Deserialize<'de>,
{
    /// Decode an envelope from a raw response body
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        serde_json::from_str(body).context("Failed to decode paginated response")
    }
}

impl<T> PaginatedResponse<T> {
    /// Pagination metadata without the records
    pub fn descriptor(&self) -> PageDescriptor {
        PageDescriptor {
            current_page: self.current_page,
            last_page: self.last_page,
            total_items: self.total,
            range_start: self.from.unwrap_or(0),
            range_end: self.to.unwrap_or(0),
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }

    /// Split into records and pagination metadata
    pub fn into_parts(self) -> (Vec<T>, PageDescriptor) {
        let descriptor = self.descriptor();
        (self.data, descriptor)
    }
}

/// Pagination state of the list currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub current_page: u32,
    pub last_page: u32,
    pub total_items: u64,
    pub range_start: u64,
    pub range_end: u64,
    pub max_visible: u32,
}

impl PageDescriptor {
    pub fn with_max_visible(mut self, max_visible: u32) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// "Showing X–Y of Z results"
    pub fn range_text(&self) -> String {
        format!(
            "Showing {}–{} of {} results",
            self.range_start, self.range_end, self.total_items
        )
    }
}

impl Default for PageDescriptor {
    /// State before the first response arrives
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            total_items: 0,
            range_start: 0,
            range_end: 0,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}
