use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use contracts::domain::a005_review::aggregate::Review;

use crate::shared::date_utils::parse_timestamp;
use crate::shared::list_query::{compare_present_first, ListRecord, SortDirection};

impl ListRecord for Review {
    const FILTER_KEYS: &'static [&'static str] = &["rating", "service"];

    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.comment.as_deref(),
            self.service_name(),
            self.instructor_name(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "rating" => Some(self.rating.to_string()),
            "service" => self
                .booking
                .as_deref()
                .and_then(|b| b.service_id())
                .map(|id| id.to_string()),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

/// Most recent review first
pub fn newest_first(a: &Review, b: &Review) -> Ordering {
    compare_present_first(a.timestamp(), b.timestamp(), SortDirection::Descending, Ord::cmp)
}

/// Mean rating rounded to one decimal, `None` without reviews
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
