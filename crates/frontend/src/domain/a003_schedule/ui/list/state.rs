use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use contracts::domain::a003_schedule::aggregate::Schedule;

use crate::shared::date_utils::parse_timestamp;
use crate::shared::list_query::{
    compare_present_first, filter_records, sort_records, Clock, FilterState, ListRecord,
    SortDirection,
};

impl ListRecord for Schedule {
    const FILTER_KEYS: &'static [&'static str] = &["service", "service_id", "instructor"];

    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![self.service_name(), self.instructor_name()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            // through the loaded relation, missing when the service was deleted
            "service" => self.service.as_ref().map(|s| s.id.to_string()),
            "service_id" => Some(self.service_id.to_string()),
            "instructor" => Some(self.instructor_id.to_string()),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.start_time)
    }
}

/// Sort orders of the class browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleSort {
    #[default]
    Soonest,
    Latest,
    PriceLow,
    PriceHigh,
}

impl ScheduleSort {
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleSort::Soonest => "soonest",
            ScheduleSort::Latest => "latest",
            ScheduleSort::PriceLow => "price-low",
            ScheduleSort::PriceHigh => "price-high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScheduleSort::Soonest => "Soonest",
            ScheduleSort::Latest => "Latest",
            ScheduleSort::PriceLow => "Price: low to high",
            ScheduleSort::PriceHigh => "Price: high to low",
        }
    }

    pub fn all() -> Vec<ScheduleSort> {
        vec![
            ScheduleSort::Soonest,
            ScheduleSort::Latest,
            ScheduleSort::PriceLow,
            ScheduleSort::PriceHigh,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "soonest" => Some(ScheduleSort::Soonest),
            "latest" => Some(ScheduleSort::Latest),
            "price-low" => Some(ScheduleSort::PriceLow),
            "price-high" => Some(ScheduleSort::PriceHigh),
            _ => None,
        }
    }

    /// Schedules without a readable start or a loaded service go last
    pub fn compare(&self, a: &Schedule, b: &Schedule) -> Ordering {
        let price = |s: &Schedule| s.service.as_ref().map(|svc| svc.price);
        match self {
            ScheduleSort::Soonest => {
                compare_present_first(a.timestamp(), b.timestamp(), SortDirection::Ascending, Ord::cmp)
            }
            ScheduleSort::Latest => {
                compare_present_first(a.timestamp(), b.timestamp(), SortDirection::Descending, Ord::cmp)
            }
            ScheduleSort::PriceLow => {
                compare_present_first(price(a), price(b), SortDirection::Ascending, f64::total_cmp)
            }
            ScheduleSort::PriceHigh => {
                compare_present_first(price(a), price(b), SortDirection::Descending, f64::total_cmp)
            }
        }
    }
}

/// Filters the fetched page, then orders it; `None` keeps server order
pub fn browse_classes<C: Clock + ?Sized>(
    schedules: &[Schedule],
    filters: &FilterState,
    sort: Option<ScheduleSort>,
    clock: &C,
) -> Vec<Schedule> {
    let mut out = filter_records(schedules, filters, clock);
    if let Some(sort) = sort {
        sort_records(&mut out, |a, b| sort.compare(a, b));
    }
    out
}
