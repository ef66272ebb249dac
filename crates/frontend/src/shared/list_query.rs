//! Client-side search, filtering and sorting of an already fetched page.
//!
//! A record is kept when it passes every active dimension: free-text search,
//! each categorical filter, and the time bucket. Filtering preserves order;
//! sorting is a separate, stable step. Records describe themselves through
//! [`ListRecord`]; a missing nested relation makes the record fail the
//! dimension that needs it instead of failing the whole pass.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::shared::date_utils::{end_of_day, start_of_day};

/// Sentinel value that disables a filter dimension
pub const FILTER_ALL: &str = "all";

/// Source of "now" for time-bucket filters
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock of the host environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Accessors the list query needs from a record
pub trait ListRecord {
    /// Fields matched by the search box. `None` entries never match.
    fn searchable_fields(&self) -> Vec<Option<&str>>;

    /// Categorical keys this record type understands. Filters on any other
    /// key are ignored rather than hiding every record.
    const FILTER_KEYS: &'static [&'static str] = &[];

    /// Value of a categorical field, stringified. `None` when the field or
    /// the relation it lives on is missing; such records fail that filter.
    fn filter_value(&self, _key: &str) -> Option<String> {
        None
    }

    /// Reference instant for time-bucket filters
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeFilter {
    #[default]
    All,
    Upcoming,
    Past,
    Today,
    ThisWeek,
    NextWeek,
}

impl TimeFilter {
    pub fn code(&self) -> &'static str {
        match self {
            TimeFilter::All => FILTER_ALL,
            TimeFilter::Upcoming => "upcoming",
            TimeFilter::Past => "past",
            TimeFilter::Today => "today",
            TimeFilter::ThisWeek => "this-week",
            TimeFilter::NextWeek => "next-week",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TimeFilter::All => "All",
            TimeFilter::Upcoming => "Upcoming",
            TimeFilter::Past => "Past",
            TimeFilter::Today => "Today",
            TimeFilter::ThisWeek => "This week",
            TimeFilter::NextWeek => "Next week",
        }
    }

    pub fn all() -> Vec<TimeFilter> {
        vec![
            TimeFilter::All,
            TimeFilter::Upcoming,
            TimeFilter::Past,
            TimeFilter::Today,
            TimeFilter::ThisWeek,
            TimeFilter::NextWeek,
        ]
    }

    /// Unknown codes disable the filter
    pub fn from_code(code: &str) -> Self {
        match code {
            "upcoming" => TimeFilter::Upcoming,
            "past" => TimeFilter::Past,
            "today" => TimeFilter::Today,
            "this-week" => TimeFilter::ThisWeek,
            "next-week" => TimeFilter::NextWeek,
            _ => TimeFilter::All,
        }
    }

    fn range(&self, now: DateTime<Utc>) -> Option<TimeRange> {
        let today = start_of_day(now);
        let range = match self {
            TimeFilter::All => return None,
            TimeFilter::Upcoming => TimeRange {
                from: Some(now),
                until: None,
            },
            TimeFilter::Past => TimeRange {
                from: None,
                until: Some(Bound::Exclusive(now)),
            },
            TimeFilter::Today => TimeRange {
                from: Some(today),
                until: Some(Bound::Inclusive(end_of_day(now))),
            },
            TimeFilter::ThisWeek => TimeRange {
                from: Some(today),
                until: Some(Bound::Inclusive(today + Duration::days(7))),
            },
            TimeFilter::NextWeek => TimeRange {
                from: Some(today + Duration::days(7)),
                until: Some(Bound::Inclusive(today + Duration::days(14))),
            },
        };
        Some(range)
    }
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Inclusive(DateTime<Utc>),
    Exclusive(DateTime<Utc>),
}

/// Resolved bucket; the lower end is always inclusive
#[derive(Debug, Clone, Copy)]
struct TimeRange {
    from: Option<DateTime<Utc>>,
    until: Option<Bound>,
}

impl TimeRange {
    fn contains(&self, instant: DateTime<Utc>) -> bool {
        let after_start = self.from.map_or(true, |from| instant >= from);
        let before_end = match self.until {
            None => true,
            Some(Bound::Inclusive(end)) => instant <= end,
            Some(Bound::Exclusive(end)) => instant < end,
        };
        after_start && before_end
    }
}

/// Search box, dropdowns and time bucket of a list page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub categorical: BTreeMap<String, String>,
    pub time_filter: TimeFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_filter(key, value);
        self
    }

    pub fn with_time(mut self, time_filter: TimeFilter) -> Self {
        self.time_filter = time_filter;
        self
    }

    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.categorical.insert(key.into(), value.into());
    }

    /// Resets a dropdown back to "all"
    pub fn clear_filter(&mut self, key: &str) {
        self.categorical.remove(key);
    }

    /// Categorical filters that constrain the result
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categorical
            .iter()
            .filter(|(_, value)| value.as_str() != FILTER_ALL)
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of active dimensions, for the filter badge
    pub fn active_count(&self) -> usize {
        let search = usize::from(!self.search_term.is_empty());
        let time = usize::from(self.time_filter != TimeFilter::All);
        search + time + self.active_filters().count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

fn matches_search<T: ListRecord>(record: &T, term_lower: &str) -> bool {
    record
        .searchable_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(term_lower))
}

fn matches_categorical<T: ListRecord>(record: &T, filters: &FilterState) -> bool {
    filters
        .active_filters()
        .filter(|(key, _)| T::FILTER_KEYS.contains(key))
        .all(|(key, expected)| record.filter_value(key).as_deref() == Some(expected))
}

/// Records passing every active filter, in their original order.
///
/// `clock` is read once per call so that every record is compared against
/// the same instant.
pub fn filter_records<T, C>(records: &[T], filters: &FilterState, clock: &C) -> Vec<T>
where
    T: ListRecord + Clone,
    C: Clock + ?Sized,
{
    let term_lower = filters.search_term.to_lowercase();
    let time_range = filters.time_filter.range(clock.now());

    let kept: Vec<T> = records
        .iter()
        .filter(|record| term_lower.is_empty() || matches_search(*record, &term_lower))
        .filter(|record| matches_categorical(*record, filters))
        .filter(|record| match &time_range {
            None => true,
            Some(range) => record.timestamp().is_some_and(|ts| range.contains(ts)),
        })
        .cloned()
        .collect();

    log::debug!(
        "filter_records: kept {} of {} (search={:?}, time={})",
        kept.len(),
        records.len(),
        filters.search_term,
        filters.time_filter.code()
    );

    kept
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Stable sort: records the comparator considers equal keep their order
pub fn sort_records<T, F>(records: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    records.sort_by(compare);
}

/// Sorted copy of `records`, see [`sort_records`]
pub fn sorted<T, F>(records: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = records.to_vec();
    sort_records(&mut out, compare);
    out
}

/// Orders optional keys with `direction`, missing keys always last
pub fn compare_present_first<K, F>(
    a: Option<K>,
    b: Option<K>,
    direction: SortDirection,
    mut compare: F,
) -> Ordering
where
    F: FnMut(&K, &K) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(compare(&a, &b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: Option<String>,
        code: Option<String>,
        status: Option<String>,
        at: Option<DateTime<Utc>>,
    }

    impl ListRecord for Row {
        const FILTER_KEYS: &'static [&'static str] = &["status"];

        fn searchable_fields(&self) -> Vec<Option<&str>> {
            vec![self.name.as_deref(), self.code.as_deref()]
        }

        fn filter_value(&self, key: &str) -> Option<String> {
            match key {
                "status" => self.status.clone(),
                _ => None,
            }
        }

        fn timestamp(&self) -> Option<DateTime<Utc>> {
            self.at
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
    }

    fn row(id: u32, name: &str, status: &str, hours_from_now: Option<i64>) -> Row {
        Row {
            id,
            name: Some(name.to_string()),
            code: Some(format!("BA-{id:04}")),
            status: Some(status.to_string()),
            at: hours_from_now.map(|h| now() + Duration::hours(h)),
        }
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn fixture() -> Vec<Row> {
        vec![
            row(1, "Cassandra Lee", "confirmed", Some(-48)),
            row(2, "Nadia Putri", "pending", Some(2)),
            row(3, "Bayu Santoso", "cancelled", Some(-1)),
            row(4, "Citra Dewi", "confirmed", Some(24 * 8)),
            row(5, "Lee Min", "confirmed", Some(24 * 3)),
            row(6, "Dewi Lestari", "pending", None),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let rows = fixture();
        let out = filter_records(&rows, &FilterState::new(), &FixedClock(now()));
        assert_eq!(out, rows);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = vec![row(1, "Cassandra Lee", "confirmed", None)];
        for term in ["cassandra", "CASSANDRA", "sandra l"] {
            let f = FilterState::new().with_search(term);
            assert_eq!(ids(&filter_records(&rows, &f, &SystemClock)), vec![1]);
        }
        let f = FilterState::new().with_search("ba-0001");
        assert_eq!(ids(&filter_records(&rows, &f, &SystemClock)), vec![1]);
    }

    #[test]
    fn test_search_skips_missing_fields() {
        let mut orphan = row(9, "x", "pending", None);
        orphan.name = None;
        orphan.code = None;
        let f = FilterState::new().with_search("x");
        assert!(filter_records(&[orphan], &f, &SystemClock).is_empty());
    }

    #[test]
    fn test_categorical_and_sentinel() {
        let rows = fixture();
        let clock = FixedClock(now());

        let f = FilterState::new().with_filter("status", "confirmed");
        assert_eq!(ids(&filter_records(&rows, &f, &clock)), vec![1, 4, 5]);

        let f = FilterState::new().with_filter("status", FILTER_ALL);
        assert_eq!(filter_records(&rows, &f, &clock).len(), rows.len());

        // a key the record does not expose is no constraint
        let f = FilterState::new().with_filter("service", "4");
        assert_eq!(filter_records(&rows, &f, &clock), rows);

        // a known key with a missing value still excludes the record
        let mut no_status = rows[0].clone();
        no_status.status = None;
        let f = FilterState::new().with_filter("status", "confirmed");
        assert!(filter_records(&[no_status], &f, &clock).is_empty());
    }

    #[test]
    fn test_dimensions_are_anded() {
        let f = FilterState::new()
            .with_search("lee")
            .with_filter("status", "confirmed")
            .with_time(TimeFilter::Upcoming);
        let out = filter_records(&fixture(), &f, &FixedClock(now()));
        assert_eq!(ids(&out), vec![5]);
    }

    #[test]
    fn test_time_buckets() {
        let rows = fixture();
        let clock = FixedClock(now());
        let run = |t: TimeFilter| ids(&filter_records(&rows, &FilterState::new().with_time(t), &clock));

        assert_eq!(run(TimeFilter::Upcoming), vec![2, 4, 5]);
        assert_eq!(run(TimeFilter::Past), vec![1, 3]);
        assert_eq!(run(TimeFilter::Today), vec![2, 3]);
        assert_eq!(run(TimeFilter::ThisWeek), vec![2, 3, 5]);
        assert_eq!(run(TimeFilter::NextWeek), vec![4]);
        assert_eq!(run(TimeFilter::All).len(), 6);
    }

    #[test]
    fn test_bucket_edges_are_inclusive() {
        let today = start_of_day(now());
        let at = |id, ts| Row {
            id,
            name: None,
            code: None,
            status: None,
            at: Some(ts),
        };
        let rows = vec![
            at(1, today),
            at(2, end_of_day(now())),
            at(3, today + Duration::days(7)),
            at(4, today + Duration::days(14)),
            at(5, now()),
        ];
        let clock = FixedClock(now());
        let run = |t: TimeFilter| ids(&filter_records(&rows, &FilterState::new().with_time(t), &clock));

        assert_eq!(run(TimeFilter::Today), vec![1, 2, 5]);
        assert_eq!(run(TimeFilter::ThisWeek), vec![1, 2, 3, 5]);
        assert_eq!(run(TimeFilter::NextWeek), vec![3, 4]);
        // now itself counts as upcoming, not past
        assert_eq!(run(TimeFilter::Upcoming), vec![2, 3, 4, 5]);
        assert_eq!(run(TimeFilter::Past), vec![1]);
    }

    #[test]
    fn test_unknown_time_code_disables_filter() {
        assert_eq!(TimeFilter::from_code("tomorrow"), TimeFilter::All);
        for t in TimeFilter::all() {
            assert_eq!(TimeFilter::from_code(t.code()), t);
        }
    }

    #[test]
    fn test_missing_timestamp_excluded_only_when_time_filter_active() {
        let rows = fixture();
        let clock = FixedClock(now());
        let all = filter_records(&rows, &FilterState::new(), &clock);
        assert!(all.iter().any(|r| r.id == 6));
        for t in TimeFilter::all().into_iter().skip(1) {
            let out = filter_records(&rows, &FilterState::new().with_time(t), &clock);
            assert!(out.iter().all(|r| r.id != 6), "{t:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        let rows = fixture();
        let clock = FixedClock(now());
        let f = FilterState::new()
            .with_search("e")
            .with_filter("status", "confirmed")
            .with_time(TimeFilter::ThisWeek);
        let once = filter_records(&rows, &f, &clock);
        let twice = filter_records(&once, &f, &clock);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_extra_constraint_never_grows_result() {
        let rows = fixture();
        let clock = FixedClock(now());
        let base = FilterState::new().with_search("e");
        let extensions = [
            base.clone().with_filter("status", "pending"),
            base.clone().with_time(TimeFilter::Past),
            base.clone().with_search("lee"),
        ];
        let base_len = filter_records(&rows, &base, &clock).len();
        for f in extensions {
            assert!(filter_records(&rows, &f, &clock).len() <= base_len);
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let rows = fixture();
        let before = rows.clone();
        let f = FilterState::new().with_filter("status", "pending");
        let _ = filter_records(&rows, &f, &FixedClock(now()));
        assert_eq!(rows, before);
    }

    #[test]
    fn test_active_count() {
        let mut f = FilterState::new()
            .with_search("a")
            .with_filter("status", "pending")
            .with_filter("service", FILTER_ALL)
            .with_time(TimeFilter::Today);
        assert_eq!(f.active_count(), 3);
        f.clear_filter("status");
        assert_eq!(f.active_count(), 2);
        assert!(!f.is_empty());
        assert!(FilterState::new().is_empty());
    }

    #[test]
    fn test_sort_is_stable() {
        let rows = vec![
            row(1, "a", "x", Some(5)),
            row(2, "b", "x", Some(1)),
            row(3, "c", "x", Some(5)),
            row(4, "d", "x", Some(1)),
            row(5, "e", "x", None),
        ];
        let asc = sorted(&rows, |a, b| {
            compare_present_first(a.at, b.at, SortDirection::Ascending, Ord::cmp)
        });
        assert_eq!(ids(&asc), vec![2, 4, 1, 3, 5]);

        let desc = sorted(&rows, |a, b| {
            compare_present_first(a.at, b.at, SortDirection::Descending, Ord::cmp)
        });
        assert_eq!(ids(&desc), vec![1, 3, 2, 4, 5]);
        assert_eq!(ids(&rows), vec![1, 2, 3, 4, 5]);
    }
}
