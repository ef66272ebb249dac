use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use contracts::domain::a004_booking::aggregate::Booking;
use contracts::enums::booking_status::BookingStatus;

use crate::shared::date_utils::parse_timestamp;
use crate::shared::list_query::{compare_present_first, Clock, ListRecord, SortDirection};

impl ListRecord for Booking {
    const FILTER_KEYS: &'static [&'static str] = &["status", "service"];

    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.user.as_ref().map(|u| u.name.as_str()),
            self.service_name(),
            Some(self.booking_code.as_str()),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.code().to_string()),
            "service" => self.service_id().map(|id| id.to_string()),
            _ => None,
        }
    }

    /// Start of the booked class
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.schedule
            .as_ref()
            .and_then(|s| parse_timestamp(&s.start_time))
    }
}

fn end_time(booking: &Booking) -> Option<DateTime<Utc>> {
    booking
        .schedule
        .as_ref()
        .and_then(|s| parse_timestamp(&s.end_time))
}

/// Where a booking stands from the customer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingProgress {
    /// Waiting for payment
    Pending,
    /// Confirmed, class not over yet
    Scheduled,
    /// Confirmed, class is over
    Completed,
    Cancelled,
}

impl BookingProgress {
    /// `None` for a confirmed booking whose schedule is gone or unreadable
    pub fn of(booking: &Booking, now: DateTime<Utc>) -> Option<Self> {
        match booking.status {
            BookingStatus::Pending => Some(BookingProgress::Pending),
            BookingStatus::Cancelled => Some(BookingProgress::Cancelled),
            BookingStatus::Confirmed => end_time(booking).map(|end| {
                if end > now {
                    BookingProgress::Scheduled
                } else {
                    BookingProgress::Completed
                }
            }),
        }
    }

    /// A class can be reviewed once, strictly after it ended
    pub fn can_review(booking: &Booking, now: DateTime<Utc>) -> bool {
        booking.status == BookingStatus::Confirmed
            && booking.review.is_none()
            && end_time(booking).is_some_and(|end| end < now)
    }

    /// Cancellation is allowed until the class starts
    pub fn can_cancel(booking: &Booking, now: DateTime<Utc>) -> bool {
        booking.status != BookingStatus::Cancelled
            && booking.timestamp().is_some_and(|start| start > now)
    }
}

/// Tabs of the customer's booking list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MyBookingsFilter {
    #[default]
    All,
    Pending,
    Confirmed,
    Finished,
    Cancelled,
}

impl MyBookingsFilter {
    pub fn code(&self) -> &'static str {
        match self {
            MyBookingsFilter::All => "all",
            MyBookingsFilter::Pending => "pending",
            MyBookingsFilter::Confirmed => "confirmed",
            MyBookingsFilter::Finished => "finished",
            MyBookingsFilter::Cancelled => "cancelled",
        }
    }

    pub fn all() -> Vec<MyBookingsFilter> {
        vec![
            MyBookingsFilter::All,
            MyBookingsFilter::Pending,
            MyBookingsFilter::Confirmed,
            MyBookingsFilter::Finished,
            MyBookingsFilter::Cancelled,
        ]
    }

    /// Unknown codes show every booking
    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => MyBookingsFilter::Pending,
            "confirmed" => MyBookingsFilter::Confirmed,
            "finished" => MyBookingsFilter::Finished,
            "cancelled" => MyBookingsFilter::Cancelled,
            _ => MyBookingsFilter::All,
        }
    }

    fn matches(&self, booking: &Booking, now: DateTime<Utc>) -> bool {
        let progress = BookingProgress::of(booking, now);
        match self {
            MyBookingsFilter::All => true,
            MyBookingsFilter::Pending => progress == Some(BookingProgress::Pending),
            MyBookingsFilter::Confirmed => progress == Some(BookingProgress::Scheduled),
            MyBookingsFilter::Finished => progress == Some(BookingProgress::Completed),
            MyBookingsFilter::Cancelled => progress == Some(BookingProgress::Cancelled),
        }
    }
}

/// Customer booking tab, order preserved
pub fn filter_my_bookings<C: Clock + ?Sized>(
    bookings: &[Booking],
    filter: MyBookingsFilter,
    clock: &C,
) -> Vec<Booking> {
    let now = clock.now();
    bookings
        .iter()
        .filter(|b| filter.matches(b, now))
        .cloned()
        .collect()
}

/// Drops bookings whose schedule no longer exists
pub fn without_orphans(bookings: &[Booking]) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.schedule.is_some())
        .cloned()
        .collect()
}

/// Latest class first; bookings without a schedule last
pub fn newest_first(a: &Booking, b: &Booking) -> Ordering {
    compare_present_first(a.timestamp(), b.timestamp(), SortDirection::Descending, Ord::cmp)
}
