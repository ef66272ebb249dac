use serde::{Deserialize, Serialize};

use crate::domain::a003_schedule::aggregate::Schedule;
use crate::domain::a005_review::aggregate::Review;
use crate::enums::booking_status::BookingStatus;
use crate::shared::decimal;
use crate::system::users::User;

/// Customer booking of a schedule
///
/// `schedule` is `None` when the schedule was soft-deleted after booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: u64,
    pub user_id: u64,
    pub schedule_id: u64,
    pub booking_code: String,
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "decimal::deserialize_option")]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    #[serde(default)]
    pub review: Option<Review>,
}

impl Booking {
    /// Service id through `schedule.service`
    pub fn service_id(&self) -> Option<u64> {
        self.schedule
            .as_ref()
            .and_then(|s| s.service.as_ref())
            .map(|s| s.id)
    }

    pub fn service_name(&self) -> Option<&str> {
        self.schedule.as_ref().and_then(|s| s.service_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_with_deleted_schedule() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 7,
            "user_id": 3,
            "schedule_id": 12,
            "booking_code": "BA-0007",
            "status": "confirmed",
            "total_price": "350000.00",
            "schedule": null
        }))
        .unwrap();

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.total_price, Some(350000.0));
        assert!(booking.schedule.is_none());
        assert_eq!(booking.service_id(), None);
        assert_eq!(booking.service_name(), None);
    }

    #[test]
    fn test_booking_with_nested_relations() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 8,
            "user_id": 3,
            "schedule_id": 12,
            "booking_code": "BA-0008",
            "status": "pending",
            "schedule": {
                "id": 12,
                "service_id": 4,
                "instructor_id": 2,
                "start_time": "2026-10-20T09:00:00Z",
                "end_time": "2026-10-20T11:00:00Z",
                "service": { "id": 4, "name": "Lash Lift", "price": 250000 },
                "instructor": {
                    "id": 2,
                    "user_id": 9,
                    "user": {
                        "id": 9,
                        "name": "Nadia Putri",
                        "email": "nadia@example.com",
                        "role": "instructor"
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(booking.service_id(), Some(4));
        assert_eq!(booking.service_name(), Some("Lash Lift"));
        let schedule = booking.schedule.as_ref().unwrap();
        assert_eq!(schedule.instructor_name(), Some("Nadia Putri"));
        assert!(!schedule.is_full());
    }
}
