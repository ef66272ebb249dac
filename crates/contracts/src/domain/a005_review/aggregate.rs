use serde::{Deserialize, Serialize};

use crate::domain::a004_booking::aggregate::Booking;

/// Customer review of a finished booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub booking_id: u64,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub booking: Option<Box<Booking>>,
}

impl Review {
    /// Name of the reviewed class, through `booking.schedule.service`
    pub fn service_name(&self) -> Option<&str> {
        self.booking.as_deref().and_then(|b| b.service_name())
    }

    pub fn instructor_name(&self) -> Option<&str> {
        self.booking
            .as_deref()
            .and_then(|b| b.schedule.as_ref())
            .and_then(|s| s.instructor_name())
    }
}
