use serde::{Deserialize, Serialize};

use crate::domain::a001_service::aggregate::Service;
use crate::domain::a002_instructor::aggregate::Instructor;

/// A bookable session of a service, taught by one instructor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: u64,
    pub service_id: u64,
    pub instructor_id: u64,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub total_capacity: Option<u32>,
    #[serde(default)]
    pub remaining_slots: Option<u32>,
    #[serde(default)]
    pub service: Option<Service>,
    #[serde(default)]
    pub instructor: Option<Instructor>,
}

impl Schedule {
    pub fn service_name(&self) -> Option<&str> {
        self.service.as_ref().map(|s| s.name.as_str())
    }

    pub fn instructor_name(&self) -> Option<&str> {
        self.instructor.as_ref().and_then(|i| i.name())
    }

    pub fn is_full(&self) -> bool {
        self.remaining_slots == Some(0)
    }
}
