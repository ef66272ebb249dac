use serde::{Deserialize, Serialize};

use crate::domain::a001_service::aggregate::Service;
use crate::system::users::User;

/// Instructor profile; `user` and `service` are eager-loaded relations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub id: u64,
    pub user_id: u64,
    #[serde(default)]
    pub service_id: Option<u64>,
    #[serde(default)]
    pub bio_id: Option<String>,
    #[serde(default)]
    pub bio_en: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub service: Option<Service>,
}

impl Instructor {
    pub fn name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
