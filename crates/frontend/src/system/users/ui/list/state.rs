use contracts::system::users::{Role, User};

use crate::shared::list_query::ListRecord;

impl ListRecord for User {
    const FILTER_KEYS: &'static [&'static str] = &["role"];

    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.name.as_str()), Some(self.email.as_str())]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "role" => Some(self.role.code().to_string()),
            _ => None,
        }
    }
}

/// Staff accounts managed by the super admin
pub fn admins_only(users: &[User]) -> Vec<User> {
    users.iter().filter(|u| u.role.is_admin()).cloned().collect()
}

pub fn with_role(users: &[User], role: Role) -> Vec<User> {
    users.iter().filter(|u| u.role == role).cloned().collect()
}
