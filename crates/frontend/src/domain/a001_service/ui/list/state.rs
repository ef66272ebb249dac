use std::cmp::Ordering;

use contracts::domain::a001_service::aggregate::Service;

use crate::shared::list_query::{ListRecord, SortDirection};

impl ListRecord for Service {
    const FILTER_KEYS: &'static [&'static str] = &["id"];

    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.name.as_str())]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            _ => None,
        }
    }
}

pub fn compare_by_price(a: &Service, b: &Service, direction: SortDirection) -> Ordering {
    direction.apply(a.price.total_cmp(&b.price))
}
