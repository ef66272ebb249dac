use contracts::domain::a002_instructor::aggregate::Instructor;

use crate::shared::list_query::ListRecord;

impl ListRecord for Instructor {
    const FILTER_KEYS: &'static [&'static str] = &["service"];

    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![self.name(), self.service.as_ref().map(|s| s.name.as_str())]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "service" => self.service.as_ref().map(|s| s.id.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{filter_records, FilterState, SystemClock};
    use serde_json::json;

    fn fixture() -> Vec<Instructor> {
        serde_json::from_value(json!([
            {
                "id": 1, "user_id": 10, "service_id": 4,
                "user": { "id": 10, "name": "Nadia Putri", "email": "n@example.com", "role": "instructor" },
                "service": { "id": 4, "name": "Lash Lift", "price": 250000 }
            },
            {
                "id": 2, "user_id": 11, "service_id": 5,
                "user": { "id": 11, "name": "Rina Ayu", "email": "r@example.com", "role": "instructor" },
                "service": null
            },
            {
                "id": 3, "user_id": 12, "service_id": 4,
                "user": null,
                "service": { "id": 4, "name": "Lash Lift", "price": 250000 }
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_search_over_user_and_service() {
        let f = FilterState::new().with_search("lash");
        let out = filter_records(&fixture(), &f, &SystemClock);
        assert_eq!(out.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);

        let f = FilterState::new().with_search("rina");
        let out = filter_records(&fixture(), &f, &SystemClock);
        assert_eq!(out.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_service_filter_skips_deleted_service() {
        let f = FilterState::new().with_filter("service", "5");
        assert!(filter_records(&fixture(), &f, &SystemClock).is_empty());

        let f = FilterState::new().with_filter("service", "4");
        assert_eq!(filter_records(&fixture(), &f, &SystemClock).len(), 2);
    }
}
