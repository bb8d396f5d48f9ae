//! Task wire types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Request body for creating or replacing a task
///
/// `created` and `last_updated` may be supplied on create; when absent
/// the server stamps them. On update both are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    pub title: String,
    pub description: String,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_by: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// A stored task as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_by: Option<NaiveDateTime>,
    #[serde(with = "timestamp")]
    pub created: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub last_updated: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn unset_optionals_are_omitted() {
        let task = Task {
            id: 1,
            title: "Create DB".into(),
            description: "Create database".into(),
            due_by: None,
            created: noon(),
            last_updated: noon(),
            assigned_to: None,
            priority: None,
        };
        let value = serde_json::to_value(&task).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("due_by"));
        assert!(!object.contains_key("assigned_to"));
        assert!(!object.contains_key("priority"));
        assert_eq!(object["created"], "2024-05-17T12:00:00");
    }

    #[test]
    fn set_optionals_are_present() {
        let task = Task {
            id: 2,
            title: "t".into(),
            description: "d".into(),
            due_by: Some(noon()),
            created: noon(),
            last_updated: noon(),
            assigned_to: Some(3),
            priority: Some(1),
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["due_by"], "2024-05-17T12:00:00");
        assert_eq!(value["assigned_to"], 3);
        assert_eq!(value["priority"], 1);
    }

    #[test]
    fn details_accept_explicit_nulls() {
        let details: TaskDetails = serde_json::from_value(json!({
            "title": "t",
            "description": "d",
            "due_by": null,
            "assigned_to": null,
            "priority": null
        }))
        .unwrap();
        assert_eq!(details.due_by, None);
        assert_eq!(details.assigned_to, None);
        assert_eq!(details.priority, None);
    }

    #[test]
    fn details_need_title_and_description() {
        let result: Result<TaskDetails, _> = serde_json::from_value(json!({"title": "t"}));
        assert!(result.is_err());
    }

    #[test]
    fn details_reject_non_numeric_priority() {
        let result: Result<TaskDetails, _> = serde_json::from_value(json!({
            "title": "t",
            "description": "d",
            "priority": "high"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn details_round_trip_without_nulls() {
        let raw = json!({"title": "t", "description": "d", "priority": 2});
        let details: TaskDetails = serde_json::from_value(raw.clone()).unwrap();
        let back: Value = serde_json::to_value(&details).unwrap();
        assert_eq!(back, raw);
    }
}
