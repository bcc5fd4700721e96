//! Mapping of raw Jira issue payloads into domain records.

use serde_json::Value;
use tracing::trace;

use crate::config::ProjectMetadata;
use crate::error::{Error, Result};
use crate::model::{Epic, EpicSummary, Issue};
use crate::util::adf::flatten_adf;
use crate::util::date::normalize_date;

/// Fields requested when searching for plain issues.
pub fn issue_fields(project: &ProjectMetadata) -> String {
    format!(
        "summary,description,status,created,{},{}",
        project.actual_start_date_field_id, project.actual_end_date_field_id
    )
}

/// Fields requested for epics.
pub fn epic_fields(project: &ProjectMetadata) -> String {
    format!(
        "summary,description,status,{},duedate",
        project.start_date_field_id
    )
}

fn required<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = value;
    for (depth, segment) in path.iter().enumerate() {
        current = match current.get(segment) {
            Some(v) if !v.is_null() => v,
            _ => return Err(Error::MissingField(path[..=depth].join("."))),
        };
    }
    Ok(current)
}

fn required_str<'a>(value: &'a Value, path: &[&str]) -> Result<&'a str> {
    required(value, path)?
        .as_str()
        .ok_or_else(|| Error::InvalidField(path.join(".")))
}

/// A nullable string field; absent and `null` both map to `None`.
fn optional_str<'a>(fields: &'a Value, name: &str) -> Result<Option<&'a str>> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(Error::InvalidField(format!("fields.{name}"))),
    }
}

fn optional_date(fields: &Value, name: &str) -> Result<Option<String>> {
    Ok(normalize_date(optional_str(fields, name)?))
}

pub fn map_issue(payload: &Value, project: &ProjectMetadata) -> Result<Issue> {
    let issue_id = required_str(payload, &["key"])?;
    let fields = required(payload, &["fields"])?;

    // Not stored on `Issue`; kept for log output only.
    let description = flatten_adf(fields.get("description").unwrap_or(&Value::Null));
    trace!(issue = issue_id, description_len = description.len(), "flattened description");

    let issue = Issue {
        issue_id: issue_id.to_string(),
        title: required_str(payload, &["fields", "summary"])?.to_string(),
        status: required_str(payload, &["fields", "status", "name"])?.to_string(),
        created_date: normalize_date(Some(required_str(payload, &["fields", "created"])?))
            .unwrap_or_default(),
        start_date: optional_date(fields, &project.actual_start_date_field_id)?,
        done_date: optional_date(fields, &project.actual_end_date_field_id)?,
    };
    trace!(?issue, "mapped issue");
    Ok(issue)
}

/// Map the `fields` object of a single-epic fetch. `issues` is supplied by
/// the caller from a separate query.
pub fn map_epic(
    key: &str,
    fields: &Value,
    project: &ProjectMetadata,
    issues: Vec<Issue>,
) -> Result<Epic> {
    Ok(Epic {
        key: key.to_string(),
        summary: required_str(fields, &["summary"])?.to_string(),
        description: flatten_adf(fields.get("description").unwrap_or(&Value::Null)),
        status: required_str(fields, &["status", "name"])?.to_string(),
        start_date: optional_date(fields, &project.start_date_field_id)?,
        due_date: optional_date(fields, "duedate")?,
        issues,
    })
}

/// Map one search hit from the epic listing.
pub fn map_epic_summary(payload: &Value, project: &ProjectMetadata) -> Result<EpicSummary> {
    let fields = required(payload, &["fields"])?;
    Ok(EpicSummary {
        key: required_str(payload, &["key"])?.to_string(),
        summary: required_str(payload, &["fields", "summary"])?.to_string(),
        description: fields.get("description").cloned().unwrap_or(Value::Null),
        status: required_str(payload, &["fields", "status", "name"])?.to_string(),
        start_date: optional_date(fields, &project.start_date_field_id)?,
        due_date: optional_date(fields, "duedate")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project() -> ProjectMetadata {
        ProjectMetadata {
            base_url: "https://acme.atlassian.net/rest/api/3".into(),
            project_key: "ACME".into(),
            start_date_field_id: "customfield_10015".into(),
            actual_start_date_field_id: "customfield_10100".into(),
            actual_end_date_field_id: "customfield_10101".into(),
        }
    }

    fn payload() -> Value {
        json!({
            "key": "ACME-42",
            "fields": {
                "summary": "Fix login",
                "description": {"type": "doc", "content": [
                    {"type": "paragraph", "content": [{"type": "text", "text": "SSO"}]}
                ]},
                "status": {"name": "Done"},
                "created": "2023-01-01T00:00:00.000Z",
                "customfield_10100": "2023-01-03T09:15:00.000+0000",
                "customfield_10101": "2023-01-10"
            }
        })
    }

    #[test]
    fn maps_complete_issue() {
        let issue = map_issue(&payload(), &project()).unwrap();
        assert_eq!(
            issue,
            Issue {
                issue_id: "ACME-42".into(),
                title: "Fix login".into(),
                status: "Done".into(),
                created_date: "2023-01-01".into(),
                start_date: Some("2023-01-03".into()),
                done_date: Some("2023-01-10".into()),
            }
        );
    }

    #[test]
    fn missing_custom_start_field_is_none() {
        let mut raw = payload();
        raw["fields"]
            .as_object_mut()
            .unwrap()
            .remove("customfield_10100");
        let issue = map_issue(&raw, &project()).unwrap();
        assert_eq!(issue.start_date, None);
        assert_eq!(issue.done_date, Some("2023-01-10".into()));
    }

    #[test]
    fn null_custom_end_field_is_none() {
        let mut raw = payload();
        raw["fields"]["customfield_10101"] = Value::Null;
        let issue = map_issue(&raw, &project()).unwrap();
        assert_eq!(issue.done_date, None);
    }

    #[test]
    fn missing_description_is_tolerated() {
        let mut raw = payload();
        raw["fields"].as_object_mut().unwrap().remove("description");
        assert!(map_issue(&raw, &project()).is_ok());
    }

    #[test]
    fn missing_summary_is_malformed() {
        let mut raw = payload();
        raw["fields"].as_object_mut().unwrap().remove("summary");
        let err = map_issue(&raw, &project()).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref p) if p == "fields.summary"));
    }

    #[test]
    fn missing_status_name_is_malformed() {
        let mut raw = payload();
        raw["fields"]["status"] = json!({"id": "3"});
        let err = map_issue(&raw, &project()).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref p) if p == "fields.status.name"));
    }

    #[test]
    fn missing_created_is_malformed() {
        let mut raw = payload();
        raw["fields"].as_object_mut().unwrap().remove("created");
        let err = map_issue(&raw, &project()).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref p) if p == "fields.created"));
    }

    #[test]
    fn missing_fields_object_is_malformed() {
        let err = map_issue(&json!({"key": "ACME-1"}), &project()).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref p) if p == "fields"));
    }

    #[test]
    fn non_string_date_is_invalid() {
        let mut raw = payload();
        raw["fields"]["customfield_10100"] = json!(17);
        let err = map_issue(&raw, &project()).unwrap_err();
        assert!(matches!(err, Error::InvalidField(ref p) if p == "fields.customfield_10100"));
        assert!(err.to_string().contains("unexpected type"));
    }

    #[test]
    fn non_string_summary_is_invalid() {
        let mut raw = payload();
        raw["fields"]["summary"] = json!({"text": "Fix login"});
        let err = map_issue(&raw, &project()).unwrap_err();
        assert!(matches!(err, Error::InvalidField(ref p) if p == "fields.summary"));
    }

    #[test]
    fn maps_epic_fields() {
        let fields = json!({
            "summary": "Onboarding",
            "description": {"type": "doc", "content": [
                {"type": "heading", "content": [{"type": "text", "text": "Why"}]}
            ]},
            "status": {"name": "In Progress"},
            "customfield_10015": "2024-02-01",
            "duedate": "2024-03-31"
        });
        let epic = map_epic("ACME-1", &fields, &project(), Vec::new()).unwrap();
        assert_eq!(epic.key, "ACME-1");
        assert_eq!(epic.description, "\n Why");
        assert_eq!(epic.status, "In Progress");
        assert_eq!(epic.start_date.as_deref(), Some("2024-02-01"));
        assert_eq!(epic.due_date.as_deref(), Some("2024-03-31"));
        assert!(epic.issues.is_empty());
    }

    #[test]
    fn maps_epic_summary_keeps_raw_description() {
        let raw = json!({
            "key": "ACME-1",
            "fields": {
                "summary": "Onboarding",
                "description": null,
                "status": {"name": "To Do"},
                "duedate": null
            }
        });
        let epic = map_epic_summary(&raw, &project()).unwrap();
        assert_eq!(epic.description, Value::Null);
        assert_eq!(epic.start_date, None);
        assert_eq!(epic.due_date, None);
    }

    #[test]
    fn field_lists_include_custom_ids() {
        assert_eq!(
            issue_fields(&project()),
            "summary,description,status,created,customfield_10100,customfield_10101"
        );
        assert_eq!(
            epic_fields(&project()),
            "summary,description,status,customfield_10015,duedate"
        );
    }
}
