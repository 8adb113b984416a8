use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    NotStarted,
    NearDeadline,
    Overdue,
    Fulfilled,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::NotStarted => "Not Started",
            RequestStatus::NearDeadline => "Near Deadline",
            RequestStatus::Overdue => "Overdue",
            RequestStatus::Fulfilled => "Fulfilled",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidityStatus {
    Valid,
    NeedsImprovement,
    Invalid,
}

impl ValidityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ValidityStatus::Valid => "Valid",
            ValidityStatus::NeedsImprovement => "Needs Improvement",
            ValidityStatus::Invalid => "Invalid",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditProject {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRequest {
    pub id: String,
    pub project_id: String,
    pub date: String,
    pub unit: String,
    pub description: String,
    pub deadline: String,
    pub pic: String,
    pub related_evidence_ids: Vec<String>,
    pub status: RequestStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: String,
    pub category: String,
    pub description: String,
    pub file_link: String,
    pub unit: String,
    pub pic: String,
    pub date_received: String,
    pub validity: ValidityStatus,
}

/// Fields captured by the add-request form. The store supplies `id` and
/// forces the status, so neither appears here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDraft {
    pub project_id: String,
    pub date: String,
    pub unit: String,
    pub description: String,
    pub deadline: String,
    pub pic: String,
    pub related_evidence_ids: Vec<String>,
}

/// Fields captured by the add-evidence form. `id` and `file_link` are
/// store-supplied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceDraft {
    pub category: String,
    pub description: String,
    pub unit: String,
    pub pic: String,
    pub date_received: String,
    pub validity: ValidityStatus,
}

fn require(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

fn require_date(value: &str, field: &str) -> Result<(), String> {
    require(value, field)?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| format!("{field} must be a YYYY-MM-DD date"))
}

pub fn validate_project_name(name: &str) -> Result<(), String> {
    require(name, "project name")
}

pub fn validate_request_draft(draft: &RequestDraft) -> Result<(), String> {
    require(&draft.project_id, "project")?;
    require_date(&draft.date, "request date")?;
    require(&draft.unit, "unit")?;
    require(&draft.description, "description")?;
    require_date(&draft.deadline, "deadline")?;
    require(&draft.pic, "pic")?;
    Ok(())
}

pub fn validate_evidence_draft(draft: &EvidenceDraft) -> Result<(), String> {
    require(&draft.category, "category")?;
    require(&draft.description, "description")?;
    require(&draft.unit, "unit")?;
    require(&draft.pic, "pic")?;
    require_date(&draft.date_received, "date received")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RequestDraft {
        RequestDraft {
            project_id: "PROJ-001".into(),
            date: "2025-10-02".into(),
            unit: "Kepatuhan".into(),
            description: "Minta kebijakan keamanan informasi".into(),
            deadline: "2025-10-04".into(),
            pic: "Rina Ardian".into(),
            related_evidence_ids: vec!["BKT-001".into()],
        }
    }

    #[test]
    fn validates_complete_request_draft() {
        assert!(validate_request_draft(&draft()).is_ok());
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut d = draft();
        d.description = "   ".into();
        assert_eq!(
            validate_request_draft(&d),
            Err("description is required".to_string())
        );

        assert_eq!(
            validate_project_name(""),
            Err("project name is required".to_string())
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        let mut d = draft();
        d.deadline = "04/10/2025".into();
        assert_eq!(
            validate_request_draft(&d),
            Err("deadline must be a YYYY-MM-DD date".to_string())
        );
    }

    #[test]
    fn empty_evidence_links_are_allowed() {
        let mut d = draft();
        d.related_evidence_ids.clear();
        assert!(validate_request_draft(&d).is_ok());
    }

    #[test]
    fn validates_evidence_draft() {
        let d = EvidenceDraft {
            category: "Kebijakan".into(),
            description: "Kebijakan Keamanan Informasi".into(),
            unit: "TI".into(),
            pic: "Andi Wijaya".into(),
            date_received: "2025-10-01".into(),
            validity: ValidityStatus::Valid,
        };
        assert!(validate_evidence_draft(&d).is_ok());

        let mut bad = d.clone();
        bad.date_received = "yesterday".into();
        assert_eq!(
            validate_evidence_draft(&bad),
            Err("date received must be a YYYY-MM-DD date".to_string())
        );
    }

    #[test]
    fn status_round_trips_through_json() {
        let json = serde_json::to_string(&RequestStatus::NearDeadline).expect("serialize");
        let back: RequestStatus = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, RequestStatus::NearDeadline);
        assert_eq!(back.label(), "Near Deadline");
    }
}
