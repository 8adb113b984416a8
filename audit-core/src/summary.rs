use crate::model::{AuditProject, AuditRequest, Evidence, RequestStatus, DATE_FORMAT};
use chrono::NaiveDate;

pub const NEAR_DEADLINE_WINDOW_DAYS: i64 = 7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub not_started: usize,
    pub near_deadline: usize,
    pub overdue: usize,
    pub fulfilled: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.not_started + self.near_deadline + self.overdue + self.fulfilled
    }
}

pub fn status_counts(requests: &[AuditRequest]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for request in requests {
        match request.status {
            RequestStatus::NotStarted => counts.not_started += 1,
            RequestStatus::NearDeadline => counts.near_deadline += 1,
            RequestStatus::Overdue => counts.overdue += 1,
            RequestStatus::Fulfilled => counts.fulfilled += 1,
        }
    }
    counts
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Unfulfilled requests whose deadline falls inside
/// `[today, today + NEAR_DEADLINE_WINDOW_DAYS]`, soonest first. A deadline
/// that does not parse is skipped rather than treated as due.
pub fn upcoming_deadlines(requests: &[AuditRequest], today: NaiveDate) -> Vec<AuditRequest> {
    let mut dated: Vec<(NaiveDate, AuditRequest)> = requests
        .iter()
        .filter(|r| r.status != RequestStatus::Fulfilled)
        .filter_map(|r| parse_date(&r.deadline).map(|d| (d, r.clone())))
        .filter(|(deadline, _)| {
            let days = (*deadline - today).num_days();
            (0..=NEAR_DEADLINE_WINDOW_DAYS).contains(&days)
        })
        .collect();
    dated.sort_by_key(|(deadline, _)| *deadline);
    dated.into_iter().map(|(_, r)| r).collect()
}

/// One entry per id in `related_evidence_ids`, in that order. A reference to
/// evidence that no longer exists stays visible as `Missing` instead of
/// disappearing or failing the render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelatedEvidence {
    Found(Evidence),
    Missing(String),
}

pub fn related_evidence(request: &AuditRequest, evidence: &[Evidence]) -> Vec<RelatedEvidence> {
    request
        .related_evidence_ids
        .iter()
        .map(|id| {
            evidence
                .iter()
                .find(|e| &e.id == id)
                .map(|e| RelatedEvidence::Found(e.clone()))
                .unwrap_or_else(|| RelatedEvidence::Missing(id.clone()))
        })
        .collect()
}

pub fn project_name<'a>(projects: &'a [AuditProject], project_id: &str) -> Option<&'a str> {
    projects
        .iter()
        .find(|p| p.id == project_id)
        .map(|p| p.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn date(value: &str) -> NaiveDate {
        parse_date(value).expect("test date")
    }

    fn request(id: &str, status: RequestStatus, deadline: &str) -> AuditRequest {
        AuditRequest {
            id: id.into(),
            project_id: "PROJ-001".into(),
            date: "2025-10-01".into(),
            unit: "TI".into(),
            description: "test".into(),
            deadline: deadline.into(),
            pic: "Andi Wijaya".into(),
            related_evidence_ids: vec![],
            status,
        }
    }

    #[test]
    fn counts_requests_per_status() {
        let requests = vec![
            request("PRM-001", RequestStatus::Fulfilled, "2025-10-04"),
            request("PRM-002", RequestStatus::Fulfilled, "2025-10-06"),
            request("PRM-003", RequestStatus::NearDeadline, "2025-11-03"),
            request("PRM-004", RequestStatus::Overdue, "2025-10-10"),
            request("PRM-005", RequestStatus::Overdue, "2025-10-27"),
            request("PRM-006", RequestStatus::NotStarted, "2025-11-18"),
        ];
        let counts = status_counts(&requests);
        assert_eq!(counts.fulfilled, 2);
        assert_eq!(counts.near_deadline, 1);
        assert_eq!(counts.overdue, 2);
        assert_eq!(counts.not_started, 1);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn window_keeps_only_near_unfulfilled_deadlines() {
        let requests = vec![
            request("PRM-001", RequestStatus::NotStarted, "2025-11-05"),
            request("PRM-002", RequestStatus::NotStarted, "2025-11-01"),
            request("PRM-003", RequestStatus::NotStarted, "2025-11-09"),
            request("PRM-004", RequestStatus::Fulfilled, "2025-11-02"),
            request("PRM-005", RequestStatus::NotStarted, "2025-10-30"),
        ];
        let today = date("2025-11-01");

        let upcoming = upcoming_deadlines(&requests, today);
        let ids: Vec<_> = upcoming.iter().map(|r| r.id.as_str()).collect();

        // PRM-003 is past the 7-day window, PRM-004 is fulfilled, PRM-005 is
        // already past due.
        assert_eq!(ids, vec!["PRM-002", "PRM-001"]);
    }

    #[test]
    fn window_includes_both_edges() {
        let requests = vec![
            request("PRM-001", RequestStatus::NotStarted, "2025-11-01"),
            request("PRM-002", RequestStatus::NotStarted, "2025-11-08"),
        ];
        let upcoming = upcoming_deadlines(&requests, date("2025-11-01"));
        assert_eq!(upcoming.len(), 2);
    }

    #[test]
    fn unparseable_deadline_is_skipped() {
        let requests = vec![request("PRM-001", RequestStatus::NotStarted, "soon")];
        assert!(upcoming_deadlines(&requests, date("2025-11-01")).is_empty());
    }

    #[test]
    fn joins_exactly_the_listed_evidence() {
        let requests = seed::seed_requests();
        let evidence = seed::seed_evidence();
        let first = requests.iter().find(|r| r.id == "PRM-001").expect("seed");

        let related = related_evidence(first, &evidence);
        assert_eq!(related.len(), 1);
        match &related[0] {
            RelatedEvidence::Found(e) => assert_eq!(e.id, "BKT-001"),
            RelatedEvidence::Missing(id) => panic!("BKT-001 should resolve, got Missing({id})"),
        }
    }

    #[test]
    fn dangling_reference_resolves_to_missing() {
        let mut request = request("PRM-001", RequestStatus::NotStarted, "2025-11-05");
        request.related_evidence_ids = vec!["BKT-404".into()];

        let related = related_evidence(&request, &seed::seed_evidence());
        assert_eq!(related, vec![RelatedEvidence::Missing("BKT-404".into())]);
    }

    #[test]
    fn project_name_join_falls_back_to_none() {
        let projects = seed::seed_projects();
        assert_eq!(
            project_name(&projects, "PROJ-002"),
            Some("Pemeriksaan Irjen")
        );
        assert_eq!(project_name(&projects, "PROJ-404"), None);
    }
}
