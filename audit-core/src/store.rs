use crate::model::{
    AuditProject, AuditRequest, Evidence, EvidenceDraft, RequestDraft, RequestStatus,
};

pub const PROJECT_PREFIX: &str = "PROJ";
pub const REQUEST_PREFIX: &str = "PRM";
pub const EVIDENCE_PREFIX: &str = "BKT";

/// External documents are not modeled; every evidence record points at this
/// stand-in link.
pub const PLACEHOLDER_FILE_LINK: &str = "#";

/// The three record lists and their id counters. Counters are monotonic and
/// never reset, so an id freed by a delete is never minted again.
#[derive(Clone, Debug, Default)]
pub struct AuditStore {
    projects: Vec<AuditProject>,
    requests: Vec<AuditRequest>,
    evidence: Vec<Evidence>,
    project_seq: u32,
    request_seq: u32,
    evidence_seq: u32,
}

fn max_suffix<'a>(ids: impl Iterator<Item = &'a str>) -> u32 {
    ids.filter_map(|id| id.rsplit('-').next())
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

fn mint(prefix: &str, seq: &mut u32) -> String {
    *seq += 1;
    format!("{prefix}-{:03}", *seq)
}

impl AuditStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store around existing records, starting each counter past the
    /// highest id already present.
    pub fn from_records(
        projects: Vec<AuditProject>,
        requests: Vec<AuditRequest>,
        evidence: Vec<Evidence>,
    ) -> Self {
        let project_seq = max_suffix(projects.iter().map(|p| p.id.as_str()));
        let request_seq = max_suffix(requests.iter().map(|r| r.id.as_str()));
        let evidence_seq = max_suffix(evidence.iter().map(|e| e.id.as_str()));
        Self {
            projects,
            requests,
            evidence,
            project_seq,
            request_seq,
            evidence_seq,
        }
    }

    pub fn projects(&self) -> &[AuditProject] {
        &self.projects
    }

    pub fn requests(&self) -> &[AuditRequest] {
        &self.requests
    }

    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    pub fn add_project(&mut self, name: String) -> String {
        let id = mint(PROJECT_PREFIX, &mut self.project_seq);
        self.projects.push(AuditProject {
            id: id.clone(),
            name,
        });
        id
    }

    /// Appends a request from form-captured fields. The status is always
    /// `NotStarted` on entry regardless of what the caller captured.
    pub fn add_request(&mut self, draft: RequestDraft) -> String {
        let id = mint(REQUEST_PREFIX, &mut self.request_seq);
        self.requests.push(AuditRequest {
            id: id.clone(),
            project_id: draft.project_id,
            date: draft.date,
            unit: draft.unit,
            description: draft.description,
            deadline: draft.deadline,
            pic: draft.pic,
            related_evidence_ids: draft.related_evidence_ids,
            status: RequestStatus::NotStarted,
        });
        id
    }

    pub fn add_evidence(&mut self, draft: EvidenceDraft) -> String {
        let id = mint(EVIDENCE_PREFIX, &mut self.evidence_seq);
        self.evidence.push(Evidence {
            id: id.clone(),
            category: draft.category,
            description: draft.description,
            file_link: PLACEHOLDER_FILE_LINK.to_string(),
            unit: draft.unit,
            pic: draft.pic,
            date_received: draft.date_received,
            validity: draft.validity,
        });
        id
    }

    /// Silent no-op when the id is absent. References to the deleted request
    /// do not exist anywhere, so nothing else changes.
    pub fn delete_request(&mut self, id: &str) {
        self.requests.retain(|r| r.id != id);
    }

    /// Silent no-op when the id is absent. Requests keep whatever ids they
    /// listed; a now-dangling reference is resolved to a placeholder at
    /// render time.
    pub fn delete_evidence(&mut self, id: &str) {
        self.evidence.retain(|e| e.id != id);
    }
}
