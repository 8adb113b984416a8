use crate::model::{
    AuditProject, AuditRequest, Evidence, RequestStatus, ValidityStatus,
};

pub fn seed_projects() -> Vec<AuditProject> {
    vec![
        AuditProject {
            id: "PROJ-001".into(),
            name: "Audit BPK Semester II 2025".into(),
        },
        AuditProject {
            id: "PROJ-002".into(),
            name: "Pemeriksaan Irjen".into(),
        },
        AuditProject {
            id: "PROJ-003".into(),
            name: "KAP".into(),
        },
    ]
}

pub fn seed_evidence() -> Vec<Evidence> {
    vec![
        Evidence {
            id: "BKT-001".into(),
            category: "Kebijakan".into(),
            description: "Kebijakan Keamanan Informasi".into(),
            file_link: "#".into(),
            unit: "TI".into(),
            pic: "Andi Wijaya".into(),
            date_received: "2025-10-01".into(),
            validity: ValidityStatus::Valid,
        },
        Evidence {
            id: "BKT-002".into(),
            category: "Prosedur".into(),
            description: "SOP Backup Rutin".into(),
            file_link: "#".into(),
            unit: "TI".into(),
            pic: "Sari Pertiwi".into(),
            date_received: "2025-10-03".into(),
            validity: ValidityStatus::NeedsImprovement,
        },
        Evidence {
            id: "BKT-003".into(),
            category: "Catatan".into(),
            description: "Log Backup Sept 2025".into(),
            file_link: "#".into(),
            unit: "TI".into(),
            pic: "Budi Santoso".into(),
            date_received: "2025-10-05".into(),
            validity: ValidityStatus::Valid,
        },
    ]
}

pub fn seed_requests() -> Vec<AuditRequest> {
    vec![
        AuditRequest {
            id: "PRM-001".into(),
            project_id: "PROJ-001".into(),
            date: "2025-10-02".into(),
            unit: "Kepatuhan".into(),
            description: "Minta kebijakan keamanan informasi".into(),
            deadline: "2025-10-04".into(),
            pic: "Rina Ardian".into(),
            related_evidence_ids: vec!["BKT-001".into()],
            status: RequestStatus::Fulfilled,
        },
        AuditRequest {
            id: "PRM-002".into(),
            project_id: "PROJ-001".into(),
            date: "2025-10-03".into(),
            unit: "TI".into(),
            description: "Minta SOP dan log backup".into(),
            deadline: "2025-10-06".into(),
            pic: "Andi Wijaya".into(),
            related_evidence_ids: vec!["BKT-002".into()],
            status: RequestStatus::Fulfilled,
        },
        AuditRequest {
            id: "PRM-005".into(),
            project_id: "PROJ-001".into(),
            date: "2025-10-24".into(),
            unit: "Kepatuhan".into(),
            description: "Review kebijakan anti-fraud".into(),
            deadline: "2025-11-03".into(),
            pic: "Rina Ardian".into(),
            related_evidence_ids: vec![],
            status: RequestStatus::NearDeadline,
        },
        AuditRequest {
            id: "PRM-003".into(),
            project_id: "PROJ-002".into(),
            date: "2025-10-07".into(),
            unit: "Operasional".into(),
            description: "Checklist harian DC".into(),
            deadline: "2025-10-10".into(),
            pic: "Budi Santoso".into(),
            related_evidence_ids: vec![],
            status: RequestStatus::Overdue,
        },
        AuditRequest {
            id: "PRM-004".into(),
            project_id: "PROJ-002".into(),
            date: "2025-10-19".into(),
            unit: "TI".into(),
            description: "Laporan penetrasi testing Q3".into(),
            deadline: "2025-10-27".into(),
            pic: "Andi Wijaya".into(),
            related_evidence_ids: vec![],
            status: RequestStatus::Overdue,
        },
        AuditRequest {
            id: "PRM-006".into(),
            project_id: "PROJ-002".into(),
            date: "2025-10-28".into(),
            unit: "TI".into(),
            description: "Minta log akses server production".into(),
            deadline: "2025-11-18".into(),
            pic: "Sari Pertiwi".into(),
            related_evidence_ids: vec![],
            status: RequestStatus::NotStarted,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique_per_list() {
        let projects: HashSet<_> = seed_projects().into_iter().map(|p| p.id).collect();
        let requests: HashSet<_> = seed_requests().into_iter().map(|r| r.id).collect();
        let evidence: HashSet<_> = seed_evidence().into_iter().map(|e| e.id).collect();
        assert_eq!(projects.len(), 3);
        assert_eq!(requests.len(), 6);
        assert_eq!(evidence.len(), 3);
    }

    #[test]
    fn seed_cross_references_resolve() {
        let projects = seed_projects();
        let evidence = seed_evidence();
        for request in seed_requests() {
            assert!(
                projects.iter().any(|p| p.id == request.project_id),
                "unknown project {}",
                request.project_id
            );
            for evidence_id in &request.related_evidence_ids {
                assert!(
                    evidence.iter().any(|e| &e.id == evidence_id),
                    "unknown evidence {evidence_id}"
                );
            }
        }
    }
}
