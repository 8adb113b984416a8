use crate::components::add_evidence_modal::AddEvidenceModal;
use crate::components::add_project_modal::AddProjectModal;
use crate::components::add_request_modal::AddRequestModal;
use crate::components::dashboard::Dashboard;
use crate::components::evidence_bank::EvidenceBank;
use crate::components::header::Header;
use crate::components::request_list::RequestList;
use crate::components::sidebar::Sidebar;
use audit_core::model::{EvidenceDraft, RequestDraft};
use audit_core::seed;
use audit_core::store::AuditStore;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Requests,
    Evidence,
}

impl View {
    /// Unrecognized keys (including the empty hash) land on the dashboard.
    pub fn from_key(key: &str) -> Self {
        match key {
            "permintaan" => View::Requests,
            "bukti" => View::Evidence,
            _ => View::Dashboard,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Requests => "permintaan",
            View::Evidence => "bukti",
        }
    }
}

fn initial_view() -> View {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    View::from_key(hash.trim_start_matches('#'))
}

#[component]
pub fn App() -> impl IntoView {
    let store = create_rw_signal(AuditStore::from_records(
        seed::seed_projects(),
        seed::seed_requests(),
        seed::seed_evidence(),
    ));

    let current_view = create_rw_signal(initial_view());
    let sidebar_collapsed = create_rw_signal(false);

    let add_project_open = create_rw_signal(false);
    let add_request_open = create_rw_signal(false);
    let add_evidence_open = create_rw_signal(false);

    let projects = Signal::derive(move || store.with(|s| s.projects().to_vec()));
    let requests = Signal::derive(move || store.with(|s| s.requests().to_vec()));
    let evidence = Signal::derive(move || store.with(|s| s.evidence().to_vec()));

    let add_project = Callback::new(move |name: String| {
        store.update(|s| {
            s.add_project(name);
        });
        add_project_open.set(false);
    });
    let add_request = Callback::new(move |draft: RequestDraft| {
        store.update(|s| {
            s.add_request(draft);
        });
        add_request_open.set(false);
    });
    let add_evidence = Callback::new(move |draft: EvidenceDraft| {
        store.update(|s| {
            s.add_evidence(draft);
        });
        add_evidence_open.set(false);
    });
    let delete_request = Callback::new(move |id: String| {
        store.update(|s| s.delete_request(&id));
    });
    let delete_evidence = Callback::new(move |id: String| {
        store.update(|s| s.delete_evidence(&id));
    });

    let open_add_project = Callback::new(move |_: ()| add_project_open.set(true));
    let open_add_request = Callback::new(move |_: ()| add_request_open.set(true));
    let open_add_evidence = Callback::new(move |_: ()| add_evidence_open.set(true));

    view! {
      <div class="layout">
        <Sidebar current_view=current_view collapsed=sidebar_collapsed/>
        <div class="content">
          <Header/>
          <main>
            {move || match current_view.get() {
                View::Dashboard => view! {
                  <Dashboard projects=projects requests=requests/>
                }
                .into_view(),
                View::Requests => view! {
                  <RequestList
                    projects=projects
                    requests=requests
                    evidence=evidence
                    on_add_project=open_add_project
                    on_add_request=open_add_request
                    on_delete=delete_request
                  />
                }
                .into_view(),
                View::Evidence => view! {
                  <EvidenceBank
                    evidence=evidence
                    on_add_evidence=open_add_evidence
                    on_delete=delete_evidence
                  />
                }
                .into_view(),
            }}
          </main>
        </div>

        <AddProjectModal open=add_project_open on_save=add_project/>
        <AddRequestModal
          open=add_request_open
          on_save=add_request
          projects=projects
          evidence=evidence
        />
        <AddEvidenceModal open=add_evidence_open on_save=add_evidence/>
      </div>
    }
}
