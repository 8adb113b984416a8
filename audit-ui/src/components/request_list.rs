use audit_core::model::{AuditProject, AuditRequest, Evidence, RequestStatus};
use audit_core::summary::{self, RelatedEvidence};
use leptos::*;

fn status_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::NotStarted => "neutral",
        RequestStatus::NearDeadline => "warn",
        RequestStatus::Overdue => "danger",
        RequestStatus::Fulfilled => "ok",
    }
}

#[component]
pub fn RequestList(
    projects: Signal<Vec<AuditProject>>,
    requests: Signal<Vec<AuditRequest>>,
    evidence: Signal<Vec<Evidence>>,
    #[prop(into)] on_add_project: Callback<()>,
    #[prop(into)] on_add_request: Callback<()>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
      <section class="panel">
        <div class="panel-head">
          <h2>"Permintaan Data"</h2>
          <div class="row">
            <button on:click=move |_| on_add_project.call(())>"Proyek Baru"</button>
            <button class="primary" on:click=move |_| on_add_request.call(())>
              "Permintaan Baru"
            </button>
          </div>
        </div>

        <Show
          when=move || !requests.get().is_empty()
          fallback=|| view! { <p class="meta">"Belum ada permintaan."</p> }
        >
          <table>
            <thead>
              <tr>
                <th>"ID"</th>
                <th>"Proyek"</th>
                <th>"Tanggal"</th>
                <th>"Unit"</th>
                <th>"Deskripsi"</th>
                <th>"Deadline"</th>
                <th>"PIC"</th>
                <th>"Bukti"</th>
                <th>"Status"</th>
                <th></th>
              </tr>
            </thead>
            <tbody>
              <For
                each=move || requests.get()
                key=|r| r.id.clone()
                children=move |r| {
                    let delete_id = r.id.clone();
                    let project_id = r.project_id.clone();
                    let request_for_join = r.clone();
                    let project = move || {
                        summary::project_name(&projects.get(), &project_id)
                            .unwrap_or("-")
                            .to_string()
                    };
                    let related = move || {
                        let items =
                            summary::related_evidence(&request_for_join, &evidence.get());
                        if items.is_empty() {
                            return view! { <span class="meta">"-"</span> }.into_view();
                        }
                        items
                            .into_iter()
                            .map(|item| match item {
                                RelatedEvidence::Found(e) => view! {
                                  <span class="badge ok" title=e.description.clone()>
                                    {e.id.clone()}
                                  </span>
                                }
                                .into_view(),
                                RelatedEvidence::Missing(id) => view! {
                                  <span class="badge missing" title="Bukti sudah dihapus">
                                    {id}
                                  </span>
                                }
                                .into_view(),
                            })
                            .collect_view()
                            .into_view()
                    };
                    view! {
                      <tr>
                        <td>{r.id.clone()}</td>
                        <td>{project}</td>
                        <td>{r.date.clone()}</td>
                        <td>{r.unit.clone()}</td>
                        <td>{r.description.clone()}</td>
                        <td>{r.deadline.clone()}</td>
                        <td>{r.pic.clone()}</td>
                        <td class="evidence-cell">{related}</td>
                        <td>
                          <span class=format!("badge {}", status_class(r.status))>
                            {r.status.label()}
                          </span>
                        </td>
                        <td>
                          <button
                            class="danger"
                            on:click=move |_| on_delete.call(delete_id.clone())
                          >
                            "Hapus"
                          </button>
                        </td>
                      </tr>
                    }
                }
              />
            </tbody>
          </table>
        </Show>
      </section>
    }
}
