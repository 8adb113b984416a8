use audit_core::model::{AuditProject, AuditRequest};
use audit_core::summary;
use chrono::NaiveDate;
use leptos::*;

fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

#[component]
pub fn Dashboard(
    projects: Signal<Vec<AuditProject>>,
    requests: Signal<Vec<AuditRequest>>,
) -> impl IntoView {
    let counts = Signal::derive(move || summary::status_counts(&requests.get()));
    let upcoming = Signal::derive(move || match today() {
        Some(today) => summary::upcoming_deadlines(&requests.get(), today),
        None => Vec::new(),
    });

    view! {
      <section class="panel">
        <h2>"Ringkasan"</h2>
        <div class="tiles">
          <div class="tile">
            <span class="tile-value">{move || projects.get().len()}</span>
            <span class="tile-label">"Proyek"</span>
          </div>
          <div class="tile">
            <span class="tile-value">{move || counts.get().total()}</span>
            <span class="tile-label">"Permintaan"</span>
          </div>
          <div class="tile neutral">
            <span class="tile-value">{move || counts.get().not_started}</span>
            <span class="tile-label">"Not Started"</span>
          </div>
          <div class="tile warn">
            <span class="tile-value">{move || counts.get().near_deadline}</span>
            <span class="tile-label">"Near Deadline"</span>
          </div>
          <div class="tile danger">
            <span class="tile-value">{move || counts.get().overdue}</span>
            <span class="tile-label">"Overdue"</span>
          </div>
          <div class="tile ok">
            <span class="tile-value">{move || counts.get().fulfilled}</span>
            <span class="tile-label">"Fulfilled"</span>
          </div>
        </div>

        <h3>"Deadline 7 Hari ke Depan"</h3>
        <Show
          when=move || !upcoming.get().is_empty()
          fallback=|| view! { <p class="meta">"Tidak ada deadline dalam waktu dekat."</p> }
        >
          <table>
            <thead>
              <tr>
                <th>"ID"</th>
                <th>"Proyek"</th>
                <th>"Deskripsi"</th>
                <th>"Unit"</th>
                <th>"PIC"</th>
                <th>"Deadline"</th>
              </tr>
            </thead>
            <tbody>
              <For
                each=move || upcoming.get()
                key=|r| r.id.clone()
                children=move |r| {
                    let project_id = r.project_id.clone();
                    let project = move || {
                        summary::project_name(&projects.get(), &project_id)
                            .unwrap_or("-")
                            .to_string()
                    };
                    view! {
                      <tr>
                        <td>{r.id.clone()}</td>
                        <td>{project}</td>
                        <td>{r.description.clone()}</td>
                        <td>{r.unit.clone()}</td>
                        <td>{r.pic.clone()}</td>
                        <td>{r.deadline.clone()}</td>
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
