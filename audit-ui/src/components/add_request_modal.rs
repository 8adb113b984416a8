use audit_core::model::{self, AuditProject, Evidence, RequestDraft};
use leptos::*;

#[component]
pub fn AddRequestModal(
    open: RwSignal<bool>,
    #[prop(into)] on_save: Callback<RequestDraft>,
    projects: Signal<Vec<AuditProject>>,
    evidence: Signal<Vec<Evidence>>,
) -> impl IntoView {
    let project_id = create_rw_signal(String::new());
    let date = create_rw_signal(String::new());
    let unit = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let deadline = create_rw_signal(String::new());
    let pic = create_rw_signal(String::new());
    let related = create_rw_signal(Vec::<String>::new());
    let error = create_rw_signal(None::<String>);

    let reset = move || {
        project_id.set(String::new());
        date.set(String::new());
        unit.set(String::new());
        description.set(String::new());
        deadline.set(String::new());
        pic.set(String::new());
        related.set(Vec::new());
        error.set(None);
    };

    let cancel = move |_| {
        reset();
        open.set(false);
    };

    let toggle_evidence = move |id: String, checked: bool| {
        related.update(|ids| {
            if checked {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            } else {
                ids.retain(|existing| existing != &id);
            }
        });
    };

    let save = move |_| {
        let draft = RequestDraft {
            project_id: project_id.get_untracked(),
            date: date.get_untracked().trim().to_string(),
            unit: unit.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            deadline: deadline.get_untracked().trim().to_string(),
            pic: pic.get_untracked().trim().to_string(),
            related_evidence_ids: related.get_untracked(),
        };
        match model::validate_request_draft(&draft) {
            Ok(()) => {
                reset();
                on_save.call(draft);
            }
            Err(e) => error.set(Some(e)),
        }
    };

    view! {
      <Show when=move || open.get() fallback=|| ()>
        <div class="modal-backdrop">
          <div class="modal">
            <h3>"Permintaan Data Baru"</h3>
            <div class="stack">
              <select
                prop:value=move || project_id.get()
                on:change=move |ev| project_id.set(event_target_value(&ev))
              >
                <option value="">"Pilih proyek"</option>
                <For
                  each=move || projects.get()
                  key=|p| p.id.clone()
                  children=move |p| {
                      view! { <option value=p.id.clone()>{p.name.clone()}</option> }
                  }
                />
              </select>
              <label class="field">
                "Tanggal permintaan"
                <input
                  type="date"
                  prop:value=move || date.get()
                  on:input=move |ev| date.set(event_target_value(&ev))
                />
              </label>
              <input
                prop:value=move || unit.get()
                on:input=move |ev| unit.set(event_target_value(&ev))
                placeholder="Unit tujuan"
              />
              <input
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
                placeholder="Deskripsi permintaan"
              />
              <label class="field">
                "Deadline"
                <input
                  type="date"
                  prop:value=move || deadline.get()
                  on:input=move |ev| deadline.set(event_target_value(&ev))
                />
              </label>
              <input
                prop:value=move || pic.get()
                on:input=move |ev| pic.set(event_target_value(&ev))
                placeholder="PIC"
              />

              <span class="meta">"Bukti terkait (opsional)"</span>
              <div class="check-list">
                <For
                  each=move || evidence.get()
                  key=|e| e.id.clone()
                  children=move |e| {
                      let toggle_id = e.id.clone();
                      let checked_id = e.id.clone();
                      let label = format!("{} ({})", e.description, e.id);
                      view! {
                        <label class="check">
                          <input
                            type="checkbox"
                            prop:checked=move || related.get().contains(&checked_id)
                            on:change=move |ev| {
                                toggle_evidence(
                                    toggle_id.clone(),
                                    event_target_checked(&ev),
                                )
                            }
                          />
                          {label}
                        </label>
                      }
                  }
                />
              </div>
            </div>
            <Show when=move || error.get().is_some() fallback=|| ()>
              <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="row">
              <button on:click=cancel>"Batal"</button>
              <button class="primary" on:click=save>"Simpan"</button>
            </div>
          </div>
        </div>
      </Show>
    }
}
