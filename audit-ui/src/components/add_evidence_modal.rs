use audit_core::model::{self, EvidenceDraft, ValidityStatus};
use leptos::*;

const VALIDITY_OPTIONS: [(&str, &str); 3] = [
    ("valid", "Valid"),
    ("needs-improvement", "Perlu Perbaikan"),
    ("invalid", "Tidak Valid"),
];

fn validity_from_key(key: &str) -> ValidityStatus {
    match key {
        "needs-improvement" => ValidityStatus::NeedsImprovement,
        "invalid" => ValidityStatus::Invalid,
        _ => ValidityStatus::Valid,
    }
}

#[component]
pub fn AddEvidenceModal(
    open: RwSignal<bool>,
    #[prop(into)] on_save: Callback<EvidenceDraft>,
) -> impl IntoView {
    let category = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let unit = create_rw_signal(String::new());
    let pic = create_rw_signal(String::new());
    let date_received = create_rw_signal(String::new());
    let validity = create_rw_signal("valid".to_string());
    let error = create_rw_signal(None::<String>);

    let reset = move || {
        category.set(String::new());
        description.set(String::new());
        unit.set(String::new());
        pic.set(String::new());
        date_received.set(String::new());
        validity.set("valid".to_string());
        error.set(None);
    };

    let cancel = move |_| {
        reset();
        open.set(false);
    };

    let save = move |_| {
        let draft = EvidenceDraft {
            category: category.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            unit: unit.get_untracked().trim().to_string(),
            pic: pic.get_untracked().trim().to_string(),
            date_received: date_received.get_untracked().trim().to_string(),
            validity: validity_from_key(&validity.get_untracked()),
        };
        match model::validate_evidence_draft(&draft) {
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
            <h3>"Bukti Baru"</h3>
            <div class="stack">
              <input
                prop:value=move || category.get()
                on:input=move |ev| category.set(event_target_value(&ev))
                placeholder="Kategori (Kebijakan, Prosedur, Catatan)"
              />
              <input
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
                placeholder="Deskripsi bukti"
              />
              <input
                prop:value=move || unit.get()
                on:input=move |ev| unit.set(event_target_value(&ev))
                placeholder="Unit pemilik"
              />
              <input
                prop:value=move || pic.get()
                on:input=move |ev| pic.set(event_target_value(&ev))
                placeholder="PIC"
              />
              <label class="field">
                "Tanggal diterima"
                <input
                  type="date"
                  prop:value=move || date_received.get()
                  on:input=move |ev| date_received.set(event_target_value(&ev))
                />
              </label>
              <select
                prop:value=move || validity.get()
                on:change=move |ev| validity.set(event_target_value(&ev))
              >
                {VALIDITY_OPTIONS
                    .into_iter()
                    .map(|(key, label)| view! { <option value=key>{label}</option> })
                    .collect_view()}
              </select>
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
