use audit_core::model;
use leptos::*;

#[component]
pub fn AddProjectModal(
    open: RwSignal<bool>,
    #[prop(into)] on_save: Callback<String>,
) -> impl IntoView {
    let name = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let reset = move || {
        name.set(String::new());
        error.set(None);
    };

    let cancel = move |_| {
        reset();
        open.set(false);
    };

    let save = move |_| {
        let value = name.get_untracked().trim().to_string();
        match model::validate_project_name(&value) {
            Ok(()) => {
                reset();
                on_save.call(value);
            }
            Err(e) => error.set(Some(e)),
        }
    };

    view! {
      <Show when=move || open.get() fallback=|| ()>
        <div class="modal-backdrop">
          <div class="modal">
            <h3>"Proyek Audit Baru"</h3>
            <div class="stack">
              <input
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
                placeholder="Nama proyek"
              />
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
