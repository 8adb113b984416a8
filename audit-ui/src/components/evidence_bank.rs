use audit_core::model::{Evidence, ValidityStatus};
use leptos::*;

fn validity_class(validity: ValidityStatus) -> &'static str {
    match validity {
        ValidityStatus::Valid => "ok",
        ValidityStatus::NeedsImprovement => "warn",
        ValidityStatus::Invalid => "danger",
    }
}

#[component]
pub fn EvidenceBank(
    evidence: Signal<Vec<Evidence>>,
    #[prop(into)] on_add_evidence: Callback<()>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
      <section class="panel">
        <div class="panel-head">
          <h2>"Bank Bukti"</h2>
          <button class="primary" on:click=move |_| on_add_evidence.call(())>
            "Bukti Baru"
          </button>
        </div>

        <Show
          when=move || !evidence.get().is_empty()
          fallback=|| view! { <p class="meta">"Belum ada bukti."</p> }
        >
          <table>
            <thead>
              <tr>
                <th>"ID"</th>
                <th>"Kategori"</th>
                <th>"Deskripsi"</th>
                <th>"Dokumen"</th>
                <th>"Unit"</th>
                <th>"PIC"</th>
                <th>"Tanggal Diterima"</th>
                <th>"Validitas"</th>
                <th></th>
              </tr>
            </thead>
            <tbody>
              <For
                each=move || evidence.get()
                key=|e| e.id.clone()
                children=move |e| {
                    let delete_id = e.id.clone();
                    view! {
                      <tr>
                        <td>{e.id.clone()}</td>
                        <td>{e.category.clone()}</td>
                        <td>{e.description.clone()}</td>
                        <td>
                          <a href=e.file_link.clone()>"Lihat"</a>
                        </td>
                        <td>{e.unit.clone()}</td>
                        <td>{e.pic.clone()}</td>
                        <td>{e.date_received.clone()}</td>
                        <td>
                          <span class=format!("badge {}", validity_class(e.validity))>
                            {e.validity.label()}
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
