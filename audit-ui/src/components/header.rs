use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
      <header class="header">
        <h1>"Monitoring Permintaan Audit"</h1>
        <span class="meta">"Proyek, permintaan data, dan bukti dalam satu tempat"</span>
      </header>
    }
}
