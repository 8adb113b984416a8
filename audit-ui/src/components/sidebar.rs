use crate::app::View;
use leptos::*;

const NAV_ITEMS: [(View, &str, &str); 3] = [
    (View::Dashboard, "Dashboard", "DSH"),
    (View::Requests, "Permintaan Data", "PRM"),
    (View::Evidence, "Bank Bukti", "BKT"),
];

fn navigate(current_view: RwSignal<View>, view: View) {
    current_view.set(view);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(view.key());
    }
}

#[component]
pub fn Sidebar(current_view: RwSignal<View>, collapsed: RwSignal<bool>) -> impl IntoView {
    view! {
      <nav class="sidebar" class:collapsed=move || collapsed.get()>
        <div class="brand">
          {move || if collapsed.get() { "AT" } else { "Audit Tracker" }}
        </div>
        <ul>
          {NAV_ITEMS
              .into_iter()
              .map(|(view, label, short)| {
                  view! {
                    <li>
                      <button
                        class="nav-item"
                        class:active=move || current_view.get() == view
                        on:click=move |_| navigate(current_view, view)
                      >
                        {move || if collapsed.get() { short } else { label }}
                      </button>
                    </li>
                  }
              })
              .collect_view()}
        </ul>
        <button
          class="collapse-toggle"
          on:click=move |_| collapsed.update(|c| *c = !*c)
        >
          {move || if collapsed.get() { ">" } else { "<" }}
        </button>
      </nav>
    }
}
