mod app;

mod components {
    pub mod add_evidence_modal;
    pub mod add_project_modal;
    pub mod add_request_modal;
    pub mod dashboard;
    pub mod evidence_bank;
    pub mod header;
    pub mod request_list;
    pub mod sidebar;
}

use app::App;
use leptos::*;

fn main() {
    mount_to_body(App);
}
