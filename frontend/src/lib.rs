pub mod auth_panel;
pub mod components;
pub mod conf;
pub mod dom;
pub mod error;
pub mod mode;
pub mod page;
pub mod store;
pub mod telemetry;
pub mod toggle;

pub use auth_panel::{AuthPanel, Panel};
pub use conf::PageConf;
pub use error::{ConfError, MountError, StoreError};
pub use mode::Mode;
pub use store::{BrowserStore, MemoryStore, ModeStore};
pub use toggle::ThemeToggle;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn boot() {
    telemetry::TracingSubscriber::new().set_global_default();
    dom::when_ready(mount_page);
}

fn mount_page() {
    let document = gloo_utils::document();
    let conf = dom::page_conf(&document);

    match document.get_element_by_id(&conf.mode.widget_root_id) {
        Some(root) => components::mode::render_widget(root, conf.mode.clone()),
        None => match dom::mount_theme_toggle(&document, &conf.mode) {
            Ok(mounted) => mounted.forget(),
            Err(e) => tracing::info!(error = %e, "mode toggle is not active on this page"),
        },
    }

    match dom::mount_auth_panel(&document, &conf.auth) {
        Ok(mounted) => mounted.forget(),
        Err(e) => tracing::debug!(error = %e, "auth panel is not on this page"),
    }
}
