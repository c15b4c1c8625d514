use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::Document;

use crate::auth_panel::AuthPanel;
use crate::conf::{AuthConf, PageConf, ToggleConf};
use crate::error::MountError;
use crate::store::BrowserStore;
use crate::toggle::ThemeToggle;

/// Listeners attached to page markup. Dropping this detaches them.
#[must_use]
pub struct Mounted {
    listeners: Vec<EventListener>,
}

impl Mounted {
    /// Keeps the listeners attached for the rest of the page's life.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

fn click_options(prevent_default: bool) -> EventListenerOptions {
    if prevent_default {
        EventListenerOptions::enable_prevent_default()
    } else {
        EventListenerOptions::default()
    }
}

pub fn when_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let document = gloo_utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}

pub fn page_conf(document: &Document) -> PageConf {
    let raw = document
        .get_element_by_id(PageConf::ELEMENT_ID)
        .and_then(|element| element.text_content());
    PageConf::derive(raw.as_deref())
}

pub fn mount_theme_toggle(document: &Document, conf: &ToggleConf) -> Result<Mounted, MountError> {
    let toggle = ThemeToggle::locate(document, BrowserStore, conf)?;
    let control = toggle.control().clone();
    let prevent_default = conf.prevent_default;
    let toggle = Rc::new(RefCell::new(toggle));

    let listener = EventListener::new_with_options(
        &control,
        "click",
        click_options(prevent_default),
        move |event| {
            if prevent_default {
                event.prevent_default();
            }
            toggle.borrow_mut().on_toggle_clicked();
        },
    );

    tracing::debug!(toggle_id = %conf.toggle_id, "theme toggle mounted");
    Ok(Mounted {
        listeners: vec![listener],
    })
}

pub fn mount_auth_panel(document: &Document, conf: &AuthConf) -> Result<Mounted, MountError> {
    let (panel, triggers) = AuthPanel::locate(document, conf)?;
    let panel = Rc::new(RefCell::new(panel));

    let listeners = triggers
        .into_iter()
        .map(|trigger| {
            let panel = panel.clone();
            let (target, prevent_default) = (trigger.panel, trigger.prevent_default);
            EventListener::new_with_options(
                &trigger.element,
                "click",
                click_options(prevent_default),
                move |event| {
                    if prevent_default {
                        event.prevent_default();
                    }
                    panel.borrow_mut().show(target);
                },
            )
        })
        .collect::<Vec<_>>();

    tracing::debug!(triggers = listeners.len(), "auth panel mounted");
    Ok(Mounted { listeners })
}
