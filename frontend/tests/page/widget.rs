use crate::helpers::{FakeElement, FakePage};
use notes_frontend::components::mode::ModeState;
use notes_frontend::conf::ToggleConf;
use notes_frontend::store::{MemoryStore, ModeStore};
use notes_frontend::toggle::ModeOwner;
use notes_frontend::Mode;
use yew::Callback;

fn attach(page: &FakePage, store: &MemoryStore) -> ModeOwner<FakeElement, MemoryStore> {
    ModeOwner::attach(page, store.clone(), &ToggleConf::default())
}

fn state(mode: Mode, conf: &ToggleConf) -> ModeState {
    ModeState::new(mode, conf, Callback::from(|()| ()))
}

#[test]
fn attaching_restores_the_page_without_writing() {
    let page = FakePage::notes_page();
    let store = MemoryStore::with("theme", "dark");

    let owner = attach(&page, &store);

    assert_eq!(owner.mode(), Mode::Dark);
    assert!(page.body_is_dark());
    assert_eq!(
        page.id(FakePage::SIGNUP_IMAGE).attr("src").as_deref(),
        Some("/static/img/register_dark.svg")
    );

    let fresh = MemoryStore::default();
    attach(&FakePage::notes_page(), &fresh);
    assert_eq!(fresh.load("theme"), None);
}

#[test]
fn toggle_persists_and_marks_the_page() {
    let page = FakePage::notes_page().without(FakePage::SIGNIN_IMAGE);
    let store = MemoryStore::default();
    let mut owner = attach(&page, &store);

    assert_eq!(owner.toggle(), Mode::Dark);

    assert!(page.body_is_dark());
    assert_eq!(
        page.id(FakePage::SIGNUP_IMAGE).attr("src").as_deref(),
        Some("/static/img/register_dark.svg")
    );
    assert_eq!(store.load("theme").as_deref(), Some("dark"));

    assert_eq!(owner.toggle(), Mode::Light);
    assert!(!page.body_is_dark());
    assert_eq!(store.load("theme").as_deref(), Some("light"));
}

#[test]
fn page_without_body_still_toggles_and_persists() {
    let page = FakePage::notes_page().without_body();
    let store = MemoryStore::default();
    let mut owner = attach(&page, &store);
    assert_eq!(owner.mode(), Mode::Light);

    owner.toggle();

    assert_eq!(owner.mode(), Mode::Dark);
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
    // no body means no marks at all, dependent images included
    assert_eq!(page.id(FakePage::SIGNIN_IMAGE).attr("src"), None);
}

#[test]
fn widget_state_offers_the_opposite_mode_after_a_toggle() {
    let conf = ToggleConf::default();
    let page = FakePage::notes_page();
    let store = MemoryStore::default();
    let mut owner = attach(&page, &store);

    let before = state(owner.mode(), &conf);
    assert_eq!(before.icon.alt, "Dark Mode");
    assert_eq!(before.icon.src, "/static/img/dark_mode.svg");

    owner.toggle();

    let after = state(owner.mode(), &conf);
    assert_eq!(after.mode, Mode::Dark);
    assert_eq!(after.icon.alt, "Light Mode");
    assert_eq!(after.icon.src, "/static/img/light_mode.svg");
}

#[test]
fn widget_state_carries_the_navigation_policy() {
    let mut conf = ToggleConf::default();
    assert!(state(Mode::Light, &conf).prevent_default);

    conf.prevent_default = false;
    assert!(!state(Mode::Light, &conf).prevent_default);
}
