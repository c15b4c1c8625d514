use crate::helpers::{load_page, FakePage};
use notes_frontend::conf::ToggleConf;
use notes_frontend::page::PageElement;
use notes_frontend::store::{MemoryStore, ModeStore};
use notes_frontend::{Mode, MountError, StoreError, ThemeToggle};

#[test]
fn fresh_visitor_gets_light_mode() {
    let page = FakePage::notes_page();
    let store = MemoryStore::default();

    let toggle = load_page(&page, &store);

    assert_eq!(toggle.mode(), Mode::Light);
    assert!(!page.body_is_dark());
    assert_eq!(page.icon_label().as_deref(), Some("Dark Mode"));
    assert_eq!(
        page.id(FakePage::ICON).attr("src").as_deref(),
        Some("/static/img/dark_mode.svg")
    );
    // loading never writes the mode back
    assert_eq!(store.load("theme"), None);
}

#[test]
fn stored_dark_mode_is_restored_on_load() {
    let page = FakePage::notes_page();
    let store = MemoryStore::with("theme", "dark");

    let toggle = load_page(&page, &store);

    assert_eq!(toggle.mode(), Mode::Dark);
    assert!(page.body_is_dark());
    assert_eq!(page.icon_label().as_deref(), Some("Light Mode"));
    assert_eq!(
        page.id(FakePage::SIGNIN_IMAGE).attr("src").as_deref(),
        Some("/static/img/log_dark.svg")
    );
    assert_eq!(
        page.id(FakePage::SIGNUP_IMAGE).attr("src").as_deref(),
        Some("/static/img/register_dark.svg")
    );
}

#[test]
fn unexpected_stored_values_load_as_light() {
    for value in ["light", "DARK", "", "1", "{\"mode\":\"dark\"}"] {
        let page = FakePage::notes_page();
        let store = MemoryStore::with("theme", value);

        let toggle = load_page(&page, &store);

        assert_eq!(toggle.mode(), Mode::Light, "{value:?}");
        assert!(!page.body_is_dark(), "{value:?}");
        assert_eq!(page.icon_label().as_deref(), Some("Dark Mode"), "{value:?}");
        assert_eq!(store.load("theme").as_deref(), Some(value));
    }
}

#[test]
fn one_click_from_light_switches_to_dark() {
    let page = FakePage::notes_page();
    let store = MemoryStore::default();
    let mut toggle = load_page(&page, &store);

    assert_eq!(toggle.on_toggle_clicked(), Mode::Dark);

    assert!(page.body_is_dark());
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
    assert_eq!(page.icon_label().as_deref(), Some("Light Mode"));
}

#[test]
fn two_clicks_from_dark_restore_dark() {
    let page = FakePage::notes_page();
    let store = MemoryStore::with("theme", "dark");
    let mut toggle = load_page(&page, &store);
    let before = page.snapshot(&store);

    toggle.on_toggle_clicked();
    toggle.on_toggle_clicked();

    assert_eq!(page.snapshot(&store), before);
    assert_eq!(page.icon_label().as_deref(), Some("Light Mode"));
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
}

#[test]
fn two_clicks_from_stored_light_restore_light() {
    let page = FakePage::notes_page();
    let store = MemoryStore::with("theme", "light");
    let mut toggle = load_page(&page, &store);
    let before = page.snapshot(&store);

    toggle.on_toggle_clicked();
    assert_ne!(page.snapshot(&store), before);
    toggle.on_toggle_clicked();

    assert_eq!(page.snapshot(&store), before);
}

#[test]
fn two_clicks_from_empty_store_restore_the_page_and_leave_light_stored() {
    let page = FakePage::notes_page();
    let store = MemoryStore::default();
    let mut toggle = load_page(&page, &store);
    let before = page.snapshot(&store);
    assert_eq!(before.stored, None);

    toggle.on_toggle_clicked();
    toggle.on_toggle_clicked();

    let after = page.snapshot(&store);
    assert_eq!(toggle.mode(), Mode::Light);
    assert_eq!(after.body_dark, before.body_dark);
    assert_eq!(after.icon_src, before.icon_src);
    assert_eq!(after.icon_alt, before.icon_alt);
    assert_eq!(after.signin_image, before.signin_image);
    assert_eq!(after.signup_image, before.signup_image);
    assert_eq!(after.stored.as_deref(), Some("light"));
}

#[test]
fn reload_after_clicks_reproduces_the_page() {
    let store = MemoryStore::default();

    for clicks in 1..=3 {
        let page = FakePage::notes_page();
        let mut toggle = load_page(&page, &store);
        for _ in 0..clicks {
            toggle.on_toggle_clicked();
        }
        let after_clicks = page.snapshot(&store);

        let reloaded = FakePage::notes_page();
        let toggle_after_reload = load_page(&reloaded, &store);

        assert_eq!(toggle_after_reload.mode(), toggle.mode());
        assert_eq!(reloaded.snapshot(&store), after_clicks);
    }
}

#[test]
fn dependent_images_are_optional() {
    let pages = [
        FakePage::notes_page(),
        FakePage::notes_page().without(FakePage::SIGNIN_IMAGE),
        FakePage::notes_page().without(FakePage::SIGNUP_IMAGE),
        FakePage::notes_page()
            .without(FakePage::SIGNIN_IMAGE)
            .without(FakePage::SIGNUP_IMAGE),
    ];

    for page in pages {
        let store = MemoryStore::default();
        let mut toggle = load_page(&page, &store);

        toggle.on_toggle_clicked();

        assert!(page.body_is_dark());
        assert_eq!(page.icon_label().as_deref(), Some("Light Mode"));
        assert_eq!(store.load("theme").as_deref(), Some("dark"));

        let snapshot = page.snapshot(&store);
        assert!(snapshot
            .signin_image
            .as_deref()
            .map_or(true, |src| src == "/static/img/log_dark.svg"));
        assert!(snapshot
            .signup_image
            .as_deref()
            .map_or(true, |src| src == "/static/img/register_dark.svg"));
    }
}

#[test]
fn missing_required_elements_prevent_mounting() {
    let conf = ToggleConf::default();

    let cases = [
        (
            FakePage::notes_page().without(FakePage::TOGGLE),
            MountError::MissingElement(FakePage::TOGGLE.into()),
        ),
        (
            FakePage::notes_page().without(FakePage::ICON),
            MountError::MissingElement(FakePage::ICON.into()),
        ),
        (FakePage::notes_page().without_body(), MountError::MissingBody),
    ];

    for (page, expected) in cases {
        let store = MemoryStore::with("theme", "dark");
        let result = ThemeToggle::locate(&page, store.clone(), &conf);

        assert_eq!(result.err(), Some(expected));
        assert_eq!(store.load("theme").as_deref(), Some("dark"));
    }
}

#[test]
fn rejected_storage_still_flips_the_page() {
    let page = FakePage::notes_page();
    let store = MemoryStore::rejecting();
    let mut toggle = load_page(&page, &store);

    toggle.on_toggle_clicked();

    assert_eq!(toggle.mode(), Mode::Dark);
    assert!(page.body_is_dark());
    assert_eq!(store.load("theme"), None);
}

#[test]
fn unavailable_storage_loads_light_and_still_flips_the_page() {
    let page = FakePage::notes_page();
    let store = MemoryStore::unavailable();
    let mut toggle = load_page(&page, &store);
    assert_eq!(toggle.mode(), Mode::Light);

    assert_eq!(toggle.on_toggle_clicked(), Mode::Dark);

    assert!(page.body_is_dark());
    assert_eq!(page.icon_label().as_deref(), Some("Light Mode"));
    assert_eq!(store.save("theme", "dark"), Err(StoreError::Unavailable));
}

#[test]
fn configured_ids_and_key_are_honoured() {
    let conf = ToggleConf {
        storage_key: "notes-theme".into(),
        body_class: "night".into(),
        toggle_id: "modeButton".into(),
        icon_id: "modeIcon".into(),
        dependents: vec![],
        ..ToggleConf::default()
    };
    let page = FakePage::notes_page().with_id("modeButton").with_id("modeIcon");
    let store = MemoryStore::with("theme", "dark");

    let mut toggle = ThemeToggle::locate(&page, store.clone(), &conf).unwrap();
    assert_eq!(toggle.mode(), Mode::Light);

    toggle.on_toggle_clicked();

    assert_eq!(store.load("notes-theme").as_deref(), Some("dark"));
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
    let body = page.body.clone().unwrap();
    assert!(body.has_class("night"));
    assert!(!page.body_is_dark());
    assert_eq!(page.id("modeIcon").attr("alt").as_deref(), Some("Light Mode"));
    assert_eq!(page.id(FakePage::SIGNIN_IMAGE).attr("src"), None);
}
