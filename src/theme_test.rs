use super::*;

fn stored(state: &ThemeState<MemoryStore>) -> Option<String> {
    state.store().load("theme")
}

// --- Theme ---

#[test]
fn toggled_flips_mode() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn from_stored_only_accepts_light() {
    assert_eq!(Theme::from_stored("light"), Theme::Light);
    assert_eq!(Theme::from_stored("dark"), Theme::Dark);
    assert_eq!(Theme::from_stored("LIGHT"), Theme::Dark);
    assert_eq!(Theme::from_stored(""), Theme::Dark);
}

#[test]
fn toggle_view_describes_next_action() {
    let light = Theme::Light.toggle_view();
    assert_eq!(light.pressed, "true");
    assert_eq!(light.title, "Switch to dark theme");
    assert_eq!(light.icon, "☀️");

    let dark = Theme::Dark.toggle_view();
    assert_eq!(dark.pressed, "false");
    assert_eq!(dark.title, "Switch to light theme");
    assert_eq!(dark.icon, "🌙");
}

// --- Initial resolution ---

#[test]
fn system_preference_used_without_stored_value() {
    assert_eq!(resolve_initial(None, Some(true)), Theme::Light);
    assert_eq!(resolve_initial(None, Some(false)), Theme::Dark);
}

#[test]
fn unknown_system_preference_defaults_to_dark() {
    assert_eq!(resolve_initial(None, None), Theme::Dark);
}

#[test]
fn stored_value_overrides_system_preference() {
    assert_eq!(resolve_initial(Some("dark"), Some(true)), Theme::Dark);
    assert_eq!(resolve_initial(Some("light"), Some(false)), Theme::Light);
    assert_eq!(resolve_initial(Some("light"), None), Theme::Light);
}

// --- ThemeState ---

#[test]
fn init_persists_resolved_theme() {
    let state = ThemeState::init(MemoryStore::new(), "theme", Some(true));
    assert_eq!(state.current(), Theme::Light);
    assert_eq!(stored(&state).as_deref(), Some("light"));
}

#[test]
fn init_reads_existing_preference() {
    let mut store = MemoryStore::new();
    store.save("theme", "light");
    let state = ThemeState::init(store, "theme", Some(false));
    assert_eq!(state.current(), Theme::Light);
}

#[test]
fn init_normalizes_garbage_preference() {
    let mut store = MemoryStore::new();
    store.save("theme", "sepia");
    let state = ThemeState::init(store, "theme", Some(true));
    assert_eq!(state.current(), Theme::Dark);
    assert_eq!(stored(&state).as_deref(), Some("dark"));
}

#[test]
fn double_toggle_restores_original_and_tracks_storage() {
    for prefers_light in [true, false] {
        let mut state = ThemeState::init(MemoryStore::new(), "theme", Some(prefers_light));
        let original = state.current();

        let once = state.toggle();
        assert_eq!(once, original.toggled());
        assert_eq!(stored(&state).as_deref(), Some(once.as_str()));

        let twice = state.toggle();
        assert_eq!(twice, original);
        assert_eq!(stored(&state).as_deref(), Some(original.as_str()));
    }
}

#[test]
fn setting_same_theme_is_idempotent() {
    let mut state = ThemeState::init(MemoryStore::new(), "theme", None);
    state.set(Theme::Dark);
    state.set(Theme::Dark);
    assert_eq!(state.current(), Theme::Dark);
    assert_eq!(stored(&state).as_deref(), Some("dark"));
}

#[test]
fn custom_key_is_respected() {
    let state = ThemeState::init(MemoryStore::new(), "folio-theme", Some(true));
    assert_eq!(state.store().load("folio-theme").as_deref(), Some("light"));
    assert_eq!(state.store().load("theme"), None);
}
