use super::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

// =============================================================
// FakeThemeEnv
// =============================================================

type Listeners = Rc<RefCell<Vec<(usize, Rc<dyn Fn(bool)>)>>>;

#[derive(Default)]
struct FakeThemeEnv {
    storage: RefCell<HashMap<String, String>>,
    prefers_dark: Option<bool>,
    has_document: bool,
    has_media: bool,
    marked: RefCell<Vec<Theme>>,
    listeners: Listeners,
    next_id: Cell<usize>,
}

impl FakeThemeEnv {
    fn browser(prefers_dark: bool) -> Self {
        Self { prefers_dark: Some(prefers_dark), has_document: true, has_media: true, ..Self::default() }
    }

    fn with_stored(self, value: &str) -> Self {
        self.storage.borrow_mut().insert(THEME_STORAGE_KEY.to_owned(), value.to_owned());
        self
    }

    fn stored(&self) -> Option<String> {
        self.storage.borrow().get(THEME_STORAGE_KEY).cloned()
    }

    fn emit_system_change(&self, dark: bool) {
        let listeners: Vec<_> = self.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(dark);
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ThemeEnv for FakeThemeEnv {
    fn read_storage(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    fn write_storage(&self, key: &str, value: &str) {
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn mark_document(&self, theme: Theme) -> bool {
        if self.has_document {
            self.marked.borrow_mut().push(theme);
        }
        self.has_document
    }

    fn watch_system_scheme(&self, on_change: Box<dyn Fn(bool)>) -> Option<ReleaseFn> {
        if !self.has_media {
            return None;
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(on_change)));
        let listeners = self.listeners.clone();
        Some(Box::new(move || listeners.borrow_mut().retain(|(existing, _)| *existing != id)))
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
}

// =============================================================
// preferred_theme
// =============================================================

#[test]
fn preferred_theme_uses_stored_value_first() {
    let env = FakeThemeEnv::browser(true).with_stored("light");
    assert_eq!(preferred_theme(&env), Theme::Light);
}

#[test]
fn preferred_theme_falls_back_to_os_when_stored_value_unrecognized() {
    let env = FakeThemeEnv::browser(true).with_stored("purple");
    assert_eq!(preferred_theme(&env), Theme::Dark);

    let env = FakeThemeEnv::browser(false);
    assert_eq!(preferred_theme(&env), Theme::Light);
}

#[test]
fn preferred_theme_defaults_to_light_without_environment() {
    assert_eq!(preferred_theme(&NullThemeEnv), Theme::Light);
}

// =============================================================
// apply_theme
// =============================================================

#[test]
fn apply_theme_marks_document_and_persists() {
    let env = FakeThemeEnv::browser(false);
    apply_theme(&env, Theme::Dark);
    assert_eq!(*env.marked.borrow(), vec![Theme::Dark]);
    assert_eq!(env.stored().as_deref(), Some("dark"));

    apply_theme(&env, Theme::Dark);
    assert_eq!(env.stored().as_deref(), Some("dark"));

    apply_theme(&env, Theme::Light);
    assert_eq!(env.stored().as_deref(), Some("light"));
}

#[test]
fn apply_theme_is_noop_without_document() {
    let env = FakeThemeEnv { has_media: true, ..FakeThemeEnv::default() };
    apply_theme(&env, Theme::Dark);
    assert!(env.marked.borrow().is_empty());
    assert_eq!(env.stored(), None);

    apply_theme(&NullThemeEnv, Theme::Dark);
}

// =============================================================
// subscribe_to_system_theme
// =============================================================

#[test]
fn subscription_delivers_resolved_theme_until_unsubscribed() {
    let env = FakeThemeEnv::browser(false);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let subscription = subscribe_to_system_theme(&env, move |theme| sink.borrow_mut().push(theme));
    assert!(subscription.is_active());

    env.emit_system_change(true);
    env.emit_system_change(false);
    assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);

    subscription.unsubscribe();
    assert_eq!(env.listener_count(), 0);
    env.emit_system_change(true);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let env = FakeThemeEnv::browser(false);
    {
        let _subscription = subscribe_to_system_theme(&env, |_| {});
        assert_eq!(env.listener_count(), 1);
    }
    assert_eq!(env.listener_count(), 0);
}

#[test]
fn unsubscribing_one_listener_keeps_others() {
    let env = FakeThemeEnv::browser(false);
    let first = subscribe_to_system_theme(&env, |_| {});
    let second = subscribe_to_system_theme(&env, |_| {});
    first.unsubscribe();
    assert_eq!(env.listener_count(), 1);
    drop(second);
    assert_eq!(env.listener_count(), 0);
}

#[test]
fn subscription_without_signal_source_is_noop() {
    let subscription = subscribe_to_system_theme(&NullThemeEnv, |_| panic!("never called"));
    assert!(!subscription.is_active());
    subscription.unsubscribe();
}

// =============================================================
// toggle flow
// =============================================================

#[test]
fn toggle_then_os_change_overrides_and_reapplies() {
    let env = Rc::new(FakeThemeEnv::browser(false));
    let active = Rc::new(Cell::new(preferred_theme(env.as_ref())));
    apply_theme(env.as_ref(), active.get());

    let env_for_sub = env.clone();
    let active_for_sub = active.clone();
    let _subscription = subscribe_to_system_theme(env.as_ref(), move |theme| {
        active_for_sub.set(theme);
        apply_theme(env_for_sub.as_ref(), theme);
    });

    active.set(active.get().toggled());
    apply_theme(env.as_ref(), active.get());
    assert_eq!(active.get(), Theme::Dark);
    assert_eq!(env.stored().as_deref(), Some("dark"));

    env.emit_system_change(false);
    assert_eq!(active.get(), Theme::Light);
    assert_eq!(env.stored().as_deref(), Some("light"));
}

// =============================================================
// init script / environment selection
// =============================================================

#[test]
fn init_script_uses_shared_key_class_and_attribute() {
    let script = theme_init_script();
    assert!(script.contains("'preferred-theme'"));
    assert!(script.contains("(prefers-color-scheme: dark)"));
    assert!(script.contains("classList.toggle('dark'"));
    assert!(script.contains("setAttribute('data-theme'"));
}

#[test]
fn theme_env_is_null_outside_browser() {
    let env = theme_env();
    assert_eq!(env.prefers_dark(), None);
    assert!(!env.mark_document(Theme::Dark));
}
