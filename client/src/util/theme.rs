//! Light/dark theme preference: resolve, apply, persist, and follow the OS.
//!
//! Reads the stored preference from `localStorage`, falling back to the
//! `prefers-color-scheme` media query. Applying a theme toggles the `dark`
//! class and sets `data-theme` on the `<html>` element, then writes the value
//! back under [`THEME_STORAGE_KEY`].
//!
//! DESIGN
//! ======
//! Browser access goes through the [`ThemeEnv`] capability, chosen once by
//! [`theme_env`]: the `web-sys` implementation in the hydrate build when a
//! window exists, otherwise [`NullThemeEnv`]. The store functions never check
//! for a browser themselves.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Storage or media-query failures fall back to
//! the light theme and a no-op subscription instead of surfacing errors.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const THEME_STORAGE_KEY: &str = "preferred-theme";
pub const DARK_CLASS: &str = "dark";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `"light"`/`"dark"` is unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Releases an OS theme listener.
pub type ReleaseFn = Box<dyn FnOnce()>;

/// Environment capabilities the theme store needs.
pub trait ThemeEnv {
    /// Read a persisted value, `None` when absent or storage is unavailable.
    fn read_storage(&self, key: &str) -> Option<String>;

    fn write_storage(&self, key: &str, value: &str);

    /// Whether the OS prefers a dark scheme, `None` without a media signal.
    fn prefers_dark(&self) -> Option<bool>;

    /// Mark the document root with `theme`. Returns `false` without a document.
    fn mark_document(&self, theme: Theme) -> bool;

    /// Register `on_change` for OS scheme changes (called with "is dark").
    /// Returns `None` when there is no signal source.
    fn watch_system_scheme(&self, on_change: Box<dyn Fn(bool)>) -> Option<ReleaseFn>;
}

/// Environment with no window: no storage, no document, no OS signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullThemeEnv;

impl ThemeEnv for NullThemeEnv {
    fn read_storage(&self, _key: &str) -> Option<String> {
        None
    }

    fn write_storage(&self, _key: &str, _value: &str) {}

    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn mark_document(&self, _theme: Theme) -> bool {
        false
    }

    fn watch_system_scheme(&self, _on_change: Box<dyn Fn(bool)>) -> Option<ReleaseFn> {
        None
    }
}

/// Handle for an OS theme subscription. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ThemeSubscription {
    release: Option<ReleaseFn>,
}

impl ThemeSubscription {
    fn noop() -> Self {
        Self { release: None }
    }

    /// Whether a real listener is registered.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

/// Resolve the theme to show: stored value, then OS preference, then light.
pub fn preferred_theme(env: &dyn ThemeEnv) -> Theme {
    if let Some(theme) = env.read_storage(THEME_STORAGE_KEY).as_deref().and_then(Theme::parse) {
        return theme;
    }
    env.prefers_dark().map_or(Theme::Light, Theme::from_dark)
}

/// Mark the document with `theme` and persist it. No-op without a document.
pub fn apply_theme(env: &dyn ThemeEnv, theme: Theme) {
    if env.mark_document(theme) {
        env.write_storage(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Call `callback` with the new theme whenever the OS scheme changes.
pub fn subscribe_to_system_theme(env: &dyn ThemeEnv, callback: impl Fn(Theme) + 'static) -> ThemeSubscription {
    let on_change = Box::new(move |dark: bool| callback(Theme::from_dark(dark)));
    match env.watch_system_scheme(on_change) {
        Some(release) => ThemeSubscription { release: Some(release) },
        None => ThemeSubscription::noop(),
    }
}

/// Inline script for `<head>` that applies the theme before first paint.
pub fn theme_init_script() -> String {
    format!(
        "(() => {{ try {{ \
         const stored = window.localStorage.getItem('{key}'); \
         const prefersDark = window.matchMedia('{query}').matches; \
         const theme = stored === 'dark' || stored === 'light' ? stored : prefersDark ? 'dark' : 'light'; \
         const root = document.documentElement; \
         root.classList.toggle('{class}', theme === 'dark'); \
         root.setAttribute('{attr}', theme); \
         window.localStorage.setItem('{key}', theme); \
         }} catch (error) {{ console.warn('unable to apply preferred theme', error); }} }})();",
        key = THEME_STORAGE_KEY,
        query = DARK_SCHEME_QUERY,
        class = DARK_CLASS,
        attr = THEME_ATTRIBUTE,
    )
}

/// Pick the environment for this build and context.
pub fn theme_env() -> Box<dyn ThemeEnv> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(env) = browser::BrowserThemeEnv::new() {
            return Box::new(env);
        }
    }
    Box::new(NullThemeEnv)
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{DARK_CLASS, DARK_SCHEME_QUERY, ReleaseFn, THEME_ATTRIBUTE, Theme, ThemeEnv};

    /// `web-sys` backed environment.
    pub struct BrowserThemeEnv {
        window: web_sys::Window,
    }

    impl BrowserThemeEnv {
        pub fn new() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }

        fn storage(&self) -> Option<web_sys::Storage> {
            self.window.local_storage().ok().flatten()
        }

        fn dark_query(&self) -> Option<web_sys::MediaQueryList> {
            self.window.match_media(DARK_SCHEME_QUERY).ok().flatten()
        }
    }

    impl ThemeEnv for BrowserThemeEnv {
        fn read_storage(&self, key: &str) -> Option<String> {
            self.storage()?.get_item(key).ok().flatten()
        }

        fn write_storage(&self, key: &str, value: &str) {
            if let Some(storage) = self.storage() {
                let _ = storage.set_item(key, value);
            }
        }

        fn prefers_dark(&self) -> Option<bool> {
            self.dark_query().map(|mq| mq.matches())
        }

        fn mark_document(&self, theme: Theme) -> bool {
            let Some(root) = self.window.document().and_then(|doc| doc.document_element()) else {
                return false;
            };
            let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            true
        }

        fn watch_system_scheme(&self, on_change: Box<dyn Fn(bool)>) -> Option<ReleaseFn> {
            let media = self.dark_query()?;
            let handler = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                move |event: web_sys::MediaQueryListEvent| on_change(event.matches()),
            );
            media
                .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
                .ok()?;
            Some(Box::new(move || {
                let _ = media.remove_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
                drop(handler);
            }))
        }
    }
}
