//! Light/dark toggle button.
//!
//! On mount it resolves the preferred theme, applies it, and follows OS
//! scheme changes until the component is cleaned up. Clicking flips the
//! theme and persists it.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::util::theme::{Theme, ThemeSubscription, apply_theme, preferred_theme, subscribe_to_system_theme, theme_env};

/// Accessible label describing what a click will do.
pub fn toggle_label(current: Theme) -> &'static str {
    match current {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    }
}

pub fn toggle_icon(current: Theme) -> &'static str {
    if current.is_dark() { "☀" } else { "☾" }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    let subscription = StoredValue::new_local(None::<ThemeSubscription>);

    // Effects only run in the browser, so SSR keeps the default until hydration.
    Effect::new(move || {
        let env = theme_env();
        let initial = preferred_theme(env.as_ref());
        theme.set(initial);
        apply_theme(env.as_ref(), initial);

        let handle = subscribe_to_system_theme(env.as_ref(), move |next| {
            theme.set(next);
            apply_theme(theme_env().as_ref(), next);
        });
        subscription.set_value(Some(handle));
    });

    on_cleanup(move || {
        if let Some(Some(handle)) = subscription.try_update_value(Option::take) {
            handle.unsubscribe();
        }
    });

    let on_toggle = move |_| {
        let next = theme.get_untracked().toggled();
        theme.set(next);
        apply_theme(theme_env().as_ref(), next);
    };

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=on_toggle
            aria-label=move || toggle_label(theme.get())
            title=move || toggle_label(theme.get())
        >
            {move || toggle_icon(theme.get())}
        </button>
    }
}
