use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class put on the page root; tailwind's `dark:` variants key off it.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Glyph for the button that switches *away* from this theme.
    fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

/// Puts the theme signal in context, restoring the saved choice once hydrated.
pub fn provide_theme() -> RwSignal<Theme> {
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        Effect::watch(
            || (),
            move |_, _, _| theme.set(stored.get_untracked()),
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |t, _, _| set_stored.set(*t),
            false,
        );
    }

    theme
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    view! {
        <button
            class="w-9 h-9 rounded-md hover:bg-muted/20 transition-colors"
            aria-label="Toggle theme"
            data-testid="button-theme-toggle"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || theme.get().toggle_icon()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().class(), "dark");
    }
}
