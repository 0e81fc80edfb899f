use leptos::prelude::*;
use leptos_use::use_window_scroll;

/// Vertical offset, in pixels, past which the button shows.
const SHOW_AFTER_PX: f64 = 500.0;

fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let (_, y) = use_window_scroll();
    let show = move || past_threshold(y.get());

    view! {
        <Show when=show>
            <button
                class="fixed bottom-8 right-8 z-50 w-10 h-10 rounded-full shadow-lg bg-primary text-background"
                aria-label="Scroll to top"
                data-testid="button-scroll-top"
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            >
                "↑"
            </button>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_past_threshold() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(500.0));
        assert!(past_threshold(500.5));
        assert!(past_threshold(2400.0));
    }
}
