use leptos::prelude::*;

use crate::content::{NAV_ITEMS, SHORT_NAME};

use super::theme::ThemeToggle;

#[component]
pub fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-md border-b border-muted/30">
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <a href="#" class="text-xl font-bold">
                        {SHORT_NAME}
                    </a>

                    <div class="hidden md:flex items-center gap-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href()
                                        class="text-sm font-medium text-muted hover:text-foreground transition-colors"
                                        data-testid=format!("link-nav-{}", item.id)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>

                    <div class="flex items-center gap-2 md:hidden">
                        <ThemeToggle />
                        <button
                            class="w-9 h-9 rounded-md hover:bg-muted/20"
                            aria-label="Toggle menu"
                            data-testid="button-mobile-menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-background/95 backdrop-blur-lg border-b border-muted/30">
                    <div class="max-w-7xl mx-auto px-6 py-4 space-y-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href()
                                        class="block w-full text-left py-2 text-sm font-medium text-muted hover:text-foreground transition-colors"
                                        data-testid=format!("link-mobile-{}", item.id)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
