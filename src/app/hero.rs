use std::{rc::Rc, time::Duration};

use leptos::prelude::*;

use crate::content::{
    anchor, ABOUT_ID, CONTACTS, NAME, PROFILE_IMAGE, PROJECTS_ID, RESUME_HREF, ROLES, SUMMARY,
};
use crate::cycler::{CyclerDriver, RoleCycler, Scheduler};

use super::sections::ContactIcon;

/// Schedules cycler ticks with `window.setTimeout`.
struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(callback, delay)
            .map_err(|e| log::warn!("setTimeout failed: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center pt-20 px-6">
            <div class="max-w-7xl w-full mx-auto">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <div>
                            <p class="text-primary font-medium mb-2" data-testid="text-greeting">
                                "Hi, my name is"
                            </p>
                            <h1 class="text-5xl md:text-7xl font-bold mb-4" data-testid="text-name">
                                {NAME}
                            </h1>
                            <div class="h-16 flex items-center">
                                <h2
                                    class="text-3xl md:text-4xl font-medium text-muted"
                                    data-testid="text-role"
                                >
                                    <TypedRole roles=ROLES />
                                    <span class="animate-pulse">"|"</span>
                                </h2>
                            </div>
                        </div>
                        <p class="text-lg text-muted max-w-xl" data-testid="text-summary">
                            {SUMMARY}
                        </p>
                        <div class="flex flex-wrap gap-4">
                            <a
                                href=anchor(PROJECTS_ID)
                                class="px-6 py-3 rounded-md font-medium bg-primary text-background"
                                data-testid="button-view-projects"
                            >
                                "View Projects ↗"
                            </a>
                            <a
                                href=RESUME_HREF
                                download="M.MUDDASSIR-Resume.pdf"
                                class="px-6 py-3 rounded-md font-medium border border-muted/50"
                                data-testid="button-download-resume"
                            >
                                "⤓ Download Resume"
                            </a>
                        </div>
                        <div class="flex gap-4 pt-4">
                            {CONTACTS
                                .iter()
                                .filter(|c| c.kind.is_external() || c.href.starts_with("mailto:"))
                                .map(|c| {
                                    let (target, rel) = if c.kind.is_external() {
                                        (Some("_blank"), Some("noopener noreferrer"))
                                    } else {
                                        (None, None)
                                    };
                                    view! {
                                        <a
                                            href=c.href
                                            target=target
                                            rel=rel
                                            class="text-2xl hover:text-primary"
                                            aria-label=c.label
                                        >
                                            <ContactIcon icon=c.kind.icon() />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="relative flex justify-center">
                        <div class="absolute inset-0 bg-primary/20 rounded-2xl blur-3xl animate-pulse"></div>
                        <img
                            src=PROFILE_IMAGE
                            alt=NAME
                            class="relative w-80 h-80 md:w-96 md:h-96 object-cover rounded-2xl shadow-2xl"
                            data-testid="img-profile"
                        />
                    </div>
                </div>
                <a
                    href=anchor(ABOUT_ID)
                    class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-muted"
                    aria-label="Scroll to about"
                >
                    "⌄"
                </a>
            </div>
        </section>
    }
}

/// Role label that types itself out, pauses, and deletes, looping over `roles`.
///
/// The animation only runs in the browser: the server renders an empty label.
#[component]
pub fn TypedRole(roles: &'static [&'static str]) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    Effect::new(move |_| {
        let cycler = match RoleCycler::new(roles.iter().copied()) {
            Ok(cycler) => cycler,
            Err(e) => {
                log::error!("hero role labels rejected: {e}");
                return;
            }
        };
        let driver = CyclerDriver::start(cycler, Rc::new(BrowserScheduler), move |t: &str| {
            set_text.set(t.to_owned())
        });
        let driver = StoredValue::new_local(driver);
        on_cleanup(move || {
            driver.try_with_value(CyclerDriver::dispose);
        });
    });

    view! { <span>{text}</span> }
}
