mod hero;
mod nav;
mod scroll;
mod sections;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{DEVICON_STYLESHEET, FAVICON, NAME};
use hero::Hero;
use nav::NavBar;
use scroll::ScrollTopButton;
use sections::{About, Contact, Education, Experience, Footer, Projects};
use skills::Skills;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" href=DEVICON_STYLESHEET />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Title text=NAME />
        <Meta name="description" content=format!("{NAME} - Software Engineer portfolio") />

        <Router>
            <div class=move || {
                format!("{} min-h-screen bg-background text-foreground", theme.get().class())
            }>
                <NavBar />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=PortfolioPage />
                    </Routes>
                </main>
                <Footer />
                <ScrollTopButton />
            </div>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Experience />
        <Projects />
        <Skills />
        <Education />
        <Contact />
    }
}
