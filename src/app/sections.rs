use leptos::{either::Either, prelude::*};

use crate::content::{
    self, slug, Certification, Icon, Stat, ABOUT, ABOUT_ID, AWARD, CERTIFICATIONS, CONTACTS,
    CONTACT_BLURB, CONTACT_ID, EDUCATION, EDUCATION_ID, EXPERIENCE, EXPERIENCE_ID, NAME,
    PROJECTS, PROJECTS_ID, STATS,
};

#[component]
pub fn SectionTitle(icon: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 mb-8">
            <div class="p-2 bg-primary/10 rounded-lg text-primary text-2xl">{icon}</div>
            <h2 class="text-4xl md:text-5xl font-bold">{title}</h2>
        </div>
    }
}

/// Devicon font glyph or plain text glyph for a contact link.
#[component]
pub fn ContactIcon(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match icon {
        Icon::Devicon(name) => Either::Left(view! { <i class=format!("{class} {name}")></i> }),
        Icon::Glyph(glyph) => {
            Either::Right(view! { <span class=class aria-hidden="true">{glyph}</span> })
        }
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=ABOUT_ID class="relative">
            <div class="max-w-6xl mx-auto px-6 py-24">
                <SectionTitle icon="</>" title="About Me" />
                <div class="grid md:grid-cols-3 gap-6 mt-12">
                    {STATS.iter().map(|stat| view! { <StatCard stat={*stat} /> }).collect_view()}
                </div>
                <div class="mt-12 max-w-4xl mx-auto p-8 rounded-lg border border-muted/30">
                    <p class="text-lg leading-relaxed text-muted" data-testid="text-about">
                        {ABOUT}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    let id = slug(stat.label);
    view! {
        <div
            class="p-6 text-center rounded-lg border border-muted/30 transition-all"
            data-testid=format!("card-stat-{id}")
        >
            <div class="text-4xl font-bold text-primary mb-2">{stat.number}</div>
            <div class="text-sm text-muted">{stat.label}</div>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=EXPERIENCE_ID class="relative">
            <div class="max-w-6xl mx-auto px-6 py-24">
                <SectionTitle icon="💼" title="Professional Experience" />
                <div class="mt-12 space-y-8">
                    {EXPERIENCE
                        .iter()
                        .map(|job| view! { <ExperienceCard job={*job} /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(job: content::Experience) -> impl IntoView {
    let id = slug(job.company);
    view! {
        <div
            class="p-8 rounded-lg border border-muted/30 transition-all"
            data-testid=format!("card-experience-{id}")
        >
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4 mb-4">
                <div>
                    <h3 class="text-2xl font-bold mb-1">{job.role}</h3>
                    <p class="text-lg text-primary font-medium">{job.company}</p>
                </div>
                <div class="text-sm text-muted md:text-right">
                    <div>"📅 " {job.period}</div>
                    <div class="mt-1">"📍 " {job.location}</div>
                </div>
            </div>
            <p class="text-muted mb-4">{job.description}</p>
            <ul class="space-y-2">
                {job
                    .achievements
                    .iter()
                    .map(|a| {
                        view! {
                            <li class="flex items-start gap-2 text-sm text-muted">
                                <span class="text-primary">"▹"</span>
                                <span>{*a}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=PROJECTS_ID class="relative">
            <div class="max-w-6xl mx-auto px-6 py-24">
                <SectionTitle icon="</>" title="Featured Projects" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mt-12">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            let border = if project.highlight {
                                "border-primary/50"
                            } else {
                                "border-muted/30"
                            };
                            view! {
                                <div
                                    class=format!("p-6 h-full rounded-lg border transition-all {border}")
                                    data-testid=format!("card-project-{}", slug(project.title))
                                >
                                    <h3 class="text-xl font-bold mb-3">{project.title}</h3>
                                    <p class="text-muted mb-4 text-sm">{project.description}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {project
                                            .technologies
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-2 py-1 rounded-md bg-muted/20 font-mono text-xs">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id=EDUCATION_ID class="relative">
            <div class="max-w-6xl mx-auto px-6 py-24">
                <SectionTitle icon="🎓" title="Education & Certifications" />
                <div class="grid md:grid-cols-2 gap-8 mt-12">
                    <div
                        class="p-8 h-full rounded-lg border border-muted/30"
                        data-testid="card-education"
                    >
                        <h3 class="text-xl font-bold mb-2">{EDUCATION.degree}</h3>
                        <p class="text-muted mb-4">{EDUCATION.major}</p>
                        <p class="text-sm text-muted">{EDUCATION.school}</p>
                        <p class="text-sm text-muted">{EDUCATION.details}</p>
                    </div>
                    <div class="space-y-4">
                        {CERTIFICATIONS
                            .iter()
                            .map(|cert| view! { <CertificationCard cert={*cert} /> })
                            .collect_view()}
                    </div>
                </div>
                <div
                    class="mt-12 p-8 rounded-lg border border-primary/20 bg-primary/5"
                    data-testid="card-award"
                >
                    <h3 class="text-xl font-bold mb-2">"🏆 " {AWARD.title}</h3>
                    <p class="text-muted mb-2">{AWARD.organization}</p>
                    <p class="text-sm text-muted">{AWARD.details}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertificationCard(cert: Certification) -> impl IntoView {
    view! {
        <div
            class="p-6 rounded-lg border border-muted/30"
            data-testid=format!("card-cert-{}", slug(cert.issuer))
        >
            <h4 class="font-bold mb-1">{cert.title}</h4>
            <p class="text-sm text-muted">{format!("{} • {}", cert.issuer, cert.year)}</p>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=CONTACT_ID class="relative">
            <div class="max-w-6xl mx-auto px-6 py-24">
                <SectionTitle icon="✉" title="Get In Touch" />
                <div class="mt-12 max-w-2xl mx-auto text-center">
                    <p class="text-lg text-muted mb-8">{CONTACT_BLURB}</p>
                    <div class="grid md:grid-cols-2 gap-6">
                        {CONTACTS
                            .iter()
                            .map(|contact| {
                                let target = contact.kind.is_external().then_some("_blank");
                                let rel = contact
                                    .kind
                                    .is_external()
                                    .then_some("noopener noreferrer");
                                view! {
                                    <a
                                        href=contact.href
                                        target=target
                                        rel=rel
                                        class="block p-6 rounded-lg border border-muted/30 hover:border-primary/50 transition-all"
                                        data-testid=format!("card-contact-{}", slug(contact.label))
                                    >
                                        <div class="flex items-center gap-4">
                                            <ContactIcon
                                                icon=contact.kind.icon()
                                                class="text-2xl text-primary"
                                            />
                                            <div class="text-left">
                                                <p class="text-sm text-muted">{contact.label}</p>
                                                <p class="font-medium">{contact.value}</p>
                                            </div>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = env!("BUILD_YEAR");
    view! {
        <footer class="border-t border-muted/30 py-8">
            <div class="max-w-6xl mx-auto px-6 text-center">
                <p class="text-sm text-muted">{format!("© {year} {NAME}. Built with Rust & Leptos.")}</p>
            </div>
        </footer>
    }
}
