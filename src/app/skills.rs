use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::content::{slug, Skill, SkillCategory, SKILLS, SKILLS_ID};

use super::sections::SectionTitle;

/// Stagger between bars in one category, and between categories.
const BAR_STAGGER_MS: u32 = 50;
const CATEGORY_STAGGER_MS: u32 = 200;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SKILLS_ID class="relative">
            <div class="max-w-6xl mx-auto px-6 py-24">
                <SectionTitle icon="⚙" title="Technical Skills" />
                <div class="mt-12 space-y-12">
                    {SKILLS
                        .iter()
                        .zip(0..)
                        .map(|(category, i)| {
                            view! {
                                <Category category={*category} delay_ms={i * CATEGORY_STAGGER_MS} />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Category(category: SkillCategory, delay_ms: u32) -> impl IntoView {
    view! {
        <div data-testid=format!("skill-category-{}", slug(category.title))>
            <h3 class="text-2xl font-bold mb-6">{category.title}</h3>
            <div class="grid md:grid-cols-2 gap-6">
                {category
                    .skills
                    .iter()
                    .zip(0..)
                    .map(|(skill, i)| {
                        view! { <SkillBar skill={*skill} delay_ms={delay_ms + i * BAR_STAGGER_MS} /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Bar that fills to the skill level the first time it scrolls into view.
#[component]
fn SkillBar(skill: Skill, delay_ms: u32) -> impl IntoView {
    let bar_ref = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(bar_ref);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });

    let width = move || if revealed.get() { skill.level } else { 0 };

    view! {
        <div
            node_ref=bar_ref
            class="space-y-2"
            data-testid=format!("skill-bar-{}", slug(skill.name))
        >
            <div class="flex justify-between items-center">
                <span class="text-sm font-medium">{skill.name}</span>
                <span class="text-xs text-muted">{move || format!("{}%", width())}</span>
            </div>
            <div class="h-2 bg-muted/30 rounded-full overflow-hidden">
                <div
                    class="h-full bg-primary rounded-full transition-all duration-1000 ease-out"
                    style=move || format!("width: {}%; transition-delay: {delay_ms}ms", width())
                ></div>
            </div>
        </div>
    }
}
