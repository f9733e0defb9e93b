use leptos::prelude::*;

use crate::portfolio::SkillIcon;

#[component]
pub fn GithubIcon() -> impl IntoView {
    view! { <i class="devicon-github-plain" aria-hidden="true"></i> }
}

#[component]
pub fn LinkedinIcon() -> impl IntoView {
    view! { <i class="devicon-linkedin-plain" aria-hidden="true"></i> }
}

#[component]
pub fn SkillGlyph(icon: SkillIcon) -> impl IntoView {
    view! { <i class=format!("{} text-xl", icon.devicon_class()) aria-hidden="true"></i> }
}

#[component]
pub fn EnvelopeIcon() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <rect
                x="3"
                y="5"
                width="18"
                height="14"
                rx="2"
                stroke="currentColor"
                stroke-width="1.5"
            />
            <path
                d="M3 7l9 6 9-6"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

#[component]
pub fn ChevronRight() -> impl IntoView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" class="text-slate-400" aria-hidden="true">
            <path
                d="M9 18l6-6-6-6"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
