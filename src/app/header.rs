use leptos::prelude::*;

use crate::portfolio::PROFILE;

use super::icons::{GithubIcon, LinkedinIcon};

#[component]
pub fn Header(recruiter_mode: Signal<bool>, on_toggle_recruiter: Callback<()>) -> impl IntoView {
    view! {
        <header class="flex flex-wrap items-center justify-between gap-4 fade-in-up">
            <div class="flex items-center gap-4">
                <div class="w-12 h-12 rounded-full bg-gradient-to-tr from-indigo-500 via-pink-500 to-yellow-400 flex items-center justify-center shadow-lg">
                    <span class="font-bold">{PROFILE.initial()}</span>
                </div>
                <div>
                    <h1 class="text-xl font-semibold">{PROFILE.name}</h1>
                    <p class="text-sm text-slate-300">
                        {PROFILE.title} " • " {PROFILE.location}
                    </p>
                </div>
            </div>

            <div class="flex items-center gap-3">
                <a
                    href=PROFILE.github
                    target="_blank"
                    rel="noreferrer"
                    aria-label="Github"
                    class="p-2 rounded-lg hover:bg-slate-700/40 transition"
                >
                    <GithubIcon />
                </a>
                <a
                    href=PROFILE.linkedin
                    target="_blank"
                    rel="noreferrer"
                    aria-label="LinkedIn"
                    class="p-2 rounded-lg hover:bg-slate-700/40 transition"
                >
                    <LinkedinIcon />
                </a>
                <button
                    type="button"
                    aria-pressed=move || recruiter_mode.get().to_string()
                    on:click=move |_| on_toggle_recruiter.run(())
                    class=move || {
                        if recruiter_mode.get() {
                            "ml-2 px-3 py-1 rounded-full text-sm font-medium transition bg-emerald-500 text-black"
                        } else {
                            "ml-2 px-3 py-1 rounded-full text-sm font-medium transition bg-slate-700/30"
                        }
                    }
                >
                    "Recruiter Mode"
                </button>
            </div>
        </header>
    }
}
