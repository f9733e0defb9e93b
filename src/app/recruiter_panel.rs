use leptos::{ev, prelude::*};

use crate::brief::{mailto_link, Brief, Score, BRIEF_MIME};
use crate::download::download_text;
use crate::portfolio::PROFILE;
use crate::view_state::ViewState;

use super::download::BrowserDownload;

/// Lets a recruiter score the candidate and download a one-page brief.
#[component]
pub fn RecruiterPanel(on_close: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let score = Memo::new(move |_| state.with(|s| s.score().unwrap_or_default()));

    let on_input = move |ev: ev::Event| {
        let raw = event_target_value(&ev);
        match Score::parse(&raw) {
            Ok(new_score) => {
                state.update(|s| {
                    s.adjust_score(new_score);
                });
            }
            Err(err) => log::warn!("ignoring slider input: {err}"),
        }
    };

    let export_brief = move |_| {
        let brief = Brief::new(&PROFILE, score.get_untracked());
        if let Err(err) = download_text(
            &BrowserDownload,
            &brief.file_name(),
            BRIEF_MIME,
            &brief.render(),
        ) {
            log::warn!("brief download failed: {err}");
        }
    };

    view! {
        <aside
            class="fixed right-6 bottom-6 z-50 w-96 max-w-[calc(100vw-3rem)] pop-in"
            aria-label="Recruiter quick brief"
        >
            <div class="bg-slate-900/95 p-4 rounded-xl shadow-xl border border-slate-700">
                <div class="flex items-start justify-between">
                    <div>
                        <h4 class="font-semibold">"Recruiter Quick Brief"</h4>
                        <p class="text-slate-400 text-sm">
                            "A compact snapshot you can download or share with hiring teams."
                        </p>
                    </div>
                    <div class="flex items-center gap-2">
                        <button
                            type="button"
                            on:click=move |_| on_close.run(())
                            class="text-sm px-2 py-1 rounded bg-slate-700/40"
                        >
                            "Close"
                        </button>
                    </div>
                </div>

                <div class="mt-4">
                    <label for="recruiter_score" class="text-sm text-slate-300">
                        "Adjust quick score"
                    </label>
                    <input
                        id="recruiter_score"
                        type="range"
                        min=Score::MIN.to_string()
                        max=Score::MAX.to_string()
                        prop:value=move || score.get().to_string()
                        on:input=on_input
                        class="w-full mt-2"
                    />
                    <div class="mt-2 text-slate-200">
                        "Score: " <strong>{move || score.get().to_string()}</strong>
                    </div>

                    <div class="mt-4 flex gap-2">
                        <button
                            type="button"
                            on:click=export_brief
                            class="px-3 py-2 bg-emerald-500 rounded"
                        >
                            "Download Brief"
                        </button>
                        <a href=mailto_link(&PROFILE) class="px-3 py-2 border rounded">
                            "Email Candidate"
                        </a>
                    </div>

                    <div class="mt-4 text-xs text-slate-400">
                        "Unique: recruiters can score & export a shareable one-page brief — speeds up shortlisting."
                    </div>
                </div>
            </div>
        </aside>
    }
}
