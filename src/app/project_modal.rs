use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::portfolio::Project;

#[component]
pub fn ProjectModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    let metrics = project.metrics.to_pretty_json().unwrap_or_else(|err| {
        log::warn!("couldn't format metrics for {}: {err}", project.title);
        String::new()
    });
    let title_id = project.heading_id();
    let labelled_by = title_id.clone();

    view! {
        <div
            class="fixed inset-0 z-40 flex items-center justify-center p-6 fade-in"
            role="dialog"
            aria-modal="true"
            aria-labelledby=labelled_by
        >
            <div class="absolute inset-0 bg-black/70" on:click=move |_| on_close.run(()) />
            <div class="relative z-50 bg-slate-900 rounded-xl max-w-3xl w-full overflow-hidden shadow-2xl rise-in">
                <div class="grid md:grid-cols-2">
                    <div class="p-6">
                        <h3 id=title_id class="text-xl font-semibold">
                            {project.title}
                        </h3>
                        <p class="mt-3 text-slate-300">{project.description}</p>

                        <div class="mt-4 text-sm text-slate-400">
                            <strong>"Tech:"</strong>
                            " "
                            {project.tech_list()}
                        </div>

                        <div class="mt-4">
                            <a
                                href=project.link
                                class="px-3 py-2 bg-indigo-600 rounded hover:bg-indigo-500"
                            >
                                "View Project"
                            </a>
                        </div>

                        <div class="mt-6 text-sm text-slate-400">
                            <strong>"Metrics:"</strong>
                            <pre class="mt-2 bg-slate-800/20 p-2 rounded">{metrics}</pre>
                        </div>
                    </div>
                    <div class="p-6 bg-[url('https://placehold.co/800x600?text=Project+Preview')] bg-cover bg-center" />
                </div>

                <div class="p-4 text-right">
                    <button
                        type="button"
                        on:click=move |_| on_close.run(())
                        class="px-3 py-1 rounded border"
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
