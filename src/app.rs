mod download;
mod header;
mod icons;
mod project_modal;
mod recruiter_panel;
mod reveal;
mod sections;

use leptos::{either::EitherOf3, prelude::*};
use leptos_meta::*;

use crate::portfolio::{project, Project, PROFILE};
use crate::view_state::{OverlayKind, ViewState};

use header::Header;
use project_modal::ProjectModal;
use recruiter_panel::RecruiterPanel;
use sections::{About, Contact, Experience, Footer, Hero, Projects, Skills};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let state = RwSignal::new(ViewState::default());
    provide_context(state);

    let recruiter_mode = Signal::derive(move || state.with(ViewState::recruiter_mode));
    // score changes must not remount the brief panel
    let overlay = Memo::new(move |_| state.with(ViewState::overlay_kind));

    let toggle_recruiter = Callback::new(move |_: ()| state.update(ViewState::toggle_recruiter));
    let close_recruiter = Callback::new(move |_: ()| state.update(ViewState::close_recruiter));
    let open_project = Callback::new(move |p: &'static Project| {
        log::debug!("opening project {}", p.title);
        state.update(|s| {
            if let Err(err) = s.open_project(p) {
                log::warn!("couldn't open project: {err}");
            }
        });
    });
    let close_project = Callback::new(move |_: ()| state.update(ViewState::close_project));

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-b from-slate-900 via-slate-800 to-black text-slate-100 font-sans">
            <div class="max-w-6xl mx-auto px-6 py-12">
                <Header recruiter_mode on_toggle_recruiter=toggle_recruiter />
                <main class="mt-10 space-y-20">
                    <Hero />
                    <About />
                    <Projects on_open=open_project />
                    <Experience />
                    <Skills />
                    <Contact />
                </main>
                <Footer />
                {move || match overlay.get() {
                    OverlayKind::None => EitherOf3::A(()),
                    OverlayKind::ProjectDetail(id) => {
                        EitherOf3::B(
                            project(id)
                                .map(|project| view! { <ProjectModal project on_close=close_project /> }),
                        )
                    }
                    OverlayKind::RecruiterBrief => {
                        EitherOf3::C(view! { <RecruiterPanel on_close=close_recruiter /> })
                    }
                }}
            </div>
        </div>
    }
}
