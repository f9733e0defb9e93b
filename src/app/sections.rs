use leptos::{ev::KeyboardEvent, html, prelude::*};

use crate::portfolio::{
    FieldKind, FormField, Project, Skill, ABOUT_NOTES, CAREER_STATS, CONTACT_FORM, EXPERIENCE,
    PROFILE, PROJECTS, SKILLS,
};

use super::icons::{ChevronRight, EnvelopeIcon, GithubIcon, SkillGlyph};
use super::reveal::{use_reveal, Reveal};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="grid md:grid-cols-2 gap-8 items-center">
            <div class="slide-in-left">
                <h2 class="text-4xl md:text-5xl font-extrabold leading-tight">
                    "Hello, I’m " {PROFILE.name} "."
                </h2>
                <p class="mt-4 text-slate-300 max-w-xl">{PROFILE.about}</p>

                <div class="mt-6 flex gap-3">
                    <a
                        href="#projects"
                        class="px-4 py-2 bg-indigo-600 hover:bg-indigo-500 rounded-lg shadow-md"
                    >
                        "View Projects"
                    </a>
                    <a
                        href="#contact"
                        class="px-4 py-2 border border-slate-600 rounded-lg hover:bg-slate-700"
                    >
                        "Contact Me"
                    </a>
                </div>

                <div class="mt-6 flex items-center gap-4 text-slate-300">
                    <div class="flex items-center gap-2">
                        <EnvelopeIcon />
                        <span class="text-sm">{PROFILE.email}</span>
                    </div>
                </div>
            </div>

            <div class="flex items-center justify-center md:justify-end slide-in-right">
                <div class="relative w-64 h-64 rounded-2xl overflow-hidden shadow-2xl ring-1 ring-white/5 transform hover:scale-105 transition">
                    <img src=PROFILE.picture alt="Profile" class="w-full h-full object-cover" />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/50 via-transparent to-transparent mix-blend-overlay" />
                    <div class="absolute bottom-3 left-3 bg-black/50 px-3 py-1 rounded-md text-sm">
                        <strong>{PROFILE.short_title()}</strong>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about">
            <Reveal class="bg-slate-800/40 p-6 rounded-xl shadow-lg">
                <h3 class="text-2xl font-semibold">"About Me"</h3>
                <p class="mt-3 text-slate-300">{PROFILE.about}</p>
                <div class="mt-4 grid md:grid-cols-2 gap-4">
                    {ABOUT_NOTES
                        .iter()
                        .map(|(heading, body)| {
                            view! {
                                <div>
                                    <h4 class="text-sm text-slate-300 font-medium">{*heading}</h4>
                                    <p class="text-slate-200">{*body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn Projects(on_open: Callback<&'static Project>) -> impl IntoView {
    view! {
        <section id="projects">
            <Reveal class="space-y-6">
                <h3 class="text-2xl font-semibold">"Projects"</h3>
                <p class="text-slate-300">"Featured work—click a card to view details."</p>
                <div class="grid md:grid-cols-3 gap-6 mt-4">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project on_open /> })
                        .collect_view()}
                </div>
                <div class="mt-6 p-4 rounded-lg bg-gradient-to-r from-slate-900/40 to-slate-800/30 text-slate-300">
                    <strong>"Quick View:"</strong>
                    " Hover project cards to preview images and key metrics. Click to open a detailed modal with project story, challenges, and link to code."
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: Callback<&'static Project>) -> impl IntoView {
    let keydown_handler = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" || ev.key() == " " {
            ev.prevent_default();
            on_open.run(project);
        }
    };
    view! {
        <article
            role="button"
            tabindex="0"
            aria-label=format!("Open details for {}", project.title)
            class="bg-slate-800/30 rounded-xl overflow-hidden shadow-lg cursor-pointer transform transition hover:scale-[1.03]"
            on:click=move |_| on_open.run(project)
            on:keydown=keydown_handler
        >
            <div class="relative h-40 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-0 hover:opacity-100 transition" />
            </div>
            <div class="p-4">
                <h4 class="font-semibold">{project.title}</h4>
                <p class="text-sm text-slate-300 mt-2">{project.description}</p>
                <div class="mt-3 flex items-center justify-between text-xs text-slate-400">
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech
                            .iter()
                            .map(|t| {
                                view! { <span class="px-2 py-1 bg-slate-700/40 rounded">{*t}</span> }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-2 items-center">
                        <span class="text-slate-300">{project.headline_metric()}</span>
                        <ChevronRight />
                    </div>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience">
            <Reveal class="space-y-4">
                <h3 class="text-2xl font-semibold">"Work Experience & Education"</h3>
                <div class="relative">
                    // timeline rail
                    <div class="absolute left-3 top-0 bottom-0 w-0.5 bg-slate-700/50" />
                    <div class="ml-8 space-y-6">
                        {EXPERIENCE
                            .iter()
                            .map(|e| {
                                view! {
                                    <div class="bg-slate-800/30 p-4 rounded-lg shadow-sm hover:scale-[1.01] transition">
                                        <h4 class="font-semibold">{e.role}</h4>
                                        <p class="text-sm text-slate-300">
                                            {e.company} " • " <span class="text-xs">{e.period}</span>
                                        </p>
                                        <ul class="mt-3 list-disc ml-5 text-slate-300 text-sm">
                                            {e
                                                .details
                                                .iter()
                                                .map(|d| view! { <li>{*d}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills">
            <Reveal class="space-y-4">
                <h3 class="text-2xl font-semibold">"Skills"</h3>
                <p class="text-slate-300">
                    "Technical skills with proficiency bars; animated for clarity."
                </p>
                <div class="grid md:grid-cols-2 gap-6 mt-4">
                    {SKILLS.iter().map(|skill| view! { <SkillCard skill /> }).collect_view()}
                </div>
                <div class="mt-6 p-4 rounded-lg bg-slate-900/50">
                    <strong>"Skill Matrix:"</strong>
                    " Hover any skill to see example projects and short demos. This quick cross-reference helps recruiters map skills to outcomes."
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let shown = use_reveal(node);
    let level = skill.level.min(100);
    view! {
        <div node_ref=node class="p-4 bg-slate-800/30 rounded-lg">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="text-indigo-400">
                        <SkillGlyph icon=skill.icon />
                    </div>
                    <div>
                        <h4 class="font-medium">{skill.name}</h4>
                        <p class="text-xs text-slate-400">"Proficiency"</p>
                    </div>
                </div>
                <div class="text-sm text-slate-300">{format!("{level}%")}</div>
            </div>
            <div
                class="mt-3 bg-slate-700/20 rounded-full h-3 overflow-hidden"
                role="progressbar"
                aria-label=skill.name
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=level.to_string()
            >
                <div
                    class="h-full rounded-full bg-gradient-to-r from-indigo-500 via-pink-500 to-yellow-400 transition-[width] duration-1000"
                    style:width=move || if shown.get() { format!("{level}%") } else { "0%".to_string() }
                />
            </div>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact">
            <Reveal class="bg-slate-800/40 p-6 rounded-xl shadow-lg">
                <h3 class="text-2xl font-semibold">"Contact"</h3>
                <p class="mt-2 text-slate-300">
                    "Interested in working together? Send a message below or connect on LinkedIn."
                </p>
                <div class="mt-4 grid md:grid-cols-2 gap-6">
                    <div>
                        <form action=CONTACT_FORM.endpoint method=CONTACT_FORM.method class="space-y-3">
                            <input type="hidden" name="_subject" value=CONTACT_FORM.subject />
                            {CONTACT_FORM
                                .fields
                                .iter()
                                .map(|field| view! { <ContactField field /> })
                                .collect_view()}
                            <div>
                                <button
                                    type="submit"
                                    class="px-4 py-2 bg-indigo-600 rounded hover:bg-indigo-500"
                                >
                                    "Send Message"
                                </button>
                            </div>
                        </form>
                        <div class="mt-4 text-sm text-slate-300">
                            <div class="flex items-center gap-2">
                                <EnvelopeIcon />
                                {PROFILE.email}
                            </div>
                            <div class="flex items-center gap-2 mt-2">
                                <GithubIcon />
                                <a href=PROFILE.github class="underline">
                                    "GitHub"
                                </a>
                            </div>
                        </div>
                    </div>
                    <div class="p-4 rounded-lg bg-slate-900/40 flex flex-col justify-between">
                        <div>
                            <h4 class="font-semibold">"Quick Career Stats"</h4>
                            <p class="text-slate-300 mt-2">
                                "A snapshot you can show hiring teams during interviews."
                            </p>
                            <ul class="mt-3 text-slate-300">
                                {CAREER_STATS.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                            </ul>
                        </div>
                        <div class="mt-4 text-xs text-slate-400">
                            "Built with ♥ for South African tech growth."
                        </div>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn ContactField(field: &'static FormField) -> impl IntoView {
    let id = format!("contact_{}", field.name);
    let input_class = "w-full mt-1 p-2 rounded bg-slate-700/20 focus:outline-none";
    let input = match field.kind {
        FieldKind::TextArea { rows } => view! {
            <textarea
                id=id.clone()
                name=field.name
                rows=rows.to_string()
                required=field.required
                class=input_class
            />
        }
        .into_any(),
        FieldKind::Email => view! {
            <input
                id=id.clone()
                name=field.name
                type="email"
                required=field.required
                class=input_class
            />
        }
        .into_any(),
        FieldKind::Text => view! {
            <input id=id.clone() name=field.name required=field.required class=input_class />
        }
        .into_any(),
    };
    view! {
        <div>
            <label for=id class="text-sm">
                {field.label}
            </label>
            {input}
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="mt-12 text-center text-slate-400 text-sm">
            {PROFILE.copyright(year)}
            " — Built with Rust & Leptos • Available for internships"
        </footer>
    }
}
