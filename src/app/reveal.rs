use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Latches to `true` the first time the element scrolls into view.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let shown = RwSignal::new(false);
    Effect::watch(
        move || visible.get(),
        move |is_visible, _, _| {
            if *is_visible {
                shown.set(true);
            }
        },
        true,
    );
    shown.into()
}

/// Fades its children up the first time they enter the viewport.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let shown = use_reveal(node);
    view! {
        <div
            node_ref=node
            class=move || {
                let state = if shown.get() { "reveal reveal-visible" } else { "reveal" };
                format!("{state} {class}")
            }
        >
            {children()}
        </div>
    }
}
