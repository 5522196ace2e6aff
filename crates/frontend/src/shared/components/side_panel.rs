use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Right-hand slide-in panel hosting the create/edit form.
///
/// Closes on Escape, on the close button and on an overlay click.
#[component]
pub fn SidePanel(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    title: Signal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        {move || if open.get() {
            let children = children.clone();
            view! {
                <div class="side-panel-overlay" on:click=move |_| on_close.run(())>
                    <aside class="side-panel" on:click=stop_propagation>
                        <div class="side-panel__header">
                            <h2 class="side-panel__title">{move || title.get()}</h2>
                            <button
                                class="button button--icon side-panel__close"
                                title="Close"
                                on:click=move |_| on_close.run(())
                            >
                                {icon("x")}
                            </button>
                        </div>
                        <div class="side-panel__body">
                            {children()}
                        </div>
                    </aside>
                </div>
            }.into_any()
        } else {
            view! { <></> }.into_any()
        }}
    }
}
