use crate::shared::config::ClientConfig;
use crate::shared::icons::icon;
use crate::shared::list_page::EntityListPage;
use crate::shared::notifications::{NotificationHost, NotificationService};
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::load();
    let role = config.role;

    // Provide the notification sink and client config to the whole app via context.
    provide_context(NotificationService::new(config.notification_timeout_ms));
    provide_context(config);

    let active = RwSignal::new(EntityKind::Student);

    view! {
        <ConfigProvider>
            <div class="app">
                <nav class="app__nav">
                    <div class="app__brand">"School Admin"</div>
                    {EntityKind::ALL.into_iter().map(|kind| view! {
                        <button
                            class=move || if active.get() == kind { "app__nav-item app__nav-item--active" } else { "app__nav-item" }
                            on:click=move |_| active.set(kind)
                        >
                            {icon(kind.api_segment())}
                            <span>{kind.title()}</span>
                        </button>
                    }).collect_view()}
                    <div class="app__role">{format!("Role: {}", role.label())}</div>
                </nav>
                <main class="app__main">
                    // A new page per entity: switching disposes the old page and its pending results
                    {move || {
                        let kind = active.get();
                        view! { <EntityListPage kind=kind /> }
                    }}
                </main>
                <NotificationHost />
            </div>
        </ConfigProvider>
    }
}
