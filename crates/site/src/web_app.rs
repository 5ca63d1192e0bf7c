use desktop_runtime::{builtin_spotlight_documents, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop" />
        <Meta name="description" content="A browser desktop shell with windows, dock and spotlight." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider spotlight_documents=builtin_spotlight_documents()>
            <DesktopShell />
        </DesktopProvider>
    }
}
