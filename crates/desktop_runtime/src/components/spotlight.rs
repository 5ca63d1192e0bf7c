use super::*;
use crate::shell::search;

const EMPTY_RESULTS_MESSAGE: &str = "No results found. Try searching for an app, note, or event.";

#[component]
pub(super) fn SpotlightOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open = create_memo(move |_| state.get().spotlight.open);
    let query = create_memo(move |_| state.get().spotlight.query.clone());
    let results = create_memo(move |_| {
        let desktop = state.get();
        search(
            &desktop.catalog,
            &desktop.spotlight_documents,
            &desktop.spotlight.query,
        )
    });

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="spotlight-backdrop"
                on:click=move |_| {
                    runtime.dispatch_action(DesktopAction::SetSpotlightOpen { open: false })
                }
            >
                <div
                    class="spotlight-panel"
                    role="dialog"
                    aria-label="Spotlight Search"
                    on:click=|ev| ev.stop_propagation()
                >
                    <input
                        id=SPOTLIGHT_INPUT_ID
                        class="spotlight-input"
                        type="text"
                        placeholder="Spotlight Search"
                        autocomplete="off"
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            runtime.dispatch_action(DesktopAction::SetSpotlightQuery {
                                query: event_target_value(&ev),
                            });
                        }
                    />
                    <Show
                        when=move || !results.get().is_empty()
                        fallback=|| view! { <p class="spotlight-empty">{EMPTY_RESULTS_MESSAGE}</p> }
                    >
                        <ul class="spotlight-results" role="listbox">
                            <For each=move || results.get() key=|result| result.key.clone() let:result>
                                {{
                                    let app_id = result.app_id;
                                    view! {
                                        <li role="option">
                                            <button
                                                class="spotlight-result"
                                                on:click=move |ev| {
                                                    stop_mouse_event(&ev);
                                                    runtime.dispatch_action(
                                                        DesktopAction::ActivateSpotlightResult { app_id },
                                                    );
                                                }
                                            >
                                                <span class="spotlight-result-title">{result.title}</span>
                                                <span class="spotlight-result-subtitle">{result.subtitle}</span>
                                            </button>
                                        </li>
                                    }
                                }}
                            </For>
                        </ul>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
