use super::*;
use crate::{clock::ClockSnapshot, shell::notifications::notification_source};

#[component]
pub(super) fn NotificationStack() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <aside class="notification-stack" aria-live="polite">
            <For
                each=move || state.get().notifications.items().to_vec()
                key=|notification| notification.id
                let:notification
            >
                {{
                    let notification_id = notification.id;
                    let (source, icon) =
                        notification_source(&state.get_untracked().catalog, notification.app_id);
                    let time = ClockSnapshot::at(notification.timestamp_ms).time_label();
                    view! {
                        <article class="notification" role="status">
                            <header class="notification-header">
                                <span class="notification-icon" aria-hidden="true">{icon}</span>
                                <span class="notification-source">{source}</span>
                                <time class="notification-time">{time}</time>
                                <button
                                    class="notification-close"
                                    aria-label="Close"
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        runtime.dispatch_action(DesktopAction::DismissNotification {
                                            notification_id,
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </header>
                            <strong class="notification-title">{notification.title}</strong>
                            <p class="notification-body">{notification.body}</p>
                        </article>
                    }
                }}
            </For>
        </aside>
    }
}
