//! Placeholder app views mounted into managed windows.

use desktop_app_contract::{AppId, AppMountContext};
use leptos::*;

use crate::{
    components::{use_desktop_runtime, DesktopRuntimeContext},
    reducer::DesktopAction,
    shell::{NotificationRequest, SpotlightDocument},
};

/// `(id, title, content)`
pub(super) const SAMPLE_NOTES: [(u32, &str, &str); 3] = [
    (1, "Weekend plans", "Farmers market on Saturday, then a long ride along the coast."),
    (2, "Reading list", "Finish the systems book and start the compiler notes."),
    (3, "Launch checklist", "Update the changelog, tag the release and post the announcement."),
];

/// `(id, subject, from)`
pub(super) const SAMPLE_MAIL: [(u32, &str, &str); 3] = [
    (1, "Design review moved to Thursday", "Priya Shah"),
    (2, "Your order has shipped", "Store"),
    (3, "Trip itinerary", "Travel Desk"),
];

/// `(id, title, date, time)`
pub(super) const SAMPLE_EVENTS: [(u32, &str, &str, &str); 3] = [
    (1, "Team standup", "2026-10-19", "9:30 AM"),
    (2, "Dentist", "2026-10-21", "3:00 PM"),
    (3, "Dinner with Sam", "2026-10-23", "7:00 PM"),
];

fn notify(runtime: DesktopRuntimeContext, app_id: AppId, title: String, body: String) {
    runtime.dispatch_action(DesktopAction::PushNotification {
        request: NotificationRequest {
            title,
            body,
            app_id: Some(app_id),
            timestamp_ms: None,
        },
    });
}

const FINDER_SIDEBAR: [(&str, &[&str]); 3] = [
    ("Favorites", &["AirDrop", "Recents", "Applications", "Downloads"]),
    ("iCloud", &["iCloud Drive", "Desktop", "Documents"]),
    ("Locations", &["Macintosh HD", "Network"]),
];

const SAFARI_BOOKMARKS: [(&str, &str); 4] = [
    ("Vercel", "https://vercel.com"),
    ("Next.js", "https://nextjs.org"),
    ("Apple Newsroom", "https://www.apple.com/newsroom/"),
    ("GitHub", "https://github.com"),
];

const SETTINGS_PANES: [&str; 6] = [
    "Wi-Fi",
    "Bluetooth",
    "Appearance",
    "Desktop & Dock",
    "Notifications",
    "Privacy & Security",
];

#[component]
fn PlaceholderFrame(
    context: AppMountContext,
    #[prop(into)] summary: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!("app-shell app-{}", context.app_id)
            data-window-id=context.window_id.to_string()
        >
            <header class="app-toolbar">
                <strong>{context.title}</strong>
                <span class="app-summary">{summary}</span>
            </header>
            <div class="app-body">{children()}</div>
        </div>
    }
}

pub(super) fn mount_finder(context: AppMountContext) -> View {
    view! {
        <PlaceholderFrame context=context summary="Browse files and folders">
            <aside class="finder-sidebar">
                {FINDER_SIDEBAR
                    .iter()
                    .map(|(group, items)| {
                        view! {
                            <div class="finder-sidebar-group">
                                <p>{*group}</p>
                                <ul>
                                    {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </aside>
        </PlaceholderFrame>
    }
    .into_view()
}

pub(super) fn mount_safari(context: AppMountContext) -> View {
    let address = create_rw_signal("https://www.apple.com".to_string());
    view! {
        <PlaceholderFrame context=context summary="Browse the web">
            <input
                class="safari-address"
                type="text"
                prop:value=move || address.get()
                on:input=move |ev| address.set(event_target_value(&ev))
            />
            <nav class="safari-bookmarks">
                {SAFARI_BOOKMARKS
                    .iter()
                    .map(|(label, url)| {
                        let url = url.to_string();
                        view! {
                            <button type="button" on:click=move |_| address.set(url.clone())>
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <p class="safari-page">{move || format!("Loading {}", address.get())}</p>
        </PlaceholderFrame>
    }
    .into_view()
}

pub(super) fn mount_notes(context: AppMountContext) -> View {
    let draft = create_rw_signal(String::new());
    view! {
        <PlaceholderFrame context=context summary="Capture ideas and checklists">
            <ul class="notes-list">
                {SAMPLE_NOTES
                    .iter()
                    .map(|(_, title, content)| {
                        let draft_text = content.to_string();
                        view! {
                            <li on:click=move |_| draft.set(draft_text.clone())>{*title}</li>
                        }
                    })
                    .collect_view()}
            </ul>
            <textarea
                class="notes-editor"
                placeholder="Start typing"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            ></textarea>
            <div class="app-statusbar">
                <span>{move || format!("{} characters", draft.get().chars().count())}</span>
            </div>
        </PlaceholderFrame>
    }
    .into_view()
}

pub(super) fn mount_calendar(context: AppMountContext) -> View {
    let runtime = use_desktop_runtime();
    let added = create_rw_signal(0_u32);
    let add_event = move |_| {
        let next = added.get_untracked() + 1;
        added.set(next);
        let date = "2026-10-24";
        let title = format!("New event {next}");
        runtime.dispatch_action(DesktopAction::RegisterSpotlightDocuments {
            documents: vec![SpotlightDocument::event(
                format!("added-{next}"),
                &title,
                date,
                "2:00 PM",
            )],
        });
        notify(
            runtime,
            AppId::Calendar,
            "Event added".to_string(),
            format!("Scheduled for {date}"),
        );
    };

    view! {
        <PlaceholderFrame context=context summary="Plan events and reminders">
            <button type="button" class="calendar-add" on:click=add_event>
                "New Event"
            </button>
            <ul class="calendar-events">
                {SAMPLE_EVENTS
                    .iter()
                    .map(|(_, title, date, time)| {
                        view! { <li>{format!("{title} • {date} {time}")}</li> }
                    })
                    .collect_view()}
            </ul>
            <p class="app-statusbar">{move || format!("{} added this session", added.get())}</p>
        </PlaceholderFrame>
    }
    .into_view()
}

pub(super) fn mount_mail(context: AppMountContext) -> View {
    let runtime = use_desktop_runtime();
    let composing = create_rw_signal(false);

    view! {
        <PlaceholderFrame context=context summary="Read and send messages">
            <button
                type="button"
                class="mail-compose"
                on:click=move |_| {
                    composing.set(true);
                    notify(
                        runtime,
                        AppId::Mail,
                        "Compose ready".to_string(),
                        "Start drafting your message.".to_string(),
                    );
                }
            >
                "New Message"
            </button>
            <ul class="mail-inbox">
                {SAMPLE_MAIL
                    .iter()
                    .map(|(_, subject, from)| {
                        view! {
                            <li>
                                <strong>{*from}</strong>
                                <span>{*subject}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Show when=move || composing.get() fallback=|| ()>
                <textarea class="mail-draft" placeholder="New message"></textarea>
            </Show>
        </PlaceholderFrame>
    }
    .into_view()
}

pub(super) fn mount_photos(context: AppMountContext) -> View {
    let runtime = use_desktop_runtime();
    let favorite = create_rw_signal(None::<usize>);

    view! {
        <PlaceholderFrame context=context summary="Browse your library">
            <div class="photos-grid">
                {(0..12_usize)
                    .map(|index| {
                        view! {
                            <button
                                type="button"
                                class="photos-tile"
                                class:favorite=move || favorite.get() == Some(index)
                                on:click=move |_| {
                                    favorite.set(Some(index));
                                    notify(
                                        runtime,
                                        AppId::Photos,
                                        "Added to Favorites".to_string(),
                                        "Your moment has been marked.".to_string(),
                                    );
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </PlaceholderFrame>
    }
    .into_view()
}

pub(super) fn mount_terminal(context: AppMountContext) -> View {
    let prompt = format!("guest@desktop ~ % # window {}", context.window_id);
    view! {
        <PlaceholderFrame context=context summary="Command line">
            <pre class="terminal-screen">{prompt}</pre>
        </PlaceholderFrame>
    }
    .into_view()
}

pub(super) fn mount_settings(context: AppMountContext) -> View {
    let selected = create_rw_signal(SETTINGS_PANES[0]);
    view! {
        <PlaceholderFrame context=context summary="Configure the desktop">
            <ul class="settings-panes">
                {SETTINGS_PANES
                    .iter()
                    .copied()
                    .map(|pane| {
                        view! {
                            <li
                                class:selected=move || selected.get() == pane
                                on:click=move |_| selected.set(pane)
                            >
                                {pane}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="settings-detail">{move || selected.get()}</p>
        </PlaceholderFrame>
    }
    .into_view()
}

pub(super) fn mount_music(context: AppMountContext) -> View {
    let playing = create_rw_signal(false);
    view! {
        <PlaceholderFrame context=context summary="Listen to your library">
            <button type="button" on:click=move |_| playing.update(|on| *on = !*on)>
                {move || if playing.get() { "Pause" } else { "Play" }}
            </button>
        </PlaceholderFrame>
    }
    .into_view()
}

pub(super) fn mount_messages(context: AppMountContext) -> View {
    let runtime = use_desktop_runtime();
    let composer = create_rw_signal(String::new());
    let send = move |_| {
        let body = composer.get_untracked();
        if body.trim().is_empty() {
            return;
        }
        composer.set(String::new());
        notify(runtime, AppId::Messages, "Message sent to Sam".to_string(), body);
    };

    view! {
        <PlaceholderFrame context=context summary="Chat with friends">
            <p class="messages-thread">"Sam"</p>
            <input
                class="messages-composer"
                type="text"
                placeholder="iMessage"
                prop:value=move || composer.get()
                on:input=move |ev| composer.set(event_target_value(&ev))
            />
            <button type="button" on:click=send>"Send"</button>
        </PlaceholderFrame>
    }
    .into_view()
}

pub(super) fn mount_preview(context: AppMountContext) -> View {
    view! {
        <PlaceholderFrame context=context summary="View documents">
            <div class="preview-page"></div>
        </PlaceholderFrame>
    }
    .into_view()
}
