//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use std::time::Duration;

use leptos::*;

use crate::{
    components::{focus_element_by_id, SPOTLIGHT_INPUT_ID},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

/// Delay before focusing the spotlight field so the overlay has been painted.
const SPOTLIGHT_FOCUS_DELAY: Duration = Duration::from_millis(10);

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::ScheduleNotificationDismiss {
            notification_id,
            after,
        } => set_timeout(
            move || runtime.dispatch_action(DesktopAction::DismissNotification { notification_id }),
            after,
        ),
        RuntimeEffect::FocusSpotlightInput => set_timeout(
            || {
                if !focus_element_by_id(SPOTLIGHT_INPUT_ID) {
                    logging::debug_warn!("spotlight input not mounted");
                }
            },
            SPOTLIGHT_FOCUS_DELAY,
        ),
    }
}
