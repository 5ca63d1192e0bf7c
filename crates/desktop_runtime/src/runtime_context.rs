//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the browser
//! listeners that feed viewport changes and the boot sequence into the reducer. UI composition
//! stays in [`crate::components`].

use leptos::*;

use crate::{
    apps::builtin_catalog,
    config::WindowLayoutConfig,
    effect_executor,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    shell::SpotlightDocument,
    viewport::read_browser_viewport,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer gesture state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn install_viewport_tracking(runtime: DesktopRuntimeContext, config: WindowLayoutConfig) {
    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = read_browser_viewport(config.default_viewport);
        runtime.dispatch_action(DesktopAction::ViewportResized {
            width: viewport.width,
            height: viewport.height,
        });
    });
    on_cleanup(move || resize_listener.remove());
}

fn install_boot_sequence(runtime: DesktopRuntimeContext, config: WindowLayoutConfig) {
    match set_timeout_with_handle(
        move || runtime.dispatch_action(DesktopAction::LaunchBootApps),
        config.boot_delay(),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("desktop boot timer failed: {err:?}"),
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and schedules the boot launch.
pub fn DesktopProvider(
    /// Layout and timer settings; defaults match the stock shell.
    #[prop(optional)]
    config: Option<WindowLayoutConfig>,
    /// Searchable documents seeded into spotlight.
    #[prop(optional)]
    spotlight_documents: Vec<SpotlightDocument>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let mut initial = DesktopState::new(
        config,
        builtin_catalog(),
        read_browser_viewport(config.default_viewport),
    );
    initial.spotlight_documents = spotlight_documents;

    let state = create_rw_signal(initial);
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    install_viewport_tracking(runtime, config);
    install_boot_sequence(runtime, config);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
