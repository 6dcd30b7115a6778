//! HUD button that shows or hides the fleet.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn FleetToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn hud__fleet-toggle"
            aria-pressed=move || ui.with(|u| u.fleet_visible).to_string()
            on:click=move |_| ui.update(|u| {
                u.toggle_fleet();
            })
            title="Toggle fleet overlay"
        >
            {move || ui.with(UiState::toggle_label)}
        </button>
    }
}
