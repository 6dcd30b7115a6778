//! Root component: Mission Control hero with the fleet overlay.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::fleet_overlay::FleetOverlay;
use crate::components::fleet_toggle::FleetToggle;
use crate::state::ui::UiState;
use crate::util::reduced_motion::prefers_reduced_motion;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(UiState::with_reduced_motion(prefers_reduced_motion())));

    let stage = NodeRef::<Div>::new();

    view! {
        <Title text="Mission Control" />
        <main class="mission-control">
            <section class="mission-control__stage" style="position:relative;min-height:100vh" node_ref=stage>
                <header class="hud">
                    <h1 class="hud__title">"Mission Control"</h1>
                    <FleetToggle />
                </header>
            </section>
            <FleetOverlay container=stage />
        </main>
    }
}
