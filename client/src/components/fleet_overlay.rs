//! Bridge between Leptos state and the imperative `fleet` overlay.
//!
//! ARCHITECTURE
//! ============
//! The overlay is a plain Rust handle, not a reactive node. An effect
//! attaches it once the container element exists and `fleet_visible` is
//! set, and detaches it when either goes away. The component itself renders
//! nothing; the overlay inserts its own canvas into the container.

use leptos::html::Div;
use leptos::prelude::*;

use crate::state::ui::UiState;

/// Mount the fleet overlay into `container` while the fleet is visible.
#[component]
pub fn FleetOverlay(container: NodeRef<Div>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "csr")]
    {
        use fleet::web::{WebOverlay, attach_to_element, config_from_element};

        let overlay = StoredValue::new_local(None::<WebOverlay>);
        let mount_state = Memo::new(move |_| ui.with(|u| (u.fleet_visible, u.motion())));

        Effect::new(move || {
            let (visible, motion) = mount_state.get();
            let element = container.get();
            overlay.update_value(|slot| {
                if let Some(mut previous) = slot.take() {
                    previous.detach();
                }
                if !visible {
                    return;
                }
                let Some(element) = element else {
                    return;
                };
                let mut config = config_from_element(&element);
                config.motion = motion;
                *slot = Some(attach_to_element(Some(element.into()), &config));
            });
        });

        on_cleanup(move || {
            overlay.update_value(|slot| {
                if let Some(mut handle) = slot.take() {
                    handle.detach();
                }
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ui, container);
    }
}
