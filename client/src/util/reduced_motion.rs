//! `prefers-reduced-motion` detection.
//!
//! Read once at startup. Outside a browser build the preference is always
//! off so native tests stay deterministic.

#[cfg(test)]
#[path = "reduced_motion_test.rs"]
mod reduced_motion_test;

/// Media query matched when the user asked for less motion.
pub const QUERY: &str = "(prefers-reduced-motion: reduce)";

/// True when the system requests reduced motion.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.match_media(QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                log::warn!("reduced-motion query failed: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
