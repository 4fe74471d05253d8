use gloo::events::EventListener;
use web_sys::{window, MediaQueryList};
use yew::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn media_query() -> Option<MediaQueryList> {
    window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Tracks the user's reduced-motion accessibility setting.
#[hook]
pub fn use_prefers_reduced_motion() -> bool {
    let prefers = use_state(|| media_query().map(|mql| mql.matches()).unwrap_or(false));

    {
        let prefers = prefers.clone();
        use_effect_with((), move |_| {
            let listener = media_query().map(|mql| {
                let target = mql.clone();
                EventListener::new(&mql, "change", move |_| prefers.set(target.matches()))
            });
            move || drop(listener)
        });
    }

    *prefers
}
