use yew::prelude::*;
use shared::constants::{DNA_EMOJIS, DNA_PAIRS};
use crate::hooks::use_prefers_reduced_motion;
use crate::styles;

/// Floating DNA glyphs behind the page. They stay still when the user
/// prefers reduced motion.
#[function_component(DnaBackground)]
pub fn dna_background() -> Html {
    let reduced_motion = use_prefers_reduced_motion();

    html! {
        <div class={styles::BACKGROUND} aria-hidden="true">
            {
                (0..DNA_PAIRS).map(|i| {
                    let left = (i * 100) / DNA_PAIRS;
                    let top = (i * 37) % 100;
                    let style = if reduced_motion {
                        format!("left: {}%; top: {}%;", left, top)
                    } else {
                        format!(
                            "left: {}%; top: {}%; animation: float-dna {}s ease-in-out {}s infinite;",
                            left, top, 6 + i % 4, i as f64 * 0.5
                        )
                    };
                    html! {
                        <span key={i} class={styles::BACKGROUND_GLYPH} {style}>
                            {DNA_EMOJIS[i % DNA_EMOJIS.len()]}
                        </span>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
