use yew::prelude::*;
use crate::hooks::use_prefers_reduced_motion;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct DnaButtonProps {
    pub onclick: Callback<MouseEvent>,
    pub is_spinning: bool,
}

#[function_component(DnaButton)]
pub fn dna_button(props: &DnaButtonProps) -> Html {
    let reduced_motion = use_prefers_reduced_motion();

    let aria_label = if props.is_spinning {
        "Analyse ADN en cours"
    } else {
        "Lancer l'analyse ADN"
    };

    let motion_class = if !props.is_spinning && !reduced_motion {
        styles::DNA_BUTTON_IDLE_MOTION
    } else {
        ""
    };

    let icon_class = if reduced_motion { "" } else { "inline-block animate-spin" };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            aria-label={aria_label}
            aria-busy={props.is_spinning.to_string()}
            class={classes!(styles::DNA_BUTTON, motion_class)}
        >
            <span class={styles::DNA_BUTTON_CONTENT}>
                if props.is_spinning {
                    <span class={icon_class}>{"🧬"}</span>
                    {"Analyse ADN..."}
                } else {
                    <span>{"🎰"}</span>
                    {"Fais tourner la roulette ADN"}
                }
            </span>
        </button>
    }
}
