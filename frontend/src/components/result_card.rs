use yew::prelude::*;
use shared::confetti::confetti_layout;
use shared::constants::CONFETTI_COUNT;
use shared::sharing::ShareCapability;
use shared::species::Species;
use crate::components::ShareButtons;
use crate::hooks::use_prefers_reduced_motion;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub species: Species,
    pub share_url: String,
    pub capability: ShareCapability,
    pub on_play_again: Callback<MouseEvent>,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let reduced_motion = use_prefers_reduced_motion();
    let confetti = use_memo((), |_| confetti_layout(CONFETTI_COUNT));
    let species = &props.species;

    html! {
        <div class={classes!(styles::RESULT_CARD, (!reduced_motion).then_some(styles::RESULT_CARD_MOTION))}>
            if !reduced_motion {
                <div class={styles::CONFETTI_LAYER} aria-hidden="true">
                    {
                        confetti.iter().enumerate().map(|(i, particle)| {
                            let style = format!(
                                "left: 50%; top: 50%; --confetti-x: {:.1}px; --confetti-y: {:.1}px; --confetti-rotate: {:.1}deg;",
                                particle.x, particle.y, particle.rotate
                            );
                            html! {
                                <span key={i} class={styles::CONFETTI_PARTICLE} {style}>{particle.emoji}</span>
                            }
                        }).collect::<Html>()
                    }
                </div>
            }

            <div class={styles::RESULT_EMOJI}>{&species.emoji}</div>

            <div>
                <p class={styles::RESULT_KICKER}>{"Tu es"}</p>
                <h2 class={styles::RESULT_TITLE}>{format!("{}% {}", species.percentage, species.name)}</h2>
                <p class={styles::RESULT_SCIENTIFIC}>{&species.scientific_name}</p>
                <p class={styles::RESULT_FACT}>{&species.fun_fact}</p>
            </div>

            <ShareButtons
                species={species.clone()}
                share_url={props.share_url.clone()}
                capability={props.capability}
            />

            <button onclick={props.on_play_again.clone()} class={styles::PLAY_AGAIN}>
                {"🔄 Rejouer"}
            </button>
        </div>
    }
}
