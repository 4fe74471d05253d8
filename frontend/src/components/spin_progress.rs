use yew::prelude::*;
use shared::shared_spin_game::{SpinStep, INACTIVE_STEP_COLOR};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinProgressProps {
    pub step: SpinStep,
}

/// Progress dots and scanning message while a spin is running.
#[function_component(SpinProgress)]
pub fn spin_progress(props: &SpinProgressProps) -> Html {
    html! {
        <>
            <div class={styles::PROGRESS_DOTS}>
                {
                    SpinStep::ALL.iter().map(|&dot| {
                        let color = if props.step >= dot { dot.color() } else { INACTIVE_STEP_COLOR };
                        let pulse = if props.step == dot { "animate-ping-slow" } else { "" };
                        html! {
                            <div
                                key={dot.number()}
                                class={classes!(styles::PROGRESS_DOT, pulse)}
                                style={format!("background-color: {};", color)}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class={styles::PROGRESS_MESSAGE} aria-live="polite">
                {props.step.message()}
            </div>
        </>
    }
}
