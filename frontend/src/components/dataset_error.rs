use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct DatasetErrorProps {
    pub message: String,
}

/// Shown instead of the game when the species dataset cannot be loaded.
#[function_component(DatasetError)]
pub fn dataset_error(props: &DatasetErrorProps) -> Html {
    html! {
        <main class={styles::MAIN}>
            <div class={styles::ALERT_ERROR} role="alert">
                <p class="font-bold mb-2">{"🧬 La roulette ADN est indisponible"}</p>
                <p class="text-sm">{&props.message}</p>
            </div>
        </main>
    }
}
