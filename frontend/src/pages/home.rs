use yew::prelude::*;
use web_sys::window;
use shared::constants::SITE_TITLE;
use shared::shared_spin_game::GamePhase;
use shared::species::Dataset;
use crate::components::{DnaBackground, DnaButton, ResultCard, SpinProgress};
use crate::config::{detect_share_capability, get_share_url};
use crate::hooks::use_spin_game;
use crate::styles;

// Keyframes used by the page's animation classes
const CUSTOM_CSS: &str = r#"
@keyframes pulse-glow {
    0%, 100% { box-shadow: 0 0 20px rgba(167, 139, 250, 0.5); }
    50% { box-shadow: 0 0 40px rgba(34, 211, 238, 0.7); }
}
.animate-pulse-glow { animation: pulse-glow 2s ease-in-out infinite; }

@keyframes ping-slow {
    0%, 100% { transform: scale(1); }
    50% { transform: scale(1.2); }
}
.animate-ping-slow { animation: ping-slow 1s ease-in-out infinite; }

@keyframes pop-in {
    0% { transform: scale(0) rotate(-10deg); opacity: 0; }
    70% { transform: scale(1.05) rotate(1deg); opacity: 1; }
    100% { transform: scale(1) rotate(0); opacity: 1; }
}
.animate-pop-in { animation: pop-in 0.6s cubic-bezier(0.34, 1.56, 0.64, 1); }

@keyframes confetti-burst {
    0% { transform: translate(0, 0) scale(0) rotate(0); opacity: 1; }
    50% { transform: translate(calc(var(--confetti-x) / 2), calc(var(--confetti-y) / 2)) scale(1); }
    100% { transform: translate(var(--confetti-x), var(--confetti-y)) scale(0) rotate(var(--confetti-rotate)); opacity: 0; }
}
.animate-confetti { animation: confetti-burst 1.5s ease-out forwards; }

@keyframes float-dna {
    0%, 100% { transform: translateY(0) rotate(0); }
    50% { transform: translateY(-30px) rotate(180deg); }
}

@keyframes fade-in {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}
.animate-fade-in { animation: fade-in 0.6s ease-out; }

@media (prefers-reduced-motion: reduce) {
    .animate-pulse-glow, .animate-ping-slow, .animate-pop-in, .animate-confetti, .animate-fade-in { animation: none; }
}
"#;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub dataset: &'static Dataset,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Inject the keyframes while the page is mounted
    {
        use_effect_with((), move |_| {
            let style_element = window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let head = document.head()?;
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(CUSTOM_CSS));
                    head.append_child(&style).ok()?;
                    Some(style)
                });

            move || {
                if let Some(style) = style_element {
                    style.remove();
                }
            }
        });
    }

    // Host capabilities are resolved once per session
    let share_url = use_memo((), |_| get_share_url());
    let capability = use_memo((), |_| detect_share_capability());

    let dataset: &'static Dataset = props.dataset;
    let game = use_spin_game(&dataset.species);

    let content = match &game.phase {
        GamePhase::Idle => html! {
            <div key="button">
                <DnaButton onclick={game.spin.reform(|_: MouseEvent| ())} is_spinning={false} />
            </div>
        },
        GamePhase::Spinning(step) => html! {
            <div key="spinning" class={styles::PROGRESS}>
                <DnaButton onclick={Callback::noop()} is_spinning={true} />
                <SpinProgress step={*step} />
            </div>
        },
        GamePhase::Result(species) => html! {
            <div key="result" class="flex justify-center w-full">
                <ResultCard
                    species={species.clone()}
                    share_url={(*share_url).clone()}
                    capability={*capability}
                    on_play_again={game.reset.reform(|_: MouseEvent| ())}
                />
            </div>
        },
    };

    html! {
        <main class={styles::MAIN}>
            <DnaBackground />

            <div class={styles::HEADER}>
                <div class={styles::HEADER_ROW}>
                    <img src="/icon.svg" alt="" aria-hidden="true" width="80" height="80" class={styles::HERO_ICON} />
                    <h1 class={styles::HERO_TITLE}>{SITE_TITLE}</h1>
                </div>
                <p class={styles::HERO_SUBTITLE}>
                    {"Fais tourner la roue et découvre avec quelle espèce tu partages le plus d'ADN !"}
                </p>
            </div>

            <div class={styles::GAME_AREA}>
                {content}
            </div>

            <footer class={styles::FOOTER}>
                {"Fait avec 🧬 et un brin d'humour"}
            </footer>
        </main>
    }
}
