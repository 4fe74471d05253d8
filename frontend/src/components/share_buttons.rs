use gloo_timers::future::TimeoutFuture;
use shared::constants::COPY_TIMEOUT_MS;
use shared::sharing::{
    clipboard_text, is_share_cancelled, native_share_payload, share_links, ShareCapability, SharePlatform,
};
use shared::species::Species;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, DomException, ShareData};
use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ShareButtonsProps {
    pub species: Species,
    pub share_url: String,
    pub capability: ShareCapability,
}

async fn native_share(species: Species, share_url: String) {
    let Some(window) = window() else {
        return;
    };
    let payload = native_share_payload(&species, &share_url);
    let data = ShareData::new();
    data.set_title(&payload.title);
    data.set_text(&payload.text);
    data.set_url(&payload.url);

    if let Err(err) = JsFuture::from(window.navigator().share_with_data(&data)).await {
        let aborted = err
            .dyn_ref::<DomException>()
            .is_some_and(|e| is_share_cancelled(&e.name()));
        if !aborted {
            log::error!("Share failed: {:?}", err);
        }
    }
}

async fn copy_to_clipboard(text: String) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(&text)).await?;
    Ok(())
}

#[function_component(ShareButtons)]
pub fn share_buttons(props: &ShareButtonsProps) -> Html {
    let copied = use_state(|| false);

    let links = {
        let species = props.species.clone();
        use_memo((props.species.id, props.share_url.clone()), move |(_, share_url)| {
            match share_links(&species, share_url) {
                Ok(links) => Some(links),
                Err(err) => {
                    log::warn!("Hiding share links: {}", err);
                    None
                }
            }
        })
    };

    let on_native_share = {
        let species = props.species.clone();
        let share_url = props.share_url.clone();
        Callback::from(move |_: MouseEvent| {
            spawn_local(native_share(species.clone(), share_url.clone()));
        })
    };

    let on_copy = {
        let copied = copied.clone();
        let text = clipboard_text(&props.species, &props.share_url);
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let text = text.clone();
            spawn_local(async move {
                match copy_to_clipboard(text).await {
                    Ok(()) => {
                        copied.set(true);
                        TimeoutFuture::new(COPY_TIMEOUT_MS).await;
                        copied.set(false);
                    }
                    Err(err) => log::warn!("Copy to clipboard failed: {:?}", err),
                }
            });
        })
    };

    html! {
        <div class={styles::SHARE_SECTION}>
            <p class={styles::SHARE_HEADING}>{"Partage ton résultat"}</p>

            <div class={styles::SHARE_ROW}>
                if props.capability.native_share {
                    <button
                        onclick={on_native_share}
                        class={classes!(styles::SHARE_BUTTON, styles::SHARE_BUTTON_MOTION, styles::SHARE_NATIVE)}
                        title="Partager"
                    >
                        <span class="text-xl">{"📤"}</span>
                    </button>
                }

                if let Some(links) = (*links).as_ref() {
                    {
                        SharePlatform::ALL.iter().map(|&platform| html! {
                            <a
                                key={platform.label()}
                                href={links.get(platform).to_string()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={classes!(styles::SHARE_BUTTON, styles::SHARE_BUTTON_MOTION, platform.background_class())}
                                title={platform.label()}
                            >
                                <span class="text-xl">{platform.glyph()}</span>
                            </a>
                        }).collect::<Html>()
                    }
                }

                <button
                    onclick={on_copy}
                    class={classes!(styles::SHARE_BUTTON, styles::SHARE_BUTTON_MOTION, styles::SHARE_COPY)}
                    title="Copier le lien"
                >
                    <span class="text-xl">{if *copied { "✅" } else { "🔗" }}</span>
                </button>
            </div>
        </div>
    }
}
