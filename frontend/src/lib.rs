pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use yew_router::prelude::*;
use shared::species::bundled;
use crate::components::DatasetError;
use crate::pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home => match bundled() {
           Ok(dataset) => html! { <Home {dataset} /> },
           Err(err) => {
               // A broken dataset keeps the game from ever becoming interactive
               log::error!("Failed to load species dataset: {}", err);
               html! { <DatasetError message={err.to_string()} /> }
           }
       },
       Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
   }
}
