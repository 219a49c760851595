//! WASM entry point of the Vălean & Asociații website.

mod api;
mod articles_context;
mod components;
mod config;
mod content;
mod guard;
pub mod hooks;
mod i18n;
mod lang;
mod navigation;
mod pages;
mod router;
mod seo;
mod session;
mod utils;

use yew::prelude::*;

use crate::{
    articles_context::ArticleDirectoryProvider, lang::LanguageProvider, session::SessionProvider,
};

#[function_component(App)]
fn app() -> Html {
    html! {
        <LanguageProvider>
            <SessionProvider>
                <ArticleDirectoryProvider>
                    <router::AppRouter />
                </ArticleDirectoryProvider>
            </SessionProvider>
        </LanguageProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
