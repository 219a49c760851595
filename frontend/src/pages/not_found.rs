use yew::prelude::*;

use crate::{i18n::not_found as t, lang::use_lang};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let lang = use_lang();

    html! {
        <main class="page page-not-found">
            <h2>{ lang.pick(t::TITLE) }</h2>
            <p>{ lang.pick(t::BODY) }</p>
        </main>
    }
}
