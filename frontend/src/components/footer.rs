use yew::prelude::*;

use crate::{i18n::footer as t, lang::use_lang};

#[function_component(Footer)]
pub fn footer() -> Html {
    let lang = use_lang();

    html! {
        <footer class="site-footer">
            <p class="site-footer-tagline">{ lang.pick(t::TAGLINE) }</p>
            <p class="site-footer-rights">{ lang.pick(t::RIGHTS) }</p>
        </footer>
    }
}
