use yew::prelude::*;

use crate::{hooks::use_scroll_to_top, i18n::about as t, lang::use_lang, seo};

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let lang = use_lang();
    use_scroll_to_top();

    use_effect_with(lang, move |lang| {
        seo::set_page_title(lang.pick(t::TITLE));
        || ()
    });

    html! {
        <main class="page page-about">
            <h1>{ lang.pick(t::TITLE) }</h1>
            <p class="lead">{ lang.pick(t::BODY_LEAD) }</p>
            <p>{ lang.pick(t::BODY_VALUES) }</p>
        </main>
    }
}
