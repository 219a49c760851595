use yew::prelude::*;

use crate::{hooks::use_scroll_to_top, i18n::contact as t, lang::use_lang, seo};

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let lang = use_lang();
    use_scroll_to_top();

    use_effect_with(lang, move |lang| {
        seo::set_page_title(lang.pick(t::TITLE));
        || ()
    });

    html! {
        <main class="page page-contact">
            <h1>{ lang.pick(t::TITLE) }</h1>
            <dl class="contact-list">
                <dt>{ lang.pick(t::ADDRESS_LABEL) }</dt>
                <dd>{ "Str. Dorobanților 18, Cluj-Napoca, România" }</dd>
                <dt>{ lang.pick(t::PHONE_LABEL) }</dt>
                <dd><a href="tel:+40264430210">{ "+40 264 430 210" }</a></dd>
                <dt>{ lang.pick(t::EMAIL_LABEL) }</dt>
                <dd><a href="mailto:office@valean.ro">{ "office@valean.ro" }</a></dd>
                <dt>{ lang.pick(t::SCHEDULE_LABEL) }</dt>
                <dd>{ lang.pick(t::SCHEDULE) }</dd>
            </dl>
        </main>
    }
}
