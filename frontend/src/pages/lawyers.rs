use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    content::LAWYERS, hooks::use_scroll_to_top, i18n::lawyers as t, lang::use_lang, router::Route,
    seo,
};

#[function_component(LawyersPage)]
pub fn lawyers_page() -> Html {
    let lang = use_lang();
    use_scroll_to_top();

    use_effect_with(lang, move |lang| {
        seo::set_page_title(lang.pick(t::TITLE));
        || ()
    });

    html! {
        <main class="page page-lawyers">
            <h1>{ lang.pick(t::TITLE) }</h1>
            <div class="lawyer-grid">
                { for LAWYERS.iter().map(|lawyer| {
                    let detail = Route::lawyer_detail(lang, lawyer.slug.to_string());
                    html! {
                        <article class="lawyer-card" key={lawyer.slug}>
                            <h3>
                                <Link<Route> to={detail}>{ lawyer.name }</Link<Route>>
                            </h3>
                            <p class="lawyer-role">{ lang.pick(lawyer.role) }</p>
                            <p class="lawyer-bio">{ lang.pick(lawyer.bio) }</p>
                        </article>
                    }
                }) }
            </div>
        </main>
    }
}
