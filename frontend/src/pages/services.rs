use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    content::PRACTICE_AREAS, hooks::use_scroll_to_top, i18n::services as t, lang::use_lang,
    router::Route, seo,
};

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let lang = use_lang();
    use_scroll_to_top();

    use_effect_with(lang, move |lang| {
        seo::set_page_title(lang.pick(t::TITLE));
        || ()
    });

    html! {
        <main class="page page-services">
            <h1>{ lang.pick(t::TITLE) }</h1>
            <div class="service-grid">
                { for PRACTICE_AREAS.iter().map(|area| {
                    let detail = Route::service_detail(lang, area.slug.to_string());
                    html! {
                        <article class="service-card" key={area.slug}>
                            <h3>
                                <Link<Route> to={detail}>{ lang.pick(area.name) }</Link<Route>>
                            </h3>
                            <p>{ lang.pick(area.summary) }</p>
                        </article>
                    }
                }) }
            </div>
        </main>
    }
}
