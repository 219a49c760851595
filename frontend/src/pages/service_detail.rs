use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    content::find_practice_area,
    hooks::use_scroll_to_top,
    i18n::{common, services as t},
    lang::use_lang,
    router::Route,
    seo,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetailPage)]
pub fn service_detail_page(props: &ServiceDetailProps) -> Html {
    let lang = use_lang();
    use_scroll_to_top();

    let area = find_practice_area(&props.slug);

    {
        let title = area.map(|a| lang.pick(a.name).to_string());
        use_effect_with((lang, title), move |(lang, title)| {
            match title {
                Some(title) => seo::set_page_title(title),
                None => seo::set_page_title(lang.pick(t::NOT_FOUND)),
            }
            || ()
        });
    }

    let Some(area) = area else {
        return html! {
            <main class="page page-service">
                <p>{ lang.pick(t::NOT_FOUND) }</p>
                <Link<Route> to={Route::services(lang)}>{ lang.pick(common::BACK) }</Link<Route>>
            </main>
        };
    };

    html! {
        <main class="page page-service">
            <Link<Route> to={Route::services(lang)} classes={classes!("back-link")}>
                { lang.pick(common::BACK) }
            </Link<Route>>
            <h1>{ lang.pick(area.name) }</h1>
            <p class="lead">{ lang.pick(area.summary) }</p>
            { for area.details.iter().map(|detail| html! { <p>{ lang.pick(*detail) }</p> }) }
        </main>
    }
}
