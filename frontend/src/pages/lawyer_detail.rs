use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    content::find_lawyer,
    hooks::use_scroll_to_top,
    i18n::{common, lawyers as t},
    lang::use_lang,
    router::Route,
    seo,
};

#[derive(Properties, Clone, PartialEq)]
pub struct LawyerDetailProps {
    pub slug: String,
}

#[function_component(LawyerDetailPage)]
pub fn lawyer_detail_page(props: &LawyerDetailProps) -> Html {
    let lang = use_lang();
    use_scroll_to_top();

    let lawyer = find_lawyer(&props.slug);

    {
        let title = lawyer.map(|l| l.name.to_string());
        use_effect_with((lang, title), move |(lang, title)| {
            match title {
                Some(title) => seo::set_page_title(title),
                None => seo::set_page_title(lang.pick(t::NOT_FOUND)),
            }
            || ()
        });
    }

    let Some(lawyer) = lawyer else {
        return html! {
            <main class="page page-lawyer">
                <p>{ lang.pick(t::NOT_FOUND) }</p>
                <Link<Route> to={Route::lawyers(lang)}>{ lang.pick(common::BACK) }</Link<Route>>
            </main>
        };
    };

    html! {
        <main class="page page-lawyer">
            <Link<Route> to={Route::lawyers(lang)} classes={classes!("back-link")}>
                { lang.pick(common::BACK) }
            </Link<Route>>
            <h1>{ lawyer.name }</h1>
            <p class="lawyer-role">{ lang.pick(lawyer.role) }</p>
            <p class="lawyer-bio">{ lang.pick(lawyer.bio) }</p>
            <h2>{ lang.pick(t::FOCUS_TITLE) }</h2>
            <ul class="lawyer-focus">
                { for lawyer.focus.iter().map(|area| html! { <li>{ lang.pick(*area) }</li> }) }
            </ul>
            <p class="lawyer-email">
                <a href={format!("mailto:{}", lawyer.email)}>{ lawyer.email }</a>
            </p>
        </main>
    }
}
