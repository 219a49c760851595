use valean_shared::{Article, ArticleFilters, ArticleQuery, ArticleStatus};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        article_card::ArticleCard,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    content::PRACTICE_AREAS,
    hooks::use_scroll_to_top,
    i18n::home as t,
    lang::use_lang,
    router::Route,
    seo,
};

const LATEST_NEWS_COUNT: usize = 3;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let lang = use_lang();
    use_scroll_to_top();

    let latest = use_state(Vec::<Article>::new);
    let loading = use_state(|| true);

    use_effect_with((), move |_| {
        seo::set_page_title("");
        || ()
    });

    {
        let latest = latest.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let query = ArticleQuery {
                    page: 1,
                    limit: LATEST_NEWS_COUNT,
                    search: None,
                };
                match api::fetch_articles(&query).await {
                    Ok(page) => {
                        let published =
                            ArticleFilters::default().with_status(ArticleStatus::Published);
                        latest.set(
                            page.articles
                                .into_iter()
                                .filter(|article| published.accepts(article))
                                .collect(),
                        );
                        loading.set(false);
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch latest news: {}", e).into(),
                        );
                        loading.set(false);
                    },
                }
            });
            || ()
        });
    }

    html! {
        <main class="page page-home">
            <section class="hero">
                <h1>{ lang.pick(t::HERO_TITLE) }</h1>
                <p class="hero-subtitle">{ lang.pick(t::HERO_SUBTITLE) }</p>
            </section>

            <section class="home-areas">
                <h2>{ lang.pick(t::AREAS_TITLE) }</h2>
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
            </section>

            <section class="home-news">
                <h2>{ lang.pick(t::LATEST_NEWS_TITLE) }</h2>
                {
                    if *loading {
                        html! { <LoadingSpinner size={SpinnerSize::Small} /> }
                    } else {
                        html! {
                            <div class="article-grid">
                                { for latest.iter().map(|article| html! {
                                    <ArticleCard key={article.id.clone()} article={article.clone()} />
                                }) }
                            </div>
                        }
                    }
                }
                <Link<Route> to={Route::news(lang)} classes={classes!("all-news-link")}>
                    { lang.pick(t::ALL_NEWS) }
                </Link<Route>>
            </section>
        </main>
    }
}
