use valean_shared::Article;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    articles_context::DirectoryContext,
    components::{
        article_view::ArticleView,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::use_scroll_to_top,
    i18n::{common, news as t},
    lang::use_lang,
    router::Route,
    seo,
    utils::display_date,
};

#[derive(Properties, Clone, PartialEq)]
pub struct NewsDetailProps {
    pub slug: String,
}

/// Public article page, reached from the news list or by direct link.
///
/// The directory cache is consulted first — a synchronous lookup with no
/// network fallback of its own. On a miss (deep link, refresh) the page
/// falls back to one by-slug fetch.
#[function_component(NewsDetailPage)]
pub fn news_detail_page(props: &NewsDetailProps) -> Html {
    let lang = use_lang();
    use_scroll_to_top();

    let directory_ctx = match use_context::<DirectoryContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };

    let cached = directory_ctx.directory.find_by_slug(&props.slug).cloned();
    let fetched = use_state(|| None::<Article>);
    let loading = use_state(|| false);

    {
        let fetched = fetched.clone();
        let loading = loading.clone();
        let cache_hit = cached.is_some();
        use_effect_with(props.slug.clone(), move |slug| {
            if !cache_hit {
                let slug = slug.clone();
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_article_by_slug(&slug).await {
                        Ok(article) => {
                            fetched.set(article);
                            loading.set(false);
                        },
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch article: {}", e).into(),
                            );
                            fetched.set(None);
                            loading.set(false);
                        },
                    }
                });
            }
            || ()
        });
    }

    let article = cached.or_else(|| (*fetched).clone());

    {
        let title = article.as_ref().map(|a| a.title.clone());
        use_effect_with((lang, title), move |(lang, title)| {
            match title {
                Some(title) => seo::set_page_title(title),
                None => seo::set_page_title(lang.pick(t::TITLE)),
            }
            || ()
        });
    }

    if *loading {
        return html! {
            <main class="page page-news-detail">
                <LoadingSpinner size={SpinnerSize::Large} />
            </main>
        };
    }

    let Some(article) = article else {
        return html! {
            <main class="page page-news-detail">
                <p>{ lang.pick(t::NOT_FOUND) }</p>
                <Link<Route> to={Route::news(lang)}>{ lang.pick(common::BACK) }</Link<Route>>
            </main>
        };
    };

    let date =
        display_date(article.published_at.as_deref().unwrap_or(&article.created_at)).to_string();

    html! {
        <main class="page page-news-detail">
            <Link<Route> to={Route::news(lang)} classes={classes!("back-link")}>
                { lang.pick(common::BACK) }
            </Link<Route>>
            <ArticleView
                title={article.title.clone()}
                excerpt={article.excerpt.clone()}
                category={article.category}
                tags={article.tags.clone()}
                cover_image={article.cover_image.clone()}
                date={date}
                content={article.content.clone()}
                author={article.author.clone()}
            />
        </main>
    }
}
