use std::str::FromStr;

use gloo_timers::callback::Timeout;
use valean_shared::{Article, ArticleFilters, ArticleQuery, ArticleStatus, Category};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{
    api,
    articles_context::{DirectoryAction, DirectoryContext},
    components::{
        article_card::ArticleCard, error_banner::ErrorBanner, loading_spinner::LoadingSpinner,
        pagination::Pagination,
    },
    hooks::use_scroll_to_top,
    i18n::news as t,
    lang::use_lang,
    seo,
};

/// Delay before a search keystroke triggers a fetch. Purely to cut down
/// redundant requests while typing, not a correctness measure.
const SEARCH_DEBOUNCE_MS: u32 = 300;

#[function_component(NewsPage)]
pub fn news_page() -> Html {
    let lang = use_lang();
    use_scroll_to_top();

    let directory_ctx = match use_context::<DirectoryContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };

    let search_input = use_state(String::new);
    let debounced_search = use_state(String::new);
    let category = use_state(|| None::<Category>);
    let page = use_state(|| 1_usize);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    // Guards stale responses: only the answer to the latest request may
    // touch state, whether it was superseded or the page unmounted.
    let fetch_seq = use_mut_ref(|| 0_u64);

    use_effect_with(lang, move |lang| {
        seo::set_page_title(lang.pick(t::TITLE));
        || ()
    });

    {
        let debounced_search = debounced_search.clone();
        let page = page.clone();
        use_effect_with((*search_input).clone(), move |value| {
            let value = value.clone();
            let handle = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                if *debounced_search != value {
                    debounced_search.set(value);
                    page.set(1);
                }
            });
            move || drop(handle)
        });
    }

    {
        let directory_ctx = directory_ctx.clone();
        let loading = loading.clone();
        let error = error.clone();
        let fetch_seq = fetch_seq.clone();
        let load_failed = lang.pick(t::LOAD_FAILED).to_string();
        use_effect_with((*page, (*debounced_search).clone()), move |(page, search)| {
            let query = ArticleQuery::page(*page).with_search(search);
            let request_id = {
                let mut seq = fetch_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_articles(&query).await {
                    Ok(result) => {
                        if *fetch_seq.borrow() != request_id {
                            return;
                        }
                        directory_ctx.dispatch(DirectoryAction::Replace(result));
                        error.set(None);
                    },
                    Err(e) => {
                        if *fetch_seq.borrow() != request_id {
                            return;
                        }
                        web_sys::console::error_1(&format!("Failed to fetch news: {}", e).into());
                        error.set(Some(load_failed));
                    },
                }
                if *fetch_seq.borrow() != request_id {
                    return;
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_search_input = {
        let search_input = search_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search_input.set(target.value());
            }
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                category.set(Category::from_str(&target.value()).ok());
            }
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };

    // Visitors only ever see published articles; the category filter
    // narrows within the current server page, it does not refetch.
    let filters = ArticleFilters {
        status: Some(ArticleStatus::Published),
        category: *category,
        tag: None,
    };
    let visible: Vec<Article> =
        directory_ctx.directory.narrow(&filters).into_iter().cloned().collect();
    let page_info = directory_ctx.directory.page_info().clone();

    html! {
        <main class="page page-news">
            <h1>{ lang.pick(t::TITLE) }</h1>

            <div class="news-toolbar">
                <input
                    type="search"
                    class="news-search"
                    placeholder={lang.pick(t::SEARCH_PLACEHOLDER)}
                    value={(*search_input).clone()}
                    oninput={on_search_input}
                />
                <select class="news-category" onchange={on_category_change}>
                    <option value="" selected={category.is_none()}>
                        { lang.pick(t::CATEGORY_ALL) }
                    </option>
                    { for Category::ALL.iter().map(|item| html! {
                        <option
                            value={item.as_str()}
                            selected={*category == Some(*item)}
                        >
                            { lang.pick(item.label()) }
                        </option>
                    }) }
                </select>
            </div>

            {
                if let Some(message) = error.as_ref() {
                    html! { <ErrorBanner message={message.clone()} /> }
                } else {
                    html! {}
                }
            }

            {
                if *loading {
                    html! { <LoadingSpinner /> }
                } else if visible.is_empty() {
                    html! { <p class="empty-state">{ lang.pick(t::EMPTY) }</p> }
                } else {
                    html! {
                        <div class="article-grid">
                            { for visible.iter().map(|article| html! {
                                <ArticleCard key={article.id.clone()} article={article.clone()} />
                            }) }
                        </div>
                    }
                }
            }

            <Pagination page_info={page_info} on_page_change={on_page_change} />
        </main>
    }
}
