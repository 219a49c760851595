use std::collections::HashSet;
use std::str::FromStr;

use gloo_timers::callback::Timeout;
use valean_shared::{
    ApiError, Article, ArticleFilters, ArticleQuery, ArticleStatus, ArticleUpdate, Category,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link, Redirect};

use crate::{
    api,
    articles_context::{DirectoryAction, DirectoryContext},
    components::{
        confirm_dialog::ConfirmDialog, error_banner::ErrorBanner,
        loading_spinner::LoadingSpinner, pagination::Pagination,
    },
    i18n::{admin as t, fill_one},
    lang::use_lang,
    router::Route,
    seo,
    session::{SessionAction, SessionContext},
    utils::display_date,
};

const SEARCH_DEBOUNCE_MS: u32 = 300;

fn status_badge_class(status: ArticleStatus) -> Classes {
    match status {
        ArticleStatus::Draft => classes!("status-badge", "status-draft"),
        ArticleStatus::Published => classes!("status-badge", "status-published"),
    }
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let lang = use_lang();
    let session_ctx = match use_context::<SessionContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };
    let directory_ctx = match use_context::<DirectoryContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };
    let navigator = use_navigator();
    let authenticated = session_ctx.is_authenticated;

    let search_input = use_state(String::new);
    let debounced_search = use_state(String::new);
    let status_filter = use_state(|| None::<ArticleStatus>);
    let category_filter = use_state(|| None::<Category>);
    let tag_filter = use_state(String::new);
    let page = use_state(|| 1_usize);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<Article>);
    // Ids with a toggle or delete still in flight; double clicks are
    // ignored instead of queued.
    let action_inflight = use_state(HashSet::<String>::new);
    // Guards stale list responses from overriding newer ones.
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

    // Fetch one admin page; `None` keeps the current page. Session
    // teardown on 401 happens here, in one place, for every list fetch.
    let refresh = {
        let directory_ctx = directory_ctx.clone();
        let session_ctx = session_ctx.clone();
        let navigator = navigator.clone();
        let loading = loading.clone();
        let error = error.clone();
        let page = page.clone();
        let debounced_search = debounced_search.clone();
        let fetch_seq = fetch_seq.clone();
        Callback::from(move |requested_page: Option<usize>| {
            let directory_ctx = directory_ctx.clone();
            let session_ctx = session_ctx.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            let error = error.clone();
            let fetch_seq = fetch_seq.clone();
            let query =
                ArticleQuery::page(requested_page.unwrap_or(*page)).with_search(&debounced_search);
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
                        web_sys::console::error_1(
                            &format!("Failed to fetch articles: {}", e).into(),
                        );
                        if e.is_auth() {
                            session_ctx.dispatch(SessionAction::LogOut);
                            if let Some(nav) = navigator.as_ref() {
                                nav.push(&Route::Login);
                            }
                        } else {
                            error.set(Some(e.to_string()));
                        }
                    },
                }
                if *fetch_seq.borrow() != request_id {
                    return;
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with(
            (authenticated, *page, (*debounced_search).clone()),
            move |(authenticated, page, _)| {
                if *authenticated {
                    refresh.emit(Some(*page));
                }
                || ()
            },
        );
    }

    // Shared failure path for mutations: surface the message, tear down
    // the session on 401. Never touches the directory cache.
    let handle_mutation_error = {
        let session_ctx = session_ctx.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        Callback::from(move |e: ApiError| {
            web_sys::console::error_1(&format!("Article operation failed: {}", e).into());
            if e.is_auth() {
                session_ctx.dispatch(SessionAction::LogOut);
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&Route::Login);
                }
            } else {
                error.set(Some(e.to_string()));
            }
        })
    };

    // Draft⇄Published flip as a status-only patch. The list refreshes
    // only after the server confirms; nothing is flipped optimistically.
    let on_toggle = {
        let refresh = refresh.clone();
        let handle_mutation_error = handle_mutation_error.clone();
        let action_inflight = action_inflight.clone();
        Callback::from(move |article: Article| {
            if action_inflight.contains(&article.id) {
                return;
            }
            {
                let mut inflight = (*action_inflight).clone();
                inflight.insert(article.id.clone());
                action_inflight.set(inflight);
            }
            let refresh = refresh.clone();
            let handle_mutation_error = handle_mutation_error.clone();
            let action_inflight = action_inflight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let patch = ArticleUpdate::status_only(article.status.toggled());
                match api::update_article(&article.id, &patch).await {
                    Ok(_) => refresh.emit(None),
                    Err(e) => handle_mutation_error.emit(e),
                }
                let mut inflight = (*action_inflight).clone();
                inflight.remove(&article.id);
                action_inflight.set(inflight);
            });
        })
    };

    let request_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |article: Article| {
            pending_delete.set(Some(article));
        })
    };

    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    // Runs only after the blocking confirmation. Hard delete, then a
    // refetch removes the row from the directory.
    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let refresh = refresh.clone();
        let handle_mutation_error = handle_mutation_error.clone();
        let action_inflight = action_inflight.clone();
        Callback::from(move |_| {
            let Some(article) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);
            if action_inflight.contains(&article.id) {
                return;
            }
            {
                let mut inflight = (*action_inflight).clone();
                inflight.insert(article.id.clone());
                action_inflight.set(inflight);
            }
            let refresh = refresh.clone();
            let handle_mutation_error = handle_mutation_error.clone();
            let action_inflight = action_inflight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_article(&article.id).await {
                    Ok(()) => refresh.emit(None),
                    Err(e) => handle_mutation_error.emit(e),
                }
                let mut inflight = (*action_inflight).clone();
                inflight.remove(&article.id);
                action_inflight.set(inflight);
            });
        })
    };

    let on_search_input = {
        let search_input = search_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search_input.set(target.value());
            }
        })
    };

    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                status_filter.set(ArticleStatus::from_str(&target.value()).ok());
            }
        })
    };

    let on_category_change = {
        let category_filter = category_filter.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                category_filter.set(Category::from_str(&target.value()).ok());
            }
        })
    };

    let on_tag_input = {
        let tag_filter = tag_filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                tag_filter.set(target.value());
            }
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };

    if !authenticated {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    // Status/category/tag only narrow the already-fetched page; the
    // server is involved for page, limit and search alone.
    let filters = ArticleFilters {
        status: *status_filter,
        category: *category_filter,
        tag: {
            let trimmed = tag_filter.trim();
            if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
        },
    };
    let rows: Vec<Article> =
        directory_ctx.directory.narrow(&filters).into_iter().cloned().collect();
    let page_info = directory_ctx.directory.page_info().clone();

    html! {
        <main class="page page-admin">
            <div class="admin-toolbar">
                <h1>{ lang.pick(t::TITLE) }</h1>
                <Link<Route> to={Route::AdminArticleNew} classes={classes!("btn-primary")}>
                    { lang.pick(t::NEW_ARTICLE) }
                </Link<Route>>
            </div>

            <div class="admin-filters">
                <input
                    type="search"
                    placeholder={lang.pick(t::SEARCH_PLACEHOLDER)}
                    value={(*search_input).clone()}
                    oninput={on_search_input}
                />
                <select onchange={on_status_change}>
                    <option value="" selected={status_filter.is_none()}>
                        { lang.pick(t::STATUS_ALL) }
                    </option>
                    <option
                        value={ArticleStatus::Draft.as_str()}
                        selected={*status_filter == Some(ArticleStatus::Draft)}
                    >
                        { lang.pick(t::STATUS_DRAFT) }
                    </option>
                    <option
                        value={ArticleStatus::Published.as_str()}
                        selected={*status_filter == Some(ArticleStatus::Published)}
                    >
                        { lang.pick(t::STATUS_PUBLISHED) }
                    </option>
                </select>
                <select onchange={on_category_change}>
                    <option value="" selected={category_filter.is_none()}>
                        { lang.pick(t::CATEGORY_ALL) }
                    </option>
                    { for Category::ALL.iter().map(|item| html! {
                        <option
                            value={item.as_str()}
                            selected={*category_filter == Some(*item)}
                        >
                            { lang.pick(item.label()) }
                        </option>
                    }) }
                </select>
                <input
                    type="text"
                    placeholder={lang.pick(t::TAG_PLACEHOLDER)}
                    value={(*tag_filter).clone()}
                    oninput={on_tag_input}
                />
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
                } else if rows.is_empty() {
                    html! { <p class="empty-state">{ lang.pick(t::EMPTY) }</p> }
                } else {
                    html! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>{ lang.pick(t::COL_TITLE) }</th>
                                    <th>{ lang.pick(t::COL_CATEGORY) }</th>
                                    <th>{ lang.pick(t::COL_STATUS) }</th>
                                    <th>{ lang.pick(t::COL_UPDATED) }</th>
                                    <th>{ lang.pick(t::COL_ACTIONS) }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for rows.iter().map(|article| {
                                    let busy = action_inflight.contains(&article.id);
                                    let toggle_label = match article.status {
                                        ArticleStatus::Draft => lang.pick(t::ACTION_PUBLISH),
                                        ArticleStatus::Published => lang.pick(t::ACTION_UNPUBLISH),
                                    };
                                    let toggle = {
                                        let on_toggle = on_toggle.clone();
                                        let article = article.clone();
                                        Callback::from(move |_| on_toggle.emit(article.clone()))
                                    };
                                    let delete = {
                                        let request_delete = request_delete.clone();
                                        let article = article.clone();
                                        Callback::from(move |_| request_delete.emit(article.clone()))
                                    };
                                    html! {
                                        <tr key={article.id.clone()}>
                                            <td>{ &article.title }</td>
                                            <td>{ lang.pick(article.category.label()) }</td>
                                            <td>
                                                <span class={status_badge_class(article.status)}>
                                                    {
                                                        match article.status {
                                                            ArticleStatus::Draft => lang.pick(t::STATUS_DRAFT),
                                                            ArticleStatus::Published => lang.pick(t::STATUS_PUBLISHED),
                                                        }
                                                    }
                                                </span>
                                            </td>
                                            <td>{ display_date(&article.updated_at) }</td>
                                            <td class="admin-actions">
                                                <button type="button" disabled={busy} onclick={toggle}>
                                                    { toggle_label }
                                                </button>
                                                <Link<Route> to={Route::AdminArticleEdit { id: article.id.clone() }}>
                                                    { lang.pick(t::ACTION_EDIT) }
                                                </Link<Route>>
                                                <button type="button" class="btn-danger" disabled={busy} onclick={delete}>
                                                    { lang.pick(t::ACTION_DELETE) }
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    }
                }
            }

            <Pagination page_info={page_info} on_page_change={on_page_change} />

            {
                if let Some(article) = pending_delete.as_ref() {
                    html! {
                        <ConfirmDialog
                            message={fill_one(lang.pick(t::DELETE_CONFIRM_TEMPLATE), &article.title)}
                            confirm_label={lang.pick(t::DELETE_CONFIRM_OK).to_string()}
                            cancel_label={lang.pick(t::DELETE_CONFIRM_CANCEL).to_string()}
                            on_confirm={confirm_delete.clone()}
                            on_cancel={cancel_delete.clone()}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </main>
    }
}
