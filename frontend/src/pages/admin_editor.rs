use std::str::FromStr;

use valean_shared::{
    slugify, Article, ArticleDraft, ArticleQuery, ArticleStatus, ArticleUpdate, Category,
    validate_required,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Redirect};

use crate::{
    api,
    articles_context::{DirectoryAction, DirectoryContext},
    components::{article_view::ArticleView, error_banner::ErrorBanner,
        loading_spinner::LoadingSpinner},
    i18n::editor as t,
    lang::use_lang,
    router::Route,
    seo,
    session::{SessionAction, SessionContext},
    utils::{display_date, parse_tags},
};

#[derive(Properties, Clone, PartialEq)]
pub struct AdminEditorProps {
    /// Id of the article being edited; absent when composing a new one.
    #[prop_or_default]
    pub id: Option<String>,
}

/// Split-pane article editor: raw fields on the left, the public article
/// template rendering the same data on the right.
///
/// The slug is derived from the title while the article is brand-new and
/// frozen once it exists, so published URLs survive title edits. Saving
/// always goes through one of two explicit actions — draft or publish —
/// and a failure of any kind leaves the form state untouched.
#[function_component(AdminEditorPage)]
pub fn admin_editor_page(props: &AdminEditorProps) -> Html {
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
    let is_new = props.id.is_none();

    let existing = use_state(|| None::<Article>);
    let loading = use_state(|| false);
    let load_failed = use_state(|| false);

    let title = use_state(String::new);
    let excerpt = use_state(String::new);
    let content = use_state(String::new);
    let category = use_state(|| Category::LegalUpdates);
    let tags_input = use_state(String::new);
    let cover_image = use_state(|| None::<String>);

    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let is_new = is_new;
        use_effect_with((lang, is_new), move |(lang, is_new)| {
            let title = if *is_new { t::TITLE_NEW } else { t::TITLE_EDIT };
            seo::set_page_title(lang.pick(title));
            || ()
        });
    }

    let populate = {
        let existing = existing.clone();
        let title = title.clone();
        let excerpt = excerpt.clone();
        let content = content.clone();
        let category = category.clone();
        let tags_input = tags_input.clone();
        let cover_image = cover_image.clone();
        Callback::from(move |article: Article| {
            title.set(article.title.clone());
            excerpt.set(article.excerpt.clone().unwrap_or_default());
            content.set(article.content.clone());
            category.set(article.category);
            tags_input.set(article.tags.join(", "));
            cover_image.set(article.cover_image.clone());
            existing.set(Some(article));
        })
    };

    // Load the article being edited: directory cache first (synchronous),
    // by-id fetch on a miss.
    {
        let directory_ctx = directory_ctx.clone();
        let populate = populate.clone();
        let loading = loading.clone();
        let load_failed = load_failed.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                if let Some(article) = directory_ctx.directory.get(&id).cloned() {
                    populate.emit(article);
                } else {
                    loading.set(true);
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::fetch_article(&id).await {
                            Ok(Some(article)) => populate.emit(article),
                            Ok(None) => load_failed.set(true),
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Failed to fetch article: {}", e).into(),
                                );
                                load_failed.set(true);
                            },
                        }
                        loading.set(false);
                    });
                }
            }
            || ()
        });
    }

    // The slug only tracks the title while the article does not exist yet.
    let slug = match existing.as_ref() {
        Some(article) => article.slug.clone(),
        None => slugify(&title),
    };

    let on_save = {
        let existing = existing.clone();
        let title = title.clone();
        let excerpt = excerpt.clone();
        let content = content.clone();
        let category = category.clone();
        let tags_input = tags_input.clone();
        let cover_image = cover_image.clone();
        let saving = saving.clone();
        let error = error.clone();
        let session_ctx = session_ctx.clone();
        let directory_ctx = directory_ctx.clone();
        let navigator = navigator.clone();
        Callback::from(move |status: ArticleStatus| {
            if *saving {
                return;
            }
            let title_value = (*title).clone();
            let content_value = (*content).clone();
            // Validation never reaches the network.
            if let Err(e) = validate_required(&title_value, &content_value) {
                error.set(Some(e.to_string()));
                return;
            }
            let excerpt_value = excerpt.trim().to_string();
            let excerpt_value =
                if excerpt_value.is_empty() { None } else { Some(excerpt_value) };
            let tags = parse_tags(&tags_input);
            let category_value = *category;
            let cover = (*cover_image).clone();
            let existing_article = (*existing).clone();

            let saving = saving.clone();
            let error = error.clone();
            let session_ctx = session_ctx.clone();
            let directory_ctx = directory_ctx.clone();
            let navigator = navigator.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match existing_article {
                    Some(article) => {
                        let update = ArticleUpdate {
                            title: Some(title_value),
                            content: Some(content_value),
                            excerpt: excerpt_value,
                            category: Some(category_value),
                            tags: Some(tags),
                            cover_image: cover,
                            status: Some(status),
                        };
                        api::update_article(&article.id, &update).await.map(|_| ())
                    },
                    None => {
                        let draft = ArticleDraft {
                            slug: slugify(&title_value),
                            title: title_value,
                            content: content_value,
                            excerpt: excerpt_value,
                            category: category_value,
                            tags,
                            cover_image: cover,
                            status,
                        };
                        api::create_article(&draft).await.map(|_| ())
                    },
                };

                match result {
                    Ok(()) => {
                        // Resynchronize the directory with the server
                        // before returning to the list, so the admin page
                        // shows confirmed state the moment it mounts.
                        match api::fetch_articles(&ArticleQuery::page(1)).await {
                            Ok(page) => directory_ctx.dispatch(DirectoryAction::Replace(page)),
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Failed to refetch articles: {}", e).into(),
                                );
                            },
                        }
                        if let Some(nav) = navigator.as_ref() {
                            nav.push(&Route::Admin);
                        }
                    },
                    Err(e) => {
                        // Form state stays intact so nothing typed is lost.
                        web_sys::console::error_1(
                            &format!("Failed to save article: {}", e).into(),
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
                saving.set(false);
            });
        })
    };

    let save_draft = {
        let on_save = on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(ArticleStatus::Draft))
    };

    let publish = {
        let on_save = on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(ArticleStatus::Published))
    };

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                title.set(target.value());
            }
        })
    };

    let on_excerpt_input = {
        let excerpt = excerpt.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                excerpt.set(target.value());
            }
        })
    };

    let on_content_input = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                content.set(target.value());
            }
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(parsed) = Category::from_str(&target.value()) {
                    category.set(parsed);
                }
            }
        })
    };

    let on_tags_input = {
        let tags_input = tags_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                tags_input.set(target.value());
            }
        })
    };

    // Direct base64 passthrough: the chosen file becomes a data URI and is
    // stored as-is. No resizing or processing client-side.
    let on_cover_change = {
        let cover_image = cover_image.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Ok(reader) = web_sys::FileReader::new() else {
                return;
            };
            let reader_handle = reader.clone();
            let cover_image = cover_image.clone();
            let onloadend = wasm_bindgen::closure::Closure::wrap(Box::new(
                move |_event: web_sys::ProgressEvent| {
                    if let Ok(result) = reader_handle.result() {
                        if let Some(data_url) = result.as_string() {
                            cover_image.set(Some(data_url));
                        }
                    }
                },
            )
                as Box<dyn FnMut(_)>);
            reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
            onloadend.forget();
            let _ = reader.read_as_data_url(&file);
        })
    };

    if !authenticated {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    if *loading {
        return html! {
            <main class="page page-editor">
                <LoadingSpinner />
            </main>
        };
    }

    if *load_failed {
        return html! {
            <main class="page page-editor">
                <p>{ lang.pick(t::LOAD_FAILED) }</p>
            </main>
        };
    }

    let heading = if is_new { t::TITLE_NEW } else { t::TITLE_EDIT };
    let preview_ready = !title.trim().is_empty() && !content.trim().is_empty();
    let preview_date = existing
        .as_ref()
        .map(|article| {
            display_date(article.published_at.as_deref().unwrap_or(&article.created_at))
                .to_string()
        })
        .unwrap_or_default();
    let preview_author = existing
        .as_ref()
        .map(|article| article.author.clone())
        .or_else(|| session_ctx.user.as_ref().map(|user| user.name.clone()))
        .unwrap_or_default();

    html! {
        <main class="page page-editor">
            <h1>{ lang.pick(heading) }</h1>

            {
                if let Some(message) = error.as_ref() {
                    html! { <ErrorBanner message={message.clone()} /> }
                } else {
                    html! {}
                }
            }

            <div class="editor-split">
                <form class="editor-form" onsubmit={Callback::from(|event: SubmitEvent| event.prevent_default())}>
                    <label for="editor-title">{ lang.pick(t::FIELD_TITLE) }</label>
                    <input
                        id="editor-title"
                        type="text"
                        value={(*title).clone()}
                        oninput={on_title_input}
                    />

                    <label for="editor-slug">{ lang.pick(t::FIELD_SLUG) }</label>
                    <input id="editor-slug" type="text" value={slug.clone()} readonly=true />
                    <p class="field-hint">{ lang.pick(t::SLUG_HINT) }</p>

                    <label for="editor-excerpt">{ lang.pick(t::FIELD_EXCERPT) }</label>
                    <textarea
                        id="editor-excerpt"
                        rows="3"
                        value={(*excerpt).clone()}
                        oninput={on_excerpt_input}
                    />

                    <label for="editor-content">{ lang.pick(t::FIELD_CONTENT) }</label>
                    <textarea
                        id="editor-content"
                        rows="16"
                        value={(*content).clone()}
                        oninput={on_content_input}
                    />

                    <label for="editor-category">{ lang.pick(t::FIELD_CATEGORY) }</label>
                    <select id="editor-category" onchange={on_category_change}>
                        { for Category::ALL.iter().map(|item| html! {
                            <option value={item.as_str()} selected={*category == *item}>
                                { lang.pick(item.label()) }
                            </option>
                        }) }
                    </select>

                    <label for="editor-tags">{ lang.pick(t::FIELD_TAGS) }</label>
                    <input
                        id="editor-tags"
                        type="text"
                        value={(*tags_input).clone()}
                        oninput={on_tags_input}
                    />

                    <label for="editor-cover">{ lang.pick(t::FIELD_COVER) }</label>
                    <input id="editor-cover" type="file" accept="image/*" onchange={on_cover_change} />

                    <div class="editor-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled={*saving}
                            onclick={save_draft}
                        >
                            { lang.pick(t::SAVE_DRAFT) }
                        </button>
                        <button
                            type="button"
                            class="btn-primary"
                            disabled={*saving}
                            onclick={publish}
                        >
                            { lang.pick(t::PUBLISH) }
                        </button>
                    </div>
                </form>

                <section class="editor-preview" aria-label={lang.pick(t::PREVIEW_TITLE)}>
                    <h2>{ lang.pick(t::PREVIEW_TITLE) }</h2>
                    {
                        if preview_ready {
                            html! {
                                <ArticleView
                                    title={(*title).clone()}
                                    excerpt={
                                        if excerpt.trim().is_empty() {
                                            None
                                        } else {
                                            Some((*excerpt).clone())
                                        }
                                    }
                                    category={*category}
                                    tags={parse_tags(&tags_input)}
                                    cover_image={(*cover_image).clone()}
                                    date={preview_date.clone()}
                                    content={(*content).clone()}
                                    author={preview_author.clone()}
                                />
                            }
                        } else {
                            html! { <p class="empty-state">{ lang.pick(t::PREVIEW_EMPTY) }</p> }
                        }
                    }
                </section>
            </div>
        </main>
    }
}
