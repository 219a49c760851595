use valean_shared::Category;
use yew::prelude::*;

use crate::{
    components::article_body::ArticleBody,
    i18n::{fill_one, news as t},
    lang::use_lang,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleViewProps {
    pub title: String,
    #[prop_or_default]
    pub excerpt: Option<String>,
    pub category: Category,
    #[prop_or_default]
    pub tags: Vec<String>,
    #[prop_or_default]
    pub cover_image: Option<String>,
    /// Display date, already formatted. Empty hides the date line.
    #[prop_or_default]
    pub date: String,
    /// Raw article HTML; sanitized by [`ArticleBody`].
    pub content: String,
    pub author: String,
}

/// The public article template. The news detail page renders fetched
/// articles through it, and the editor's live preview renders the form
/// state through the very same component, so what the author sees is what
/// readers get.
#[function_component(ArticleView)]
pub fn article_view(props: &ArticleViewProps) -> Html {
    let lang = use_lang();

    html! {
        <article class="article-view">
            <header class="article-view-header">
                <span class="article-view-category">{ lang.pick(props.category.label()) }</span>
                <h1 class="article-view-title">{ &props.title }</h1>
                {
                    if let Some(excerpt) = props.excerpt.as_ref() {
                        html! { <p class="article-view-excerpt">{ excerpt }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="article-view-meta">
                    <span class="article-view-author">{ &props.author }</span>
                    {
                        if props.date.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <time class="article-view-date">
                                    { fill_one(lang.pick(t::PUBLISHED_ON_TEMPLATE), &props.date) }
                                </time>
                            }
                        }
                    }
                </div>
            </header>
            {
                if let Some(cover) = props.cover_image.as_ref() {
                    html! {
                        <img class="article-view-cover" src={cover.clone()} alt={props.title.clone()} />
                    }
                } else {
                    html! {}
                }
            }
            <ArticleBody html={props.content.clone()} />
            {
                if props.tags.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="article-view-tags">
                            { for props.tags.iter().map(|tag| html! {
                                <li class="tag-pill">{ format!("#{}", tag) }</li>
                            }) }
                        </ul>
                    }
                }
            }
        </article>
    }
}
