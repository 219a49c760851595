use valean_shared::Article;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::common as t, lang::use_lang, router::Route, utils::display_date};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let lang = use_lang();
    let article = props.article.clone();
    let detail_route = Route::news_detail(lang, article.slug.clone());

    html! {
        <article class="article-card">
            {
                if let Some(image) = article.cover_image.as_ref() {
                    html! {
                        <Link<Route> to={detail_route.clone()} classes={classes!("article-card-cover")}>
                            <img src={image.clone()} alt={article.title.clone()} loading="lazy" />
                        </Link<Route>>
                    }
                } else {
                    html! {}
                }
            }
            <h3 class="article-card-title">
                <Link<Route> to={detail_route.clone()}>
                    { &article.title }
                </Link<Route>>
            </h3>
            <div class="article-card-meta">
                <span class="article-card-category">{ lang.pick(article.category.label()) }</span>
                <time class="article-card-date">
                    { display_date(article.published_at.as_deref().unwrap_or(&article.created_at)) }
                </time>
            </div>
            {
                if let Some(excerpt) = article.excerpt.as_ref() {
                    html! { <p class="article-card-excerpt">{ excerpt }</p> }
                } else {
                    html! {}
                }
            }
            <div class="article-card-footer">
                <ul class="article-card-tags">
                    { for article.tags.iter().map(|tag| html! {
                        <li class="tag-pill">{ format!("#{}", tag) }</li>
                    }) }
                </ul>
                <Link<Route> to={detail_route} classes={classes!("article-card-more")}>
                    { lang.pick(t::READ_MORE) }
                </Link<Route>>
            </div>
        </article>
    }
}
