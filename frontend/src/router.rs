//! Application routes.
//!
//! Bilingual pages get one variant per URL form; the route map in
//! `valean_shared::locale` keeps the two prefix sets in sync with this
//! enum. Contact, login, the admin area and the 404 page are
//! language-neutral common routes.

use valean_shared::Lang;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    guard::LanguageGuard,
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/despre")]
    AboutRo,
    #[at("/about")]
    AboutEn,

    #[at("/avocati")]
    LawyersRo,
    #[at("/lawyers")]
    LawyersEn,
    #[at("/avocati/:slug")]
    LawyerDetailRo { slug: String },
    #[at("/lawyers/:slug")]
    LawyerDetailEn { slug: String },

    #[at("/servicii")]
    ServicesRo,
    #[at("/services")]
    ServicesEn,
    #[at("/servicii/:slug")]
    ServiceDetailRo { slug: String },
    #[at("/services/:slug")]
    ServiceDetailEn { slug: String },

    #[at("/noutati")]
    NewsRo,
    #[at("/news")]
    NewsEn,
    #[at("/noutati/:slug")]
    NewsDetailRo { slug: String },
    #[at("/news/:slug")]
    NewsDetailEn { slug: String },

    #[at("/contact")]
    Contact,
    #[at("/login")]
    Login,

    #[at("/admin")]
    Admin,
    #[at("/admin/articole/new")]
    AdminArticleNew,
    #[at("/admin/articole/:id")]
    AdminArticleEdit { id: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// About page in the given language.
    pub fn about(lang: Lang) -> Self {
        match lang {
            Lang::Ro => Route::AboutRo,
            Lang::En => Route::AboutEn,
        }
    }

    /// Lawyers index in the given language.
    pub fn lawyers(lang: Lang) -> Self {
        match lang {
            Lang::Ro => Route::LawyersRo,
            Lang::En => Route::LawyersEn,
        }
    }

    /// One lawyer's page in the given language.
    pub fn lawyer_detail(lang: Lang, slug: String) -> Self {
        match lang {
            Lang::Ro => Route::LawyerDetailRo { slug },
            Lang::En => Route::LawyerDetailEn { slug },
        }
    }

    /// Services index in the given language.
    pub fn services(lang: Lang) -> Self {
        match lang {
            Lang::Ro => Route::ServicesRo,
            Lang::En => Route::ServicesEn,
        }
    }

    /// One service's page in the given language.
    pub fn service_detail(lang: Lang, slug: String) -> Self {
        match lang {
            Lang::Ro => Route::ServiceDetailRo { slug },
            Lang::En => Route::ServiceDetailEn { slug },
        }
    }

    /// News index in the given language.
    pub fn news(lang: Lang) -> Self {
        match lang {
            Lang::Ro => Route::NewsRo,
            Lang::En => Route::NewsEn,
        }
    }

    /// One article's page in the given language.
    pub fn news_detail(lang: Lang, slug: String) -> Self {
        match lang {
            Lang::Ro => Route::NewsDetailRo { slug },
            Lang::En => Route::NewsDetailEn { slug },
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::AboutRo | Route::AboutEn => html! { <pages::about::AboutPage /> },
        Route::LawyersRo | Route::LawyersEn => html! { <pages::lawyers::LawyersPage /> },
        Route::LawyerDetailRo {
            slug,
        }
        | Route::LawyerDetailEn {
            slug,
        } => {
            html! { <pages::lawyer_detail::LawyerDetailPage slug={slug} /> }
        },
        Route::ServicesRo | Route::ServicesEn => html! { <pages::services::ServicesPage /> },
        Route::ServiceDetailRo {
            slug,
        }
        | Route::ServiceDetailEn {
            slug,
        } => {
            html! { <pages::service_detail::ServiceDetailPage slug={slug} /> }
        },
        Route::NewsRo | Route::NewsEn => html! { <pages::news::NewsPage /> },
        Route::NewsDetailRo {
            slug,
        }
        | Route::NewsDetailEn {
            slug,
        } => {
            html! { <pages::news_detail::NewsDetailPage slug={slug} /> }
        },
        Route::Contact => html! { <pages::contact::ContactPage /> },
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::Admin => html! { <pages::admin::AdminPage /> },
        Route::AdminArticleNew => html! { <pages::admin_editor::AdminEditorPage /> },
        Route::AdminArticleEdit {
            id,
        } => {
            html! { <pages::admin_editor::AdminEditorPage id={id} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <LanguageGuard />
            <div class="app-shell">
                <Header />
                <div class="app-content">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
