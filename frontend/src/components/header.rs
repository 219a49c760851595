use valean_shared::locale::localize_path;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    i18n::header as t,
    lang::{store_lang, LanguageAction, LanguageContext},
    navigation,
    router::Route,
    session::{SessionAction, SessionContext},
};

#[function_component(Header)]
pub fn header() -> Html {
    let lang_ctx = match use_context::<LanguageContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };
    let session = match use_context::<SessionContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };
    let location = use_location();
    let navigator = use_navigator();
    let lang = lang_ctx.current;

    // The switcher performs the same prefix rewrite as the route guard,
    // in the opposite direction: pick the target language, then move to
    // the equivalent path. Common routes stay where they are.
    let switch_language = {
        let lang_ctx = lang_ctx.clone();
        let location = location.clone();
        Callback::from(move |_: MouseEvent| {
            let target = lang_ctx.current.other();
            store_lang(target);
            lang_ctx.dispatch(LanguageAction::Set(target));
            if let Some(path) = location.as_ref().map(|loc| loc.path().to_string()) {
                if let Some(rewritten) = localize_path(&path, target) {
                    if rewritten != path {
                        navigation::push_url(&rewritten);
                    }
                }
            }
        })
    };

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::LogOut);
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
        })
    };

    html! {
        <header class="site-header">
            <Link<Route> to={Route::Home} classes={classes!("site-brand")}>
                { lang.pick(t::BRAND) }
            </Link<Route>>
            <nav class="site-nav" aria-label={lang.pick(t::NAV_MAIN_ARIA)}>
                <Link<Route> to={Route::Home}>{ lang.pick(t::NAV_HOME) }</Link<Route>>
                <Link<Route> to={Route::about(lang)}>{ lang.pick(t::NAV_ABOUT) }</Link<Route>>
                <Link<Route> to={Route::lawyers(lang)}>{ lang.pick(t::NAV_LAWYERS) }</Link<Route>>
                <Link<Route> to={Route::services(lang)}>{ lang.pick(t::NAV_SERVICES) }</Link<Route>>
                <Link<Route> to={Route::news(lang)}>{ lang.pick(t::NAV_NEWS) }</Link<Route>>
                <Link<Route> to={Route::Contact}>{ lang.pick(t::NAV_CONTACT) }</Link<Route>>
                {
                    if session.is_authenticated {
                        html! {
                            <>
                                <Link<Route> to={Route::Admin}>{ lang.pick(t::NAV_ADMIN) }</Link<Route>>
                                <button type="button" class="nav-button" onclick={on_logout}>
                                    { lang.pick(t::LOGOUT) }
                                </button>
                            </>
                        }
                    } else {
                        html! {
                            <Link<Route> to={Route::Login}>{ lang.pick(t::LOGIN) }</Link<Route>>
                        }
                    }
                }
            </nav>
            <button
                type="button"
                class="lang-switch"
                onclick={switch_language}
                aria-label={lang.pick(t::LANG_SWITCH_ARIA)}
            >
                { lang.other().code().to_uppercase() }
            </button>
        </header>
    }
}
