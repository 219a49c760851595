//! Language route guard.

use valean_shared::locale::{localize_path, path_lang};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{lang::use_lang, navigation};

/// Reconciles the visited URL with the active language.
///
/// Whenever the current path belongs to the other language's prefix set,
/// the guard rewrites it through the route map and replaces the history
/// entry. The post-redirect path matches the active language, so running
/// the guard again is a no-op; common routes are never touched. The guard
/// only ever changes the URL, never the language.
#[function_component(LanguageGuard)]
pub fn language_guard() -> Html {
    let active = use_lang();
    let location = use_location();
    let path = location.as_ref().map(|loc| loc.path().to_string());

    use_effect_with((path, active), move |(path, active)| {
        if let Some(path) = path.as_deref() {
            if path_lang(path).is_some_and(|found| found != *active) {
                if let Some(target) = localize_path(path, *active) {
                    navigation::replace_url(&target);
                }
            }
        }
        || ()
    });

    html! {}
}
