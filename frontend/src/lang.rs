//! Language context: the single process-wide current language.
//!
//! The choice persists in `localStorage` so a returning visitor keeps
//! their language across reloads. Only the header's switcher dispatches a
//! change; the route guard reads the language but never writes it.

use std::rc::Rc;

use valean_shared::Lang;
use web_sys::window;
use yew::prelude::*;

const LANG_KEY: &str = "va:lang";

/// Current language, published through a [`ContextProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageState {
    pub current: Lang,
}

/// Actions on the language state.
pub enum LanguageAction {
    /// Switch to the given language.
    Set(Lang),
}

impl Reducible for LanguageState {
    type Action = LanguageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LanguageAction::Set(lang) => Rc::new(LanguageState { current: lang }),
        }
    }
}

/// Handle to the language context.
pub type LanguageContext = UseReducerHandle<LanguageState>;

/// Read the persisted language choice, if any.
fn stored_lang() -> Option<Lang> {
    window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANG_KEY).ok().flatten())
        .and_then(|code| Lang::from_code(&code))
}

/// Persist the language choice for future sessions.
pub fn store_lang(lang: Lang) {
    if let Some(storage) = window().and_then(|win| win.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANG_KEY, lang.code());
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Html,
}

/// Provides the language context, rehydrated from storage at startup.
#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let state = use_reducer(|| LanguageState {
        current: stored_lang().unwrap_or_default(),
    });
    html! {
        <ContextProvider<LanguageContext> context={state}>
            {props.children.clone()}
        </ContextProvider<LanguageContext>>
    }
}

/// The active language, `Lang::Ro` when rendered outside the provider.
#[hook]
pub fn use_lang() -> Lang {
    use_context::<LanguageContext>().map(|ctx| ctx.current).unwrap_or_default()
}
