use yew::prelude::*;
use yew::use_effect_with;
use yew_hooks::prelude::use_timeout;

use crate::{i18n::common as t, lang::use_lang};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

/// Transient notification for failed operations. Auto-dismisses after a
/// few seconds unless disabled; reopens whenever the message changes.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let lang = use_lang();
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 5000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div class={classes!("error-banner")} role="alert" aria-live="assertive">
            <div class="error-banner-text">
                <p class="error-banner-title">{ lang.pick(t::ERROR_TITLE) }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="error-banner-close"
                aria-label={lang.pick(t::CLOSE_ARIA)}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
