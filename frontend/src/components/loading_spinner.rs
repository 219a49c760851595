use yew::prelude::*;

use crate::{i18n::common as t, lang::use_lang};

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 24,
            SpinnerSize::Medium => 40,
            SpinnerSize::Large => 56,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let lang = use_lang();
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    html! {
        <div
            class={classes!("loading-spinner")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div style={spinner_style} class={classes!("loading-spinner-ring")} />
            <span class="sr-only">{ lang.pick(t::LOADING) }</span>
        </div>
    }
}
