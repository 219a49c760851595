use web_sys::Element;
use yew::prelude::*;

use crate::utils::sanitize_html;

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleBodyProps {
    /// Raw article HTML as stored by the editor.
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Render an article's rich-HTML body into a host element without letting
/// Yew diff its children. The HTML is sanitized on every change before it
/// reaches `set_inner_html`.
#[function_component(ArticleBody)]
pub fn article_body(props: &ArticleBodyProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        let html = props.html.clone();
        use_effect_with(html.clone(), move |next_html| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(&sanitize_html(next_html.as_str()));
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={classes!("article-body", props.class.clone())} />
    }
}
