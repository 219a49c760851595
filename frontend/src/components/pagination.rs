use valean_shared::PageInfo;
use yew::prelude::*;

use crate::{
    i18n::{fill_one, pagination as t},
    lang::use_lang,
};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Metadata of the page currently shown.
    pub page_info: PageInfo,
    pub on_page_change: Callback<usize>,
}

enum PageSlot {
    Page(usize),
    Ellipsis(&'static str),
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let lang = use_lang();

    let total_pages = props.page_info.total_pages;
    if total_pages <= 1 {
        return Html::default();
    }

    let current_page = props.page_info.current_page.clamp(1, total_pages);
    let slots = visible_slots(current_page, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_disabled = !props.page_info.has_prev || current_page <= 1;
    let next_disabled = !props.page_info.has_next || current_page >= total_pages;

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    html! {
        <nav class="pagination" aria-label={lang.pick(t::ARIA_NAV)}>
            <button
                type="button"
                class="pagination-button"
                disabled={prev_disabled}
                onclick={prev_onclick}
                aria-label={lang.pick(t::ARIA_PREV)}
            >
                {"<"}
            </button>
            <div class="pagination-pages">
                { for slots.into_iter().map(|slot| match slot {
                    PageSlot::Page(page) => {
                        let onclick = {
                            let on_page_change = on_page_change.clone();
                            Callback::from(move |_| on_page_change.emit(page))
                        };

                        html! {
                            <button
                                key={format!("page-{page}")}
                                type="button"
                                class={classes!(
                                    "pagination-button",
                                    (page == current_page).then_some("pagination-current"),
                                )}
                                aria-label={fill_one(lang.pick(t::ARIA_GOTO_PAGE_TEMPLATE), page)}
                                aria-current={if page == current_page {
                                    Some(AttrValue::from("page"))
                                } else {
                                    None
                                }}
                                disabled={page == current_page}
                                onclick={onclick}
                            >
                                { page }
                            </button>
                        }
                    }
                    PageSlot::Ellipsis(id) => html! {
                        <span
                            key={format!("ellipsis-{id}-{current_page}")}
                            class="pagination-ellipsis"
                            aria-hidden="true"
                        >
                            {"..."}
                        </span>
                    },
                }) }
            </div>
            <button
                type="button"
                class="pagination-button"
                disabled={next_disabled}
                onclick={next_onclick}
                aria-label={lang.pick(t::ARIA_NEXT)}
            >
                {">"}
            </button>
        </nav>
    }
}

fn visible_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = Vec::new();
    slots.push(PageSlot::Page(1));

    let mut start = current.saturating_sub(2).max(2);
    let mut end = (current + 2).min(total - 1);

    if current <= 3 {
        start = 2;
        end = 5;
    } else if current + 2 >= total {
        start = total.saturating_sub(4).max(2);
        end = total - 1;
    }

    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }

    for page in start..=end {
        slots.push(PageSlot::Page(page));
    }

    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }

    slots.push(PageSlot::Page(total));

    slots
}
