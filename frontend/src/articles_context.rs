//! Article directory context: the shared client cache of the last fetched
//! article page.
//!
//! Pages never patch individual entries. After every successful mutation
//! they refetch and dispatch [`DirectoryAction::Replace`], so the cache
//! only ever reflects server-confirmed state.

use std::rc::Rc;

use valean_shared::{ArticleDirectory, ArticlePage};
use yew::prelude::*;

/// Directory state published through a [`ContextProvider`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryState {
    pub directory: ArticleDirectory,
}

/// Actions on the directory state.
pub enum DirectoryAction {
    /// Replace the whole cache with a freshly fetched page.
    Replace(ArticlePage),
}

impl Reducible for DirectoryState {
    type Action = DirectoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DirectoryAction::Replace(page) => {
                let mut directory = self.directory.clone();
                directory.apply(page);
                Rc::new(DirectoryState { directory })
            },
        }
    }
}

/// Handle to the article directory context.
pub type DirectoryContext = UseReducerHandle<DirectoryState>;

#[derive(Properties, PartialEq)]
pub struct ArticleDirectoryProviderProps {
    pub children: Html,
}

/// Provides an empty article directory; pages populate it by fetching.
#[function_component(ArticleDirectoryProvider)]
pub fn article_directory_provider(props: &ArticleDirectoryProviderProps) -> Html {
    let state = use_reducer(DirectoryState::default);
    html! {
        <ContextProvider<DirectoryContext> context={state}>
            {props.children.clone()}
        </ContextProvider<DirectoryContext>>
    }
}
