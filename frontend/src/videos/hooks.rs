use crate::env_variable_utils::LOAD_DELAY_MS;
use crate::videos::loader::{start_load, PendingLoad};
use crate::videos::state::{VideoListAction, VideoListState};
use gloo_timers::callback::Timeout;
use yew::functional::UseReducerHandle;
use yew::prelude::*;

/// Read access to the video list state plus the operations that mutate it.
#[derive(Clone)]
pub struct UseVideosHandle {
    state: UseReducerHandle<VideoListState>,
    pub load: Callback<()>,
    pub set_search_query: Callback<String>,
    pub toggle_sort: Callback<()>,
    pub clear_search: Callback<()>,
    pub record_like: Callback<bool>,
}

impl UseVideosHandle {
    pub fn state(&self) -> &VideoListState {
        &self.state
    }
}

/// Holds the video list and loads the sample set once on mount.
///
/// `load` swaps in the sample data after the configured delay. Only one load
/// is pending at a time, and a pending load is cancelled when the component
/// using this hook unmounts.
#[hook]
pub fn use_videos(initial_query: String) -> UseVideosHandle {
    let state = use_reducer(move || VideoListState {
        search_query: initial_query,
        ..VideoListState::default()
    });
    let pending_load = use_mut_ref(PendingLoad::<Timeout>::default);

    let load = {
        let dispatcher = state.dispatcher();
        let pending_load = pending_load.clone();

        Callback::from(move |_: ()| {
            let delay = *LOAD_DELAY_MS;
            log::info!("Loading videos ({delay} ms)");

            let dispatcher = dispatcher.clone();
            start_load(
                &pending_load,
                move |action| dispatcher.dispatch(action),
                |done| Timeout::new(delay, done),
            );
        })
    };

    // Load on mount, cancel on unmount
    {
        let load = load.clone();
        let pending_load = pending_load.clone();

        use_effect_with((), move |_| {
            load.emit(());
            move || pending_load.borrow_mut().cancel()
        });
    }

    {
        let query = state.search_query.clone();
        use_effect_with(query, |query| {
            log::debug!("Search query changed: {query:?}");
            || ()
        });
    }

    let set_search_query = {
        let dispatcher = state.dispatcher();
        Callback::from(move |query: String| {
            dispatcher.dispatch(VideoListAction::SetSearchQuery(query));
        })
    };

    let toggle_sort = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(VideoListAction::ToggleSort))
    };

    let clear_search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(VideoListAction::ClearSearch))
    };

    let record_like = {
        let dispatcher = state.dispatcher();
        Callback::from(move |liked: bool| {
            dispatcher.dispatch(VideoListAction::RecordLike(liked));
        })
    };

    UseVideosHandle {
        state,
        load,
        set_search_query,
        toggle_sort,
        clear_search,
        record_like,
    }
}
