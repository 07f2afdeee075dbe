use crate::env_variable_utils::APP_NAME;
use crate::models::VideoRecord;
use crate::videos::components::{SearchBar, VideoControls, VideoGrid};
use crate::videos::hooks::use_videos;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <VideoListApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to the videos"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

fn get_query_param() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().get("q")
}

// Mirrors the search query into `?q=` without adding history entries.
fn update_url_query(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return;
    };

    let search_params = url.search_params();
    if query.is_empty() {
        search_params.delete("q");
    } else {
        search_params.set("q", query);
    }

    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url.href()));
    }
}

#[function_component(VideoListApp)]
pub fn video_list_app() -> Html {
    // The URL is only read on the first render
    let initial_query = use_state(|| get_query_param().unwrap_or_default());
    let videos = use_videos((*initial_query).clone());
    let state = videos.state();

    // Keep the URL in step with the query
    {
        let query = state.search_query.clone();
        use_effect_with(query, |query| {
            update_url_query(query);
            || ()
        });
    }

    let visible: Vec<VideoRecord> = state.visible_videos().into_iter().cloned().collect();

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-4xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    { APP_NAME.as_str() }
                </h1>

                <SearchBar
                    query={state.search_query.clone()}
                    on_search={videos.set_search_query.clone()}
                    on_clear={videos.clear_search.clone()}
                />

                <VideoControls
                    sort_by_views={state.sort_by_views}
                    visible_count={state.visible_count()}
                    total_likes={state.total_likes}
                    loading={state.is_loading}
                    on_toggle_sort={videos.toggle_sort.clone()}
                    on_reload={videos.load.clone()}
                />

                <VideoGrid
                    videos={visible}
                    loading={state.is_loading}
                    query={state.search_query.clone()}
                    on_like={videos.record_like.clone()}
                />
            </div>
        </div>
    }
}
