use crate::models::VideoRecord;
use crate::utils::{format_number, format_views};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub on_search: Callback<String>,
    pub on_clear: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct VideoControlsProps {
    pub sort_by_views: bool,
    pub visible_count: usize,
    pub total_likes: u64,
    pub loading: bool,
    pub on_toggle_sort: Callback<()>,
    pub on_reload: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoRecord,
    pub on_like: Callback<bool>,
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub videos: Vec<VideoRecord>,
    pub loading: bool,
    pub query: String,
    pub on_like: Callback<bool>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    // Filtering is live, so every keystroke goes straight to the parent.
    let on_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_search.emit(input_value);
        })
    };

    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class="flex mb-4">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Search videos or channels..."
                value={props.query.clone()}
                oninput={on_input}
            />
            {
                if props.query.is_empty() {
                    html! {}
                } else {
                    html! {
                        <button
                            type="button"
                            class="bg-gray-200 text-gray-700 p-3 rounded-r-lg hover:bg-gray-300 focus:outline-none"
                            onclick={on_clear}
                        >
                            {"Clear"}
                        </button>
                    }
                }
            }
        </div>
    }
}

#[function_component(VideoControls)]
pub fn video_controls(props: &VideoControlsProps) -> Html {
    let on_toggle_sort = {
        let on_toggle_sort = props.on_toggle_sort.clone();
        Callback::from(move |_: MouseEvent| on_toggle_sort.emit(()))
    };

    let on_reload = {
        let on_reload = props.on_reload.clone();
        Callback::from(move |_: MouseEvent| on_reload.emit(()))
    };

    let sort_label = if props.sort_by_views {
        "Sorted by views"
    } else {
        "Sort by views"
    };

    html! {
        <div class="flex flex-wrap items-center justify-between gap-4 mb-6 text-sm">
            <div class="flex gap-2">
                <button
                    class={classes!(
                        "px-4", "py-2", "rounded",
                        if props.sort_by_views { "bg-blue-600 text-white" } else { "bg-gray-200 text-gray-700" }
                    )}
                    onclick={on_toggle_sort}
                >
                    { sort_label }
                </button>
                <button
                    class="px-4 py-2 rounded bg-gray-200 text-gray-700 hover:bg-gray-300 disabled:opacity-50"
                    onclick={on_reload}
                    disabled={props.loading}
                >
                    { if props.loading { "Loading..." } else { "Reload" } }
                </button>
            </div>
            <p class="text-gray-600">
                { format!("{} videos found", props.visible_count) }
                <span class="ml-4">{ format!("👍 {} total likes", format_number(props.total_likes)) }</span>
            </p>
        </div>
    }
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let liked = use_state(|| false);

    let on_like_click = {
        let liked = liked.clone();
        let on_like = props.on_like.clone();
        Callback::from(move |_: MouseEvent| {
            let now_liked = !*liked;
            liked.set(now_liked);
            on_like.emit(now_liked);
        })
    };

    let video = &props.video;

    html! {
        <div class="bg-gray-100 rounded-lg overflow-hidden shadow">
            <img
                class="w-full aspect-video object-cover"
                src={video.thumbnail.clone()}
                alt={video.title.clone()}
                loading="lazy"
            />
            <div class="p-4">
                <h3 class="text-lg font-semibold text-gray-800 mb-1">{ &video.title }</h3>
                <p class="text-sm text-gray-600">{ format!("📺 {}", video.channel) }</p>
                <div class="flex justify-between items-center mt-3 text-sm">
                    <span class="text-gray-500" title={format_number(video.views)}>
                        { format!("👁️ {}", format_views(video.views)) }
                    </span>
                    <button
                        class={classes!(
                            "px-3", "py-1", "rounded",
                            if *liked { "bg-blue-600 text-white" } else { "bg-white text-gray-700 border border-gray-300" }
                        )}
                        onclick={on_like_click}
                    >
                        { if *liked { "👍 Liked" } else { "👍 Like" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    if props.loading {
        return html! {
            <div class="text-center py-8">
                <p class="text-gray-500">{"Loading videos..."}</p>
            </div>
        };
    }

    if props.videos.is_empty() {
        let message = if props.query.trim().is_empty() {
            "No videos available.".to_string()
        } else {
            format!("No videos match \"{}\".", props.query)
        };
        return html! {
            <p class="text-center text-gray-500">{ message }</p>
        };
    }

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
            { for props.videos.iter().map(|video| html! {
                <VideoCard
                    key={video.id.to_string()}
                    video={video.clone()}
                    on_like={props.on_like.clone()}
                />
            })}
        </div>
    }
}
