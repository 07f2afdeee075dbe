use crate::models::VideoRecord;
use std::rc::Rc;
use yew::Reducible;

/// State behind the video list page. The visible list is never stored; it is
/// derived from `videos`, `search_query` and `sort_by_views` on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoListState {
    pub videos: Rc<[VideoRecord]>,
    pub search_query: String,
    pub sort_by_views: bool,
    pub total_likes: u64,
    pub is_loading: bool,
}

impl Default for VideoListState {
    fn default() -> Self {
        Self {
            videos: Rc::from(Vec::new()),
            search_query: String::new(),
            sort_by_views: false,
            total_likes: 0,
            // The page kicks off a load on mount, so it starts out loading.
            is_loading: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VideoListAction {
    LoadStarted,
    LoadFinished(Vec<VideoRecord>),
    SetSearchQuery(String),
    ToggleSort,
    ClearSearch,
    RecordLike(bool),
}

impl VideoListState {
    /// Filtered, then optionally sorted by views (descending). The sort is
    /// stable, so equal view counts keep their filtered order.
    pub fn visible_videos(&self) -> Vec<&VideoRecord> {
        let mut visible: Vec<&VideoRecord> = if self.search_query.trim().is_empty() {
            self.videos.iter().collect()
        } else {
            let needle = self.search_query.to_lowercase();
            self.videos.iter().filter(|v| v.matches(&needle)).collect()
        };

        if self.sort_by_views {
            visible.sort_by(|a, b| b.views.cmp(&a.views));
        }

        visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible_videos().len()
    }
}

impl Reducible for VideoListState {
    type Action = VideoListAction;

    // Actions that change nothing hand back the same Rc so Yew skips the re-render.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            VideoListAction::LoadStarted => {
                if self.is_loading {
                    return self;
                }
                let mut next = (*self).clone();
                next.is_loading = true;
                Rc::new(next)
            }
            VideoListAction::LoadFinished(videos) => {
                let mut next = (*self).clone();
                next.videos = Rc::from(videos);
                next.is_loading = false;
                Rc::new(next)
            }
            VideoListAction::SetSearchQuery(query) => {
                if query == self.search_query {
                    return self;
                }
                let mut next = (*self).clone();
                next.search_query = query;
                Rc::new(next)
            }
            VideoListAction::ToggleSort => {
                let mut next = (*self).clone();
                next.sort_by_views = !next.sort_by_views;
                Rc::new(next)
            }
            VideoListAction::ClearSearch => {
                if self.search_query.is_empty() {
                    return self;
                }
                let mut next = (*self).clone();
                next.search_query.clear();
                Rc::new(next)
            }
            VideoListAction::RecordLike(liked) => {
                let total_likes = if liked {
                    self.total_likes.saturating_add(1)
                } else {
                    self.total_likes.saturating_sub(1)
                };
                if total_likes == self.total_likes {
                    return self;
                }
                let mut next = (*self).clone();
                next.total_likes = total_likes;
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::videos::sample::sample_videos;

    fn loaded() -> Rc<VideoListState> {
        Rc::new(VideoListState::default())
            .reduce(VideoListAction::LoadStarted)
            .reduce(VideoListAction::LoadFinished(sample_videos()))
    }

    fn with_query(query: &str) -> Rc<VideoListState> {
        loaded().reduce(VideoListAction::SetSearchQuery(query.to_string()))
    }

    fn titles(state: &VideoListState) -> Vec<&str> {
        state
            .visible_videos()
            .into_iter()
            .map(|v| v.title.as_str())
            .collect()
    }

    fn record(id: u32, title: &str, views: u64) -> VideoRecord {
        VideoRecord {
            id,
            title: title.to_string(),
            channel: "Channel".to_string(),
            views,
            thumbnail: String::new(),
        }
    }

    #[test]
    fn starts_loading_and_empty() {
        let state = VideoListState::default();
        assert!(state.is_loading);
        assert!(state.videos.is_empty());
        assert_eq!(state.visible_count(), 0);
        assert_eq!(state.total_likes, 0);
    }

    #[test]
    fn load_finished_populates_sample_set() {
        let state = loaded();
        assert!(!state.is_loading);
        assert_eq!(state.videos.len(), 8);
        assert_eq!(&*state.videos, sample_videos().as_slice());
    }

    #[test]
    fn reload_sets_loading_and_replaces_collection() {
        let state = loaded().reduce(VideoListAction::LoadStarted);
        assert!(state.is_loading);
        assert_eq!(state.videos.len(), 8);

        let state = state.reduce(VideoListAction::LoadFinished(vec![record(42, "Only", 1)]));
        assert!(!state.is_loading);
        assert_eq!(state.videos.len(), 1);
        assert_eq!(state.videos[0].id, 42);
    }

    #[test]
    fn query_vue_finds_one_video() {
        let state = with_query("vue");
        assert_eq!(titles(&state), vec!["Learn Vue 3 Composition API in 10 Minutes"]);
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn query_react_finds_one_video() {
        let state = with_query("react");
        assert_eq!(titles(&state), vec!["Building Modern Web Apps with React"]);
    }

    #[test]
    fn empty_query_shows_everything_in_load_order() {
        let state = with_query("");
        let ids: Vec<u32> = state.visible_videos().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn blank_query_does_not_filter() {
        let state = with_query("   ");
        assert_eq!(state.visible_count(), 8);
    }

    #[test]
    fn query_matches_channel_case_insensitively() {
        let state = with_query("GIT EXPERT");
        assert_eq!(titles(&state), vec!["Git and GitHub Workflow Best Practices"]);
    }

    #[test]
    fn every_visible_video_contains_the_query() {
        for query in ["vue", "REACT", "es", "Dev", "t", "ing", "nothing-matches", "  "] {
            let state = with_query(query);
            let needle = query.to_lowercase();
            for video in state.visible_videos() {
                if needle.trim().is_empty() {
                    continue;
                }
                assert!(
                    video.title.to_lowercase().contains(&needle)
                        || video.channel.to_lowercase().contains(&needle),
                    "{:?} does not match {query:?}",
                    video.title
                );
            }
            assert_eq!(state.visible_count(), state.visible_videos().len());
        }
    }

    #[test]
    fn sort_puts_most_viewed_first() {
        let state = loaded().reduce(VideoListAction::ToggleSort);
        let visible = state.visible_videos();
        assert_eq!(visible[0].title, "Building Modern Web Apps with React");
        assert_eq!(visible[0].views, 2_100_000);
        assert!(visible.windows(2).all(|pair| pair[0].views >= pair[1].views));
    }

    #[test]
    fn sort_applies_after_filter() {
        let state = with_query("e").reduce(VideoListAction::ToggleSort);
        let visible = state.visible_videos();
        assert!(visible.iter().all(|v| v.matches("e")));
        assert!(visible.windows(2).all(|pair| pair[0].views >= pair[1].views));
        assert_eq!(state.visible_count(), with_query("e").visible_count());
    }

    #[test]
    fn toggling_sort_twice_restores_load_order() {
        let state = loaded()
            .reduce(VideoListAction::ToggleSort)
            .reduce(VideoListAction::ToggleSort);
        assert!(!state.sort_by_views);
        let ids: Vec<u32> = state.visible_videos().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn sort_keeps_ties_in_filtered_order() {
        let videos = vec![
            record(1, "a", 10),
            record(2, "b", 30),
            record(3, "c", 10),
            record(4, "d", 30),
            record(5, "e", 10),
        ];
        let state = Rc::new(VideoListState::default())
            .reduce(VideoListAction::LoadFinished(videos))
            .reduce(VideoListAction::ToggleSort);
        let ids: Vec<u32> = state.visible_videos().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn clear_search_resets_query() {
        let state = with_query("docker").reduce(VideoListAction::ClearSearch);
        assert!(state.search_query.is_empty());
        assert_eq!(state.visible_count(), 8);
    }

    #[test]
    fn clear_search_on_empty_query_is_a_no_op() {
        let state = loaded();
        let cleared = state.clone().reduce(VideoListAction::ClearSearch);
        assert!(Rc::ptr_eq(&state, &cleared));
        assert_eq!(*state, *cleared);
    }

    #[test]
    fn like_counter_increments_and_decrements() {
        let state = loaded()
            .reduce(VideoListAction::RecordLike(true))
            .reduce(VideoListAction::RecordLike(true))
            .reduce(VideoListAction::RecordLike(false));
        assert_eq!(state.total_likes, 1);
    }

    #[test]
    fn like_counter_never_goes_negative() {
        let mut state = loaded();
        for _ in 0..5 {
            state = state.reduce(VideoListAction::RecordLike(false));
            assert_eq!(state.total_likes, 0);
        }
        let state = state.reduce(VideoListAction::RecordLike(true));
        assert_eq!(state.total_likes, 1);
    }

    #[test]
    fn likes_survive_filtering_and_sorting() {
        let state = loaded()
            .reduce(VideoListAction::RecordLike(true))
            .reduce(VideoListAction::SetSearchQuery("vue".to_string()))
            .reduce(VideoListAction::ToggleSort)
            .reduce(VideoListAction::ClearSearch);
        assert_eq!(state.total_likes, 1);
        assert!(state.sort_by_views);
    }
}
