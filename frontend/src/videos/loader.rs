use crate::videos::sample::sample_videos;
use crate::videos::state::VideoListAction;
use std::cell::RefCell;

/// Slot for the one scheduled load. The handle is whatever the scheduler
/// returns (a `gloo_timers` `Timeout` in the browser); dropping it must
/// cancel the scheduled completion.
pub struct PendingLoad<H> {
    handle: Option<H>,
}

impl<H> Default for PendingLoad<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> PendingLoad<H> {
    /// Stores `handle`, dropping (and so cancelling) the previous one.
    pub fn replace(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    pub fn cancel(&mut self) {
        self.handle = None;
    }
}

/// Dispatches `LoadStarted` now and schedules `LoadFinished` with the sample
/// set. Any load still pending in `pending` is cancelled.
pub fn start_load<H, D, S>(pending: &RefCell<PendingLoad<H>>, dispatch: D, schedule: S)
where
    D: Fn(VideoListAction) + 'static,
    S: FnOnce(Box<dyn FnOnce()>) -> H,
{
    dispatch(VideoListAction::LoadStarted);

    let handle = schedule(Box::new(move || {
        let videos = sample_videos();
        log::info!("Loaded {} videos", videos.len());
        dispatch(VideoListAction::LoadFinished(videos));
    }));

    pending.borrow_mut().replace(handle);
}
