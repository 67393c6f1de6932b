//! Presentation seams the session calls into.
//!
//! Neither collaborator can fail or block the session; a sound engine that
//! cannot play a cue simply skips it.

use crawl_core::{Cue, RoomId};

/// Plays named presentation cues (sounds, animations).
pub trait CueDispatcher: Send + Sync {
    fn dispatch(&self, cue: Cue);
}

/// Warms assets for rooms the player may enter next.
pub trait AssetPrefetcher: Send + Sync {
    fn prefetch(&self, room: &RoomId);
}

impl<T: CueDispatcher + ?Sized> CueDispatcher for Box<T> {
    fn dispatch(&self, cue: Cue) {
        (**self).dispatch(cue);
    }
}

impl<T: AssetPrefetcher + ?Sized> AssetPrefetcher for Box<T> {
    fn prefetch(&self, room: &RoomId) {
        (**self).prefetch(room);
    }
}

/// Default [`CueDispatcher`] that only traces.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingCues;

impl CueDispatcher for TracingCues {
    fn dispatch(&self, cue: Cue) {
        tracing::trace!(target: "runtime::cue", cue = cue.name(), "cue");
    }
}

/// Default [`AssetPrefetcher`] that only traces.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingPrefetcher;

impl AssetPrefetcher for TracingPrefetcher {
    fn prefetch(&self, room: &RoomId) {
        tracing::trace!(target: "runtime::prefetch", %room, "prefetch");
    }
}
