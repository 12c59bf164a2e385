use crate::components::comments::{reduce, CommentAction, State, UnpublishedCommentThreads};
use crate::view_model::{ApplicationId, CommentThread, RefId, ThreadId};

/// Explicit state container around the comments reducer. Owned by the host
/// application and passed by reference; not a singleton. Actions are applied
/// synchronously, strictly in call order, each one replacing the snapshot.
#[derive(Clone, Debug, Default)]
pub struct CommentStore {
    state: State,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: CommentAction) {
        self.state = reduce(&self.state, action);
    }

    /// The current snapshot. Read-only; the next dispatch replaces it.
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn thread(&self, id: &ThreadId) -> Option<&CommentThread> {
        self.state.comment_threads_map.get(id)
    }

    /// The ordered thread ids anchored at a reference point.
    pub fn ref_thread_ids(
        &self,
        application: &ApplicationId,
        ref_id: &RefId,
    ) -> Option<&im::Vector<ThreadId>> {
        self.state
            .application_comment_threads_by_ref
            .get(application)?
            .get(ref_id)
    }

    /// Resolve a reference point's bucket to the threads themselves, in
    /// bucket order. Ids without a map entry are skipped; while the index
    /// invariant holds there are none.
    pub fn threads_for_ref(
        &self,
        application: &ApplicationId,
        ref_id: &RefId,
    ) -> Vec<&CommentThread> {
        self.ref_thread_ids(application, ref_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.state.comment_threads_map.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn unpublished(&self) -> &UnpublishedCommentThreads {
        &self.state.unpublished_comment_threads
    }

    /// Threads of an application currently surfaced in the UI. Feeds the
    /// visibility indicators derived outside this crate.
    pub fn visible_thread_count(&self, application: &ApplicationId) -> usize {
        self.state
            .comment_threads_map
            .values()
            .filter(|thread| &thread.application_id == application && thread.is_visible)
            .count()
    }
}
