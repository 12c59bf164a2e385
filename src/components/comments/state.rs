use im::{HashMap, Vector};
use serde_json::Value;

use crate::view_model::{ApplicationId, CommentThread, RefId, ThreadId};

/// Single source of truth for thread content, keyed by thread id.
pub type CommentThreadsMap = HashMap<ThreadId, CommentThread>;

/// Ordered, deduplicated thread ids per reference point.
pub type RefCommentThreads = HashMap<RefId, Vector<ThreadId>>;

/// application -> ref -> thread ids. Every id listed here must also be a key
/// of `CommentThreadsMap`.
pub type ApplicationCommentThreadsByRef = HashMap<ApplicationId, RefCommentThreads>;

/// Drafts keyed by a client-local key, not yet confirmed by the server.
/// Scratch space: replaced wholesale, cleared wholesale.
pub type UnpublishedCommentThreads = HashMap<String, Value>;

#[derive(Clone, Default, PartialEq)]
pub struct State {
    pub comment_threads_map: CommentThreadsMap,
    pub application_comment_threads_by_ref: ApplicationCommentThreadsByRef,
    pub unpublished_comment_threads: UnpublishedCommentThreads,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("comment_threads_map", &self.comment_threads_map.len())
            .field(
                "application_comment_threads_by_ref",
                &self.application_comment_threads_by_ref.len(),
            )
            .field(
                "unpublished_comment_threads",
                &self.unpublished_comment_threads.len(),
            )
            .finish()
    }
}
