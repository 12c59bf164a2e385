use super::state::UnpublishedCommentThreads;
use crate::environment::model::{CommentEvent, ThreadEvent, ThreadUpdate};
use crate::view_model::{Comment, CommentThread, ThreadId};

/// One variant per completion signal the store reacts to: fetch results,
/// user-mutation results, and live-channel events.
#[derive(Clone)]
pub enum CommentAction {
    FetchThreadsSuccess(Vec<CommentThread>),
    CreateUnpublishedThreadSuccess(UnpublishedCommentThreads),
    RemoveUnpublishedThreads,
    CreateThreadSuccess(CommentThread),
    AddCommentToThreadSuccess {
        comment_thread_id: ThreadId,
        comment: Comment,
    },
    UpdateThreadSuccess(ThreadUpdate),
    NewThreadEvent(ThreadEvent),
    NewCommentEvent(CommentEvent),
    UpdateThreadEvent(ThreadUpdate),
}

impl std::fmt::Debug for CommentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FetchThreadsSuccess(threads) => f
                .debug_tuple("FetchThreadsSuccess")
                .field(&threads.len())
                .finish(),
            Self::CreateUnpublishedThreadSuccess(_arg0) => {
                f.debug_tuple("CreateUnpublishedThreadSuccess").finish()
            }
            Self::RemoveUnpublishedThreads => write!(f, "RemoveUnpublishedThreads"),
            Self::CreateThreadSuccess(thread) => f
                .debug_tuple("CreateThreadSuccess")
                .field(&thread.id)
                .finish(),
            Self::AddCommentToThreadSuccess {
                comment_thread_id, ..
            } => f
                .debug_tuple("AddCommentToThreadSuccess")
                .field(comment_thread_id)
                .finish(),
            Self::UpdateThreadSuccess(update) => f
                .debug_tuple("UpdateThreadSuccess")
                .field(&update.id)
                .finish(),
            Self::NewThreadEvent(event) => {
                f.debug_tuple("NewThreadEvent").field(&event.id).finish()
            }
            Self::NewCommentEvent(event) => {
                f.debug_tuple("NewCommentEvent").field(&event.id).finish()
            }
            Self::UpdateThreadEvent(update) => f
                .debug_tuple("UpdateThreadEvent")
                .field(&update.id)
                .finish(),
        }
    }
}
