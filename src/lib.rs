mod components;
mod environment;
mod view_model;

pub use components::comments::{
    reduce, ApplicationCommentThreadsByRef, CommentAction, CommentThreadsMap, RefCommentThreads,
    State, UnpublishedCommentThreads,
};
pub use environment::model::{CommentEvent, ThreadEvent, ThreadUpdate};
pub use environment::storage::CommentStore;
pub use view_model::{ApplicationId, Comment, CommentId, CommentThread, RefId, ThreadId};
