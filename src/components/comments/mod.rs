mod action;
mod reducer;
mod state;

pub use action::CommentAction;
pub use reducer::reduce;
pub use state::{
    ApplicationCommentThreadsByRef, CommentThreadsMap, RefCommentThreads, State,
    UnpublishedCommentThreads,
};
