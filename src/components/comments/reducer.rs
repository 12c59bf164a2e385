use itertools::Itertools;

use super::action::CommentAction;
use super::state::{ApplicationCommentThreadsByRef, CommentThreadsMap, State};
use crate::view_model::CommentThread;

/// Pure transition: `(previous, action) -> next`. The input state is never
/// touched; changed substructure is replaced, everything else stays shared
/// through the `im` collections.
pub fn reduce(state: &State, action: CommentAction) -> State {
    log::trace!("{action:?}");
    let mut next = state.clone();
    match action {
        CommentAction::FetchThreadsSuccess(threads) => {
            // Full rebuild of both structures from the fetched set. The index
            // holds by construction: every indexed id was just inserted.
            let mut map = CommentThreadsMap::new();
            let mut by_ref = ApplicationCommentThreadsByRef::new();
            for thread in threads {
                index_thread(&mut by_ref, &thread);
                map.insert(thread.id.clone(), thread);
            }
            next.comment_threads_map = map;
            next.application_comment_threads_by_ref = by_ref;
        }
        CommentAction::CreateUnpublishedThreadSuccess(unpublished) => {
            // wholesale replace, no merge with prior drafts
            next.unpublished_comment_threads = unpublished;
        }
        CommentAction::RemoveUnpublishedThreads => {
            next.unpublished_comment_threads = Default::default();
        }
        CommentAction::CreateThreadSuccess(thread) => {
            index_thread(&mut next.application_comment_threads_by_ref, &thread);
            next.comment_threads_map.insert(thread.id.clone(), thread);
        }
        CommentAction::AddCommentToThreadSuccess {
            comment_thread_id,
            comment,
        } => match next.comment_threads_map.get_mut(&comment_thread_id) {
            Some(thread) => thread.comments.push_back(comment),
            None => log::debug!("comment for unknown {comment_thread_id}, dropping"),
        },
        CommentAction::UpdateThreadSuccess(update) | CommentAction::UpdateThreadEvent(update) => {
            let merged = match next.comment_threads_map.get(&update.id) {
                Some(existing) => update.apply_to(existing),
                None => update.materialize(),
            };
            next.comment_threads_map.insert(merged.id.clone(), merged);
        }
        CommentAction::NewThreadEvent(event) => {
            let existing = next.comment_threads_map.get(&event.id).cloned();
            let thread = event.into_thread(existing.as_ref());
            index_thread(&mut next.application_comment_threads_by_ref, &thread);
            next.comment_threads_map.insert(thread.id.clone(), thread);
        }
        CommentAction::NewCommentEvent(event) => {
            let comment = event.into_comment();
            let thread_id = comment.thread_id.clone();
            // The live channel may outrun the fetch; an unknown thread gets a
            // stub entry holding just this comment.
            let mut thread = next
                .comment_threads_map
                .get(&thread_id)
                .cloned()
                .unwrap_or_else(|| CommentThread {
                    id: thread_id.clone(),
                    ..Default::default()
                });
            thread.comments.push_back(comment);
            next.comment_threads_map.insert(thread_id, thread);
        }
    }
    next
}

/// Union the thread id into its (application, ref) bucket: insertion order
/// kept, duplicates dropped by id value.
fn index_thread(by_ref: &mut ApplicationCommentThreadsByRef, thread: &CommentThread) {
    let bucket = by_ref
        .entry(thread.application_id.clone())
        .or_default()
        .entry(thread.ref_id.clone())
        .or_default();
    *bucket = bucket
        .iter()
        .chain(std::iter::once(&thread.id))
        .unique()
        .cloned()
        .collect();
}
