//! Wire-side records and their ingestion adapters.
//!
//! Fetch and mutation results arrive keyed by `id`; the live channel keys its
//! records by `_id`. Everything is normalized to the canonical `id` here, at
//! the boundary, so nothing past this module ever sees `_id`.

use im::Vector;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::view_model::{ApplicationId, Comment, CommentId, CommentThread, RefId, ThreadId};

/// Partial or full thread record used for shallow-merge updates.
///
/// The same handler serves the request/response path (`id`) and the live
/// channel (`_id`), hence the alias. Unrecognized fields collect in `extra`
/// and replace their counterparts per key on merge.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadUpdate {
    #[serde(alias = "_id")]
    pub id: ThreadId,
    pub application_id: Option<ApplicationId>,
    pub ref_id: Option<RefId>,
    pub is_visible: Option<bool>,
    pub comments: Option<Vector<Comment>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThreadUpdate {
    /// Shallow-merge onto an existing thread. Payload fields win; nested
    /// values replace wholesale, never deep-merge.
    pub fn apply_to(&self, existing: &CommentThread) -> CommentThread {
        let mut next = existing.clone();
        next.id = self.id.clone();
        if let Some(application_id) = &self.application_id {
            next.application_id = application_id.clone();
        }
        if let Some(ref_id) = &self.ref_id {
            next.ref_id = ref_id.clone();
        }
        if let Some(is_visible) = self.is_visible {
            next.is_visible = is_visible;
        }
        if let Some(comments) = &self.comments {
            next.comments = comments.clone();
        }
        for (key, value) in &self.extra {
            next.extra.insert(key.clone(), value.clone());
        }
        next
    }

    /// A thread consisting of only the provided fields, for updates that
    /// arrive before their thread exists locally.
    pub fn materialize(&self) -> CommentThread {
        CommentThread {
            id: self.id.clone(),
            application_id: self.application_id.clone().unwrap_or_default(),
            ref_id: self.ref_id.clone().unwrap_or_default(),
            is_visible: self.is_visible.unwrap_or_default(),
            comments: self.comments.clone().unwrap_or_default(),
            extra: self.extra.clone(),
        }
    }
}

/// Live-channel record for a newly created thread.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadEvent {
    #[serde(rename = "_id")]
    pub id: ThreadId,
    #[serde(default)]
    pub application_id: ApplicationId,
    #[serde(default)]
    pub ref_id: RefId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThreadEvent {
    /// Threads arriving over the live channel start hidden until other UI
    /// logic surfaces them; comments are carried over from the entry the
    /// event replaces, if any.
    pub fn into_thread(self, existing: Option<&CommentThread>) -> CommentThread {
        let mut extra = self.extra;
        // forced fields must not ride along in the passthrough map
        extra.remove("isVisible");
        extra.remove("comments");
        CommentThread {
            id: self.id,
            application_id: self.application_id,
            ref_id: self.ref_id,
            is_visible: false,
            comments: existing
                .map(|thread| thread.comments.clone())
                .unwrap_or_default(),
            extra,
        }
    }
}

/// Live-channel record for a comment added to some thread.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentEvent {
    #[serde(rename = "_id")]
    pub id: CommentId,
    pub thread_id: ThreadId,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl CommentEvent {
    pub fn into_comment(self) -> Comment {
        Comment {
            id: self.id,
            thread_id: self.thread_id,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn thread_event_translates_wire_id() {
        let event: ThreadEvent = serde_json::from_value(json!({
            "_id": "t1",
            "applicationId": "app1",
            "refId": "ref1",
            "mode": "inline",
        }))
        .unwrap();

        assert_eq!(event.id, ThreadId("t1".into()));
        let thread = event.into_thread(None);
        assert_eq!(thread.id, ThreadId("t1".into()));
        assert!(!thread.extra.contains_key("_id"));
        assert_eq!(thread.extra["mode"], json!("inline"));
    }

    #[test]
    fn thread_event_forces_hidden_and_strips_forced_fields() {
        let event: ThreadEvent = serde_json::from_value(json!({
            "_id": "t1",
            "applicationId": "app1",
            "refId": "ref1",
            "isVisible": true,
            "comments": [],
        }))
        .unwrap();

        let thread = event.into_thread(None);
        assert!(!thread.is_visible);
        assert!(!thread.extra.contains_key("isVisible"));
        assert!(!thread.extra.contains_key("comments"));
    }

    #[test]
    fn comment_event_translates_wire_id() {
        let event: CommentEvent = serde_json::from_value(json!({
            "_id": "c9",
            "threadId": "t1",
            "body": "a reply",
        }))
        .unwrap();

        let comment = event.into_comment();
        assert_eq!(comment.id, CommentId("c9".into()));
        assert_eq!(comment.thread_id, ThreadId("t1".into()));
        assert!(!comment.body.contains_key("_id"));
        assert_eq!(comment.body["body"], json!("a reply"));
    }

    #[test]
    fn update_accepts_either_id_key() {
        let via_id: ThreadUpdate = serde_json::from_value(json!({ "id": "t1" })).unwrap();
        let via_wire: ThreadUpdate = serde_json::from_value(json!({ "_id": "t1" })).unwrap();
        assert_eq!(via_id.id, via_wire.id);
    }

    #[test]
    fn update_shallow_merges_payload_fields() {
        let existing: CommentThread = serde_json::from_value(json!({
            "id": "t1",
            "refId": "ref1",
            "title": "old",
        }))
        .unwrap();
        let update: ThreadUpdate = serde_json::from_value(json!({
            "id": "t1",
            "title": "new",
        }))
        .unwrap();

        let merged = update.apply_to(&existing);
        assert_eq!(merged.ref_id, RefId("ref1".into()));
        assert_eq!(merged.extra["title"], json!("new"));
    }
}
