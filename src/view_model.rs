use im::Vector;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RefId(pub String);

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ThreadId(pub String);

impl std::fmt::Display for ThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("ThreadId:{}", self.0))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub String);

/// A comment conversation anchored to a reference point (`ref_id`) within an
/// application. The server may attach fields beyond the ones we act on; they
/// ride along opaquely in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    pub id: ThreadId,
    #[serde(default)]
    pub application_id: ApplicationId,
    #[serde(default)]
    pub ref_id: RefId,
    #[serde(default)]
    pub is_visible: bool,
    /// Append-only; insertion order is chronological order.
    #[serde(default)]
    pub comments: Vector<Comment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single comment. Everything besides the identifiers is opaque to us.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    #[serde(default)]
    pub thread_id: ThreadId,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}
