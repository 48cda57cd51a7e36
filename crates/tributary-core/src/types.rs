use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event descriptor attached to a feed entry by the read-side projections.
///
/// Field spelling on the JSON wire is fixed by the upstream projections
/// (`metaData`, `isLinkMetaData`, ...), so the renames here are explicit
/// where `camelCase` alone would get them wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub event_id: Uuid,
    pub event_type: String,
    pub event_number: i32,
    pub data: Option<String>,
    #[serde(rename = "metaData")]
    pub metadata: Option<String>,
    #[serde(rename = "linkMetaData")]
    pub link_metadata: Option<String>,
    pub stream_id: String,
    pub is_json: bool,
    #[serde(rename = "isMetaData")]
    pub is_metadata: bool,
    #[serde(rename = "isLinkMetaData")]
    pub is_link_metadata: bool,
    /// Event number of the link event when this entry resolves a link.
    pub position_event_number: i32,
    /// Stream holding the link event when this entry resolves a link.
    pub position_stream_id: String,
}
