//! Blueprints - requested rectangles prior to placement.

use serde::{Deserialize, Serialize};

/// Caller-assigned tag that keeps adjacent blueprints in the same row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GroupId(pub i32);

impl From<i32> for GroupId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// A requested rectangle: minimum size, elasticity, group and optional identifier.
///
/// Blueprints are read-only inputs; the packer consumes each one exactly once.
/// Field ranges are the caller's contract and are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub min_w: u32,
    pub min_h: u32,
    #[serde(default)]
    pub elastic_w: bool,
    #[serde(default)]
    pub elastic_h: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default)]
    pub group_id: GroupId,
}

impl Blueprint {
    /// Create a rigid blueprint in group 0 with no identifier.
    pub fn new(min_w: u32, min_h: u32) -> Self {
        Self {
            min_w,
            min_h,
            elastic_w: false,
            elastic_h: false,
            uuid: None,
            group_id: GroupId::default(),
        }
    }

    /// Allow the rectangle to grow horizontally.
    pub fn elastic_width(mut self) -> Self {
        self.elastic_w = true;
        self
    }

    /// Allow the rectangle to grow vertically.
    pub fn elastic_height(mut self) -> Self {
        self.elastic_h = true;
        self
    }

    /// Set the group tag.
    pub fn group(mut self, group_id: impl Into<GroupId>) -> Self {
        self.group_id = group_id.into();
        self
    }

    /// Set the identifier used by the index.
    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }
}
