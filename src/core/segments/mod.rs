pub mod battery;
pub mod cwd;

use crate::config::SegmentId;
use crate::core::context::{RenderContext, SegmentSink};
use crate::error::SegmentError;
use serde::Serialize;
use std::collections::BTreeMap;

/// 数据收集 trait：每个段把自己的输出追加到 sink
pub trait Segment {
    fn collect(&self, ctx: &RenderContext, sink: &mut SegmentSink) -> Result<(), SegmentError>;
    fn id(&self) -> SegmentId;
}

// Re-export all segment types
pub use battery::BatterySegment;
pub use cwd::CwdSegment;

/// 分隔符相对于段内容的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorSide {
    Before,
    After,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Separator {
    pub glyph: String,
    pub foreground: u8,
    pub side: SeparatorSide,
}

/// 一个带名字和样式的输出单元，顺序即渲染顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentData {
    /// 语义标签，主题可按名字覆盖颜色
    pub name: String,
    pub content: String,
    pub foreground: u8,
    pub background: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<Separator>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl SegmentData {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        foreground: u8,
        background: u8,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            foreground,
            background,
            separator: None,
            metadata: BTreeMap::new(),
        }
    }
}
