pub mod context;
pub mod segments;
pub mod statusline;

pub use context::{RenderContext, SegmentSink};
pub use statusline::StatusLineGenerator;

use crate::config::SegmentId;
use crate::probe::StatusProbe;
use segments::{BatterySegment, CwdSegment, Segment, SegmentData};

/// 按配置顺序收集所有段；单个段失败只会让该段缺席
pub fn collect_all_segments(
    ctx: &RenderContext,
    battery_probe: &dyn StatusProbe,
) -> Vec<SegmentData> {
    let mut sink = SegmentSink::new();

    for id in &ctx.config.modules {
        let segment: Box<dyn Segment + '_> = match id {
            SegmentId::Cwd => Box::new(CwdSegment::new()),
            SegmentId::Battery => Box::new(BatterySegment::new(battery_probe)),
        };

        if let Err(e) = segment.collect(ctx, &mut sink) {
            tracing::debug!(segment = ?segment.id(), error = %e, "segment omitted");
        }
    }

    sink.into_segments()
}
