//! Per-frame trace records, logged as one JSON line each.

use log::{info, warn};
use serde::Serialize;

use crate::session::FrameReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
    pub pos: [f64; 2],
    pub dir: [f64; 2],
    pub hit_columns: u16,
    pub edge_columns: u16,
    /// `None` when no column hit a wall.
    pub nearest: Option<f64>,
}

impl From<&FrameReport> for FrameRecord {
    fn from(report: &FrameReport) -> Self {
        let info = report.info;
        Self {
            frame: report.frame,
            key: report.key,
            action: report.action.map(|a| a.as_str()),
            pos: [info.pos_x, info.pos_y],
            dir: [info.dir_x, info.dir_y],
            hit_columns: report.summary.hit_columns,
            edge_columns: report.summary.edge_columns,
            nearest: Some(report.summary.nearest).filter(|d| d.is_finite()),
        }
    }
}

/// Log a frame at info level under the `frame` target.
pub fn log_frame(report: &FrameReport) {
    match serde_json::to_string(&FrameRecord::from(report)) {
        Ok(line) => info!(target: "frame", "{line}"),
        Err(err) => warn!("frame {}: trace encoding failed: {err}", report.frame),
    }
}
