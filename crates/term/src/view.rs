//! SceneView: maps a material `ScreenBuffer` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::ScreenBuffer;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Material, PlayerInfo};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Renders the scene plus a one-line diagnostics readout underneath it.
///
/// A scene wider or taller than the viewport is cropped around its center so
/// the crosshair column stays visible; the readout always lands on screen.
pub struct SceneView {
    anchor_y: AnchorY,
    colored: bool,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Top,
            colored: true,
        }
    }
}

impl SceneView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Plain glyphs on the default style (no shading).
    pub fn monochrome(mut self) -> Self {
        self.colored = false;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        screen: &ScreenBuffer,
        info: &PlayerInfo,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        // One row is reserved for the readout.
        let scene_h = viewport.height.saturating_sub(1).min(screen.rows());
        let scene_w = viewport.width.min(screen.columns());

        let start_x = (viewport.width - scene_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => (viewport.height - 1 - scene_h) / 2,
            AnchorY::Top => 0,
        };
        let crop_x = (screen.columns() - scene_w) / 2;
        let crop_y = (screen.rows() - scene_h) / 2;

        for y in 0..scene_h {
            let row = screen.row(crop_y + y);
            for x in 0..scene_w {
                let material = row[(crop_x + x) as usize];
                fb.set(start_x + x, start_y + y, self.cell(material));
            }
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(start_x, start_y + scene_h, &diagnostics(info), label);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, screen: &ScreenBuffer, info: &PlayerInfo, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, info, viewport, &mut fb);
        fb
    }

    fn cell(&self, material: Material) -> Cell {
        let style = if self.colored {
            CellStyle::fg(shade(material))
        } else {
            CellStyle::default()
        };
        Cell::new(glyph(material), style)
    }
}

/// Display glyph for a material code.
pub fn glyph(material: Material) -> char {
    match material {
        Material::Sky => ' ',
        Material::WallSolid => '█',
        Material::WallDense => '▓',
        Material::WallMedium => '▒',
        Material::WallLight => '░',
        Material::WallEdge => '|',
        Material::WallFaint => '=',
        Material::FloorNearest => '#',
        Material::FloorNear => 'x',
        Material::FloorMid => '~',
        Material::FloorFar => '-',
    }
}

fn shade(material: Material) -> Rgb {
    match material {
        Material::Sky => Rgb::gray(0),
        Material::WallSolid => Rgb::gray(235),
        Material::WallDense => Rgb::gray(205),
        Material::WallMedium => Rgb::gray(175),
        Material::WallLight => Rgb::gray(145),
        Material::WallFaint => Rgb::gray(115),
        Material::WallEdge => Rgb::new(240, 200, 90),
        Material::FloorNearest => Rgb::new(150, 120, 80),
        Material::FloorNear => Rgb::new(125, 100, 70),
        Material::FloorMid => Rgb::new(100, 80, 60),
        Material::FloorFar => Rgb::new(75, 60, 45),
    }
}

/// `X: ..;  Y: ..;  DirX: ..;  DirY: ..` with six decimals.
pub fn diagnostics(info: &PlayerInfo) -> String {
    format!(
        "X: {:.6};  Y: {:.6};  DirX: {:.6};  DirY: {:.6}",
        info.pos_x, info.pos_y, info.dir_x, info.dir_y
    )
}
