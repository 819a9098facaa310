//! Scene building
//!
//! Turns a [`GameState`] into a flat list of draw commands. Nothing here
//! touches the DOM, so the whole frame layout is testable natively. Any
//! sprite that failed to load is replaced by a plain shape; the simulation
//! never knows.

use glam::Vec2;

use crate::sim::{GameState, Rect};

/// Sprites the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Javi,
    Obstacle,
    Bg1,
    Bg2,
}

impl AssetId {
    pub const ALL: [AssetId; 4] = [AssetId::Javi, AssetId::Obstacle, AssetId::Bg1, AssetId::Bg2];

    /// Path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            AssetId::Javi => "assets/javi.png",
            AssetId::Obstacle => "assets/obstacle.png",
            AssetId::Bg1 => "assets/bg-layer1.png",
            AssetId::Bg2 => "assets/bg-layer2.png",
        }
    }

    #[inline]
    fn index(&self) -> usize {
        *self as usize
    }

    /// Image for a background layer index
    fn for_layer(index: usize) -> AssetId {
        if index == 0 { AssetId::Bg1 } else { AssetId::Bg2 }
    }
}

/// Which sprites are ready to draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetAvailability {
    loaded: [bool; 4],
}

impl AssetAvailability {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self { loaded: [true; 4] }
    }

    pub fn set(&mut self, id: AssetId, loaded: bool) {
        self.loaded[id.index()] = loaded;
    }

    #[inline]
    pub fn has(&self, id: AssetId) -> bool {
        self.loaded[id.index()]
    }
}

/// Palette (CSS colors)
pub mod palette {
    pub const SKY_TOP: &str = "#dff6ff";
    pub const SKY_BOTTOM: &str = "#ffffff";
    pub const HILLS: &str = "rgba(14, 57, 107, 0.06)";
    pub const GROUND: &str = "#f1f5f9";
    pub const GROUND_LINE: &str = "#e2e8f0";
    pub const PLAYER: &str = "#0f172a";
    pub const OBSTACLE: &str = "#0b1220";
}

const PLAYER_CORNER_RADIUS: f32 = 8.0;
const OBSTACLE_CORNER_RADIUS: f32 = 6.0;

/// A single canvas operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Vertical gradient over the whole viewport
    Sky { top: &'static str, bottom: &'static str },
    Image { asset: AssetId, rect: Rect },
    Ellipse { center: Vec2, radii: Vec2, color: &'static str },
    FillRect { rect: Rect, color: &'static str },
    RoundRect { rect: Rect, radius: f32, color: &'static str },
    Line { from: Vec2, to: Vec2, color: &'static str },
}

/// Build the draw list for one frame, back to front
pub fn build(state: &GameState, assets: &AssetAvailability) -> Vec<DrawCmd> {
    let w = state.tuning.viewport_width;
    let h = state.tuning.viewport_height;
    let ground = state.tuning.ground_line();

    let mut cmds = Vec::with_capacity(8 + state.obstacles.len());
    cmds.push(DrawCmd::Sky {
        top: palette::SKY_TOP,
        bottom: palette::SKY_BOTTOM,
    });

    for (i, layer) in state.layers.iter().enumerate() {
        let asset = AssetId::for_layer(i);
        if assets.has(asset) {
            // Two copies side by side for a seamless loop
            let sx = (layer.offset % w).floor();
            for x in [sx, sx + w] {
                cmds.push(DrawCmd::Image {
                    asset,
                    rect: Rect::from_xywh(x, layer.y, w, h),
                });
            }
        } else {
            cmds.extend(fallback_hills(layer.offset, layer.y, w, h));
        }
    }

    cmds.push(DrawCmd::FillRect {
        rect: Rect::from_xywh(0.0, ground, w, h - ground),
        color: palette::GROUND,
    });
    cmds.push(DrawCmd::Line {
        from: Vec2::new(0.0, ground),
        to: Vec2::new(w, ground),
        color: palette::GROUND_LINE,
    });

    cmds.push(sprite_or_shape(
        assets,
        AssetId::Javi,
        state.player.rect(),
        PLAYER_CORNER_RADIUS,
        palette::PLAYER,
    ));
    for obstacle in &state.obstacles {
        cmds.push(sprite_or_shape(
            assets,
            AssetId::Obstacle,
            obstacle.rect(),
            OBSTACLE_CORNER_RADIUS,
            palette::OBSTACLE,
        ));
    }

    cmds
}

/// Two soft hills standing in for a missing layer image
fn fallback_hills(offset: f32, layer_y: f32, w: f32, h: f32) -> [DrawCmd; 2] {
    [
        DrawCmd::Ellipse {
            center: Vec2::new(w * 0.2 + offset % 200.0, h - 60.0 - layer_y),
            radii: Vec2::new(220.0, 60.0),
            color: palette::HILLS,
        },
        DrawCmd::Ellipse {
            center: Vec2::new(w * 0.7 + offset % 300.0, h - 70.0 - layer_y),
            radii: Vec2::new(300.0, 70.0),
            color: palette::HILLS,
        },
    ]
}

fn sprite_or_shape(
    assets: &AssetAvailability,
    asset: AssetId,
    rect: Rect,
    radius: f32,
    color: &'static str,
) -> DrawCmd {
    if assets.has(asset) {
        DrawCmd::Image { asset, rect }
    } else {
        DrawCmd::RoundRect { rect, radius, color }
    }
}
