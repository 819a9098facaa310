//! Canvas 2D backend
//!
//! Executes [`DrawCmd`] lists against a `CanvasRenderingContext2d`. Images
//! load in the background; until one finishes (or if it fails) the scene
//! builder is told it is missing and draws a placeholder instead.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::scene::{self, AssetAvailability, AssetId, DrawCmd};
use crate::sim::{GameState, Rect};

/// Canvas renderer with its sprite set
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    images: Vec<(AssetId, HtmlImageElement)>,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Grab the 2D context and start loading every sprite
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut images = Vec::with_capacity(AssetId::ALL.len());
        for id in AssetId::ALL {
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(id.path());
                    images.push((id, img));
                }
                Err(e) => log::warn!("Could not create image for {:?}: {:?}", id, e),
            }
        }

        Ok(Self {
            ctx,
            images,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Sprites that finished loading with real pixels
    pub fn availability(&self) -> AssetAvailability {
        let mut assets = AssetAvailability::none();
        for (id, img) in &self.images {
            // A failed load is "complete" with zero natural size
            assets.set(*id, img.complete() && img.natural_width() > 0);
        }
        assets
    }

    fn image(&self, id: AssetId) -> Option<&HtmlImageElement> {
        self.images.iter().find(|(i, _)| *i == id).map(|(_, img)| img)
    }

    /// Draw one frame
    pub fn render(&self, state: &GameState) {
        let cmds = scene::build(state, &self.availability());
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for cmd in &cmds {
            if let Err(e) = self.execute(cmd) {
                log::warn!("Draw failed: {:?}", e);
            }
        }
    }

    fn execute(&self, cmd: &DrawCmd) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Sky { top, bottom } => {
                let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, self.height);
                gradient.add_color_stop(0.0, top)?;
                gradient.add_color_stop(1.0, bottom)?;
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(0.0, 0.0, self.width, self.height);
            }
            DrawCmd::Image { asset, rect } => {
                if let Some(img) = self.image(*asset) {
                    let (x, y, w, h) = xywh(rect);
                    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h)?;
                }
            }
            DrawCmd::Ellipse { center, radii, color } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x as f64,
                    radii.y as f64,
                    0.0,
                    0.0,
                    TAU,
                )?;
                ctx.fill();
            }
            DrawCmd::FillRect { rect, color } => {
                let (x, y, w, h) = xywh(rect);
                ctx.set_fill_style_str(color);
                ctx.fill_rect(x, y, w, h);
            }
            DrawCmd::RoundRect { rect, radius, color } => {
                ctx.set_fill_style_str(color);
                round_rect_path(ctx, rect, *radius as f64)?;
                ctx.fill();
            }
            DrawCmd::Line { from, to, color } => {
                ctx.set_stroke_style_str(color);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
        }
        Ok(())
    }
}

fn xywh(rect: &Rect) -> (f64, f64, f64, f64) {
    (
        rect.pos.x as f64,
        rect.pos.y as f64,
        rect.size.x as f64,
        rect.size.y as f64,
    )
}

/// Closed rounded-rectangle path built from four arcTo corners
fn round_rect_path(ctx: &CanvasRenderingContext2d, rect: &Rect, r: f64) -> Result<(), JsValue> {
    let (x, y, w, h) = xywh(rect);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}
