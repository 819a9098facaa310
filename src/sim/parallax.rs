//! Parallax background scroll

use super::state::BackgroundLayer;

/// Scroll every layer by `layer.speed * global_speed / 4`.
///
/// Offsets wrap back to 0 once a full viewport width has scrolled by, so a
/// renderer drawing two side-by-side copies loops seamlessly.
pub fn scroll(layers: &mut [BackgroundLayer], global_speed: f32, viewport_width: f32) {
    for layer in layers {
        layer.offset -= layer.speed * (global_speed / 4.0);
        if layer.offset <= -viewport_width {
            layer.offset = 0.0;
        }
    }
}
