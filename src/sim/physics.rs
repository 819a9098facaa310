//! Player vertical physics
//!
//! Explicit Euler with a fixed per-tick gravity, then a clamp to the ground.

use super::state::Player;

/// Advance the player by one tick and resolve ground contact.
///
/// `ground_line` is the y coordinate of the ground surface; the player rests
/// on it when `pos.y + size.y == ground_line`.
pub fn integrate(player: &mut Player, gravity: f32, ground_line: f32) {
    player.vy += gravity;
    player.pos.y += player.vy;

    let rest_y = ground_line - player.size.y;
    if player.pos.y >= rest_y {
        player.pos.y = rest_y;
        player.vy = 0.0;
        player.grounded = true;
    } else {
        player.grounded = false;
    }
}

/// Apply a jump impulse if the player may jump.
///
/// Allowed when grounded, or while vertical velocity is above
/// `forgiveness_vy` (not already rising fast). That second clause lets a
/// late tap near the apex or early in a fall re-trigger the jump.
/// Returns true if the impulse was applied.
pub fn try_jump(player: &mut Player, forgiveness_vy: f32) -> bool {
    if player.grounded || player.vy > forgiveness_vy {
        player.vy = player.jump_impulse;
        player.grounded = false;
        true
    } else {
        false
    }
}
