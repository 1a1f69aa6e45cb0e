//! Circle-overlap collision testing

/// Forgiveness factor applied to the combined radii
///
/// Sprites are roughly circular but their bitmaps are not, so the effective
/// radii are shrunk to avoid collisions on transparent corners. This is a
/// fixed gameplay constant, not a tunable.
const RADIUS_SCALE: f32 = 0.8;

/// Whether two circles overlap
///
/// # Arguments
/// * `x1`, `y1` - Center of the first circle
/// * `radius1` - Radius of the first circle
/// * `x2`, `y2` - Center of the second circle
/// * `radius2` - Radius of the second circle
///
/// # Returns
/// `true` when the distance between centers is strictly less than 0.8 times
/// the combined radii.
#[must_use]
pub fn circles_collide(x1: f32, y1: f32, radius1: f32, x2: f32, y2: f32, radius2: f32) -> bool {
    let dx = x1 - x2;
    let dy = y1 - y2;
    let distance = (dx * dx + dy * dy).sqrt();
    distance < RADIUS_SCALE * (radius1 + radius2)
}
