use crate::DVec3;

/// RGB color with channels on a 0..255 scale.
///
/// Intermediate results may leave that range; see [`clamp_color`].
pub type Color = DVec3;

/// Upper bound of a color channel.
pub const CHANNEL_MAX: f64 = 255.0;

/// Background color for rays that escape the scene.
pub const BLACK: Color = Color::ZERO;

/// Saturate every channel into [0, 255].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    color.clamp(Color::ZERO, Color::splat(CHANNEL_MAX))
}
