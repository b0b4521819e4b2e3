/// 8-bit RGB form of a colour, used only for equality checks.
///
/// Each channel is `floor(component * 255.0)`. Truncating rather than rounding
/// absorbs the float noise iTerm2 leaves in stored components, so two values
/// compare equal when they land in the same 1/255 bucket.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct QuantizedRgb(pub i32, pub i32, pub i32);

impl QuantizedRgb {
    pub fn from_components(red: f64, green: f64, blue: f64) -> Self {
        Self(
            quantize_channel(red),
            quantize_channel(green),
            quantize_channel(blue),
        )
    }
}

/// Truncate a `[0.0, 1.0]` component to its 0..=255 channel value.
///
/// Out-of-range input is not clamped; it simply quantizes outside 0..=255.
pub fn quantize_channel(component: f64) -> i32 {
    (component * 255.0).floor() as i32
}
