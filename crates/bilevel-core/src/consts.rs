/// ITU-R BT.709 luminance coefficient for the red channel.
pub const BT709_LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 luminance coefficient for the green channel.
pub const BT709_LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 luminance coefficient for the blue channel.
pub const BT709_LUMINANCE_B: f32 = 0.0722;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const BT601_LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const BT601_LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const BT601_LUMINANCE_B: f32 = 0.114;

/// Default binarization threshold used by configs and the CLI.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Weight the binary threshold passes to its grayscale pre-pass.
pub const GRAYSCALE_FULL_AMOUNT: f32 = 1.0;

/// Lowest accepted value for unit-interval parameters (threshold, amount).
pub const UNIT_MIN: f32 = 0.0;

/// Highest accepted value for unit-interval parameters (threshold, amount).
pub const UNIT_MAX: f32 = 1.0;
