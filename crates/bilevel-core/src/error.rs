use thiserror::Error;

#[derive(Error, Debug)]
pub enum BilevelError {
    #[error("Invalid argument '{name}': must be in [{min}, {max}], got {value}")]
    Configuration {
        name: &'static str,
        min: f32,
        max: f32,
        value: f32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl BilevelError {
    /// Build a configuration error when `value` is outside `[min, max]` (or NaN).
    pub(crate) fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::Configuration {
                name,
                min,
                max,
                value,
            })
        }
    }
}

pub type Result<T> = std::result::Result<T, BilevelError>;
