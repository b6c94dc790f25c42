use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_THRESHOLD, GRAYSCALE_FULL_AMOUNT};
use crate::execution::ExecutionConfig;
use crate::filters::grayscale::GrayscaleMode;
use crate::region::Rect;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub filters: Vec<FilterStep>,
}

/// One filter in a pipeline. Colors are 8-bit RGBA; a missing `region` means the whole image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FilterStep {
    Grayscale {
        #[serde(default)]
        mode: GrayscaleMode,
        #[serde(default = "default_amount")]
        amount: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        region: Option<Rect>,
    },
    BinaryThreshold {
        #[serde(default = "default_threshold")]
        threshold: f32,
        #[serde(default = "default_upper")]
        upper: [u8; 4],
        #[serde(default = "default_lower")]
        lower: [u8; 4],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        region: Option<Rect>,
    },
}

fn default_amount() -> f32 {
    GRAYSCALE_FULL_AMOUNT
}
fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}
fn default_upper() -> [u8; 4] {
    [255, 255, 255, 255]
}
fn default_lower() -> [u8; 4] {
    [0, 0, 0, 255]
}

impl FilterStep {
    /// Binary threshold step with default colors over the whole image.
    pub fn binary_threshold(threshold: f32) -> Self {
        Self::BinaryThreshold {
            threshold,
            upper: default_upper(),
            lower: default_lower(),
            region: None,
        }
    }

    pub fn region(&self) -> Option<Rect> {
        match self {
            Self::Grayscale { region, .. } | Self::BinaryThreshold { region, .. } => *region,
        }
    }
}

impl std::fmt::Display for FilterStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grayscale { mode, amount, .. } => write!(f, "Grayscale ({mode}, {amount})"),
            Self::BinaryThreshold { threshold, .. } => write!(f, "Binary threshold ({threshold})"),
        }
    }
}
