use anyhow::{bail, Context, Result};
use bilevel_core::execution::ExecutionConfig;
use bilevel_core::region::Rect;
use clap::Args;

/// Parallelism flags shared by the filter commands.
#[derive(Args)]
pub struct ExecutionArgs {
    /// Worker threads for a dedicated pool (default: rayon global pool)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Maximum number of row chunks processed at once
    #[arg(long)]
    pub max_parallelism: Option<usize>,
}

impl ExecutionArgs {
    pub fn to_config(&self) -> ExecutionConfig {
        ExecutionConfig {
            max_degree_of_parallelism: self.max_parallelism,
            num_threads: self.threads,
        }
    }
}

/// Parse "x,y,width,height". Coordinates may be negative.
pub fn parse_rect(s: &str) -> Result<Rect> {
    let parts: Vec<i32> = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<std::result::Result<_, _>>()
        .context("Invalid rect format (expected 'x,y,width,height')")?;
    if parts.len() != 4 {
        bail!("Rect requires exactly 4 values: x,y,width,height");
    }
    Ok(Rect::new(parts[0], parts[1], parts[2], parts[3]))
}

/// Parse a hex color "RRGGBB" or "RRGGBBAA", with or without a leading '#'.
pub fn parse_color(s: &str) -> Result<[u8; 4]> {
    let hex = s.trim().trim_start_matches('#');
    if !matches!(hex.len(), 6 | 8) {
        bail!("Color must be RRGGBB or RRGGBBAA, got '{s}'");
    }
    let mut rgba = [255u8; 4];
    for (i, slot) in rgba.iter_mut().take(hex.len() / 2).enumerate() {
        let byte = hex
            .get(i * 2..i * 2 + 2)
            .with_context(|| format!("Invalid color '{s}'"))?;
        *slot = u8::from_str_radix(byte, 16).with_context(|| format!("Invalid color '{s}'"))?;
    }
    Ok(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rect_allows_negative_origin() {
        assert_eq!(parse_rect("-5, 0, 10, 10").unwrap(), Rect::new(-5, 0, 10, 10));
    }

    #[test]
    fn test_parse_rect_wrong_arity() {
        assert!(parse_rect("1,2,3").is_err());
        assert!(parse_rect("a,b,c,d").is_err());
    }

    #[test]
    fn test_parse_color_rgb_defaults_alpha() {
        assert_eq!(parse_color("#ff8000").unwrap(), [255, 128, 0, 255]);
    }

    #[test]
    fn test_parse_color_rgba() {
        assert_eq!(parse_color("00000080").unwrap(), [0, 0, 0, 128]);
    }

    #[test]
    fn test_parse_color_rejects_bad_input() {
        assert!(parse_color("fff").is_err());
        assert!(parse_color("gg0000").is_err());
        assert!(parse_color("ü0000").is_err());
    }
}
