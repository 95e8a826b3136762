//! Frame: crops media to a fixed aspect ratio.

use super::Recipe;
use crate::stylesheet::{Rule, StyleSheet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `width / height`, e.g. 16:9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::new(16, 9)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Frame {
    pub class_name: String,
    pub ratio: AspectRatio,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            class_name: "frame".into(),
            ratio: AspectRatio::default(),
        }
    }
}

impl Recipe for Frame {
    fn name(&self) -> &'static str {
        "Frame"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();

        StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("aspect-ratio", self.ratio)
                    .declare("overflow", "hidden")
                    .declare("display", "flex")
                    .declare("justify-content", "center")
                    .declare("align-items", "center"),
            )
            .with(
                Rule::with_selectors([format!("{class} > img"), format!("{class} > video")])
                    .declare("inline-size", "100%")
                    .declare("block-size", "100%")
                    .declare("object-fit", "cover"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_css() {
        insta::assert_snapshot!(Frame::default().css(), @r"
        .frame {
          aspect-ratio: 16 / 9;
          overflow: hidden;
          display: flex;
          justify-content: center;
          align-items: center;
        }

        .frame > img,
        .frame > video {
          inline-size: 100%;
          block-size: 100%;
          object-fit: cover;
        }
        ");
    }

    #[test]
    fn test_square_frame() {
        let frame = Frame {
            ratio: AspectRatio::new(1, 1),
            ..Frame::default()
        };
        assert_eq!(
            frame.stylesheet().rule(".frame").unwrap().get("aspect-ratio"),
            Some("1 / 1")
        );
    }
}
