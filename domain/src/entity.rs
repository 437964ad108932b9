use serde::{Deserialize, Serialize};

/// How the target box is applied to the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformMode {
    Resize,
    Crop,
}

impl TransformMode {
    pub const ACCEPTED: [&'static str; 2] = ["resize", "crop"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "resize" => Some(Self::Resize),
            "crop" => Some(Self::Crop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Crop => "crop",
        }
    }
}

/// A fully validated transformation request. Width and height are already
/// range-checked; at least one of them is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub image_url: String,
    pub width: u32,
    pub height: u32,
    pub mode: TransformMode,
}

/// Target box for the transform adapter. A zero dimension is only valid
/// together with `preserve_aspect_ratio`, where it means "derive this
/// dimension from the source aspect ratio".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingInstruction {
    pub target_width: u32,
    pub target_height: u32,
    pub preserve_aspect_ratio: bool,
}

/// Raw encoded bytes retrieved from the source URL, paired with the
/// normalized `image/<subtype>` media type reported by the upstream.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

/// Encoded output of the transform adapter. The media type matches the
/// source; only pixels change, never the format.
#[derive(Debug, Clone)]
pub struct TransformedImage {
    pub bytes: Vec<u8>,
    pub media_type: String,
}
