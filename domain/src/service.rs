use crate::SizingInstruction;

/// Turn validated dimensions into a sizing instruction.
///
/// An exact box is requested exactly when both dimensions are supplied
/// non-zero; otherwise the single supplied dimension constrains the output
/// and the other is derived from the source aspect ratio by the transform
/// adapter. A zero never leaves here without the aspect-ratio flag set.
pub fn resolve_sizing(width: u32, height: u32) -> SizingInstruction {
    debug_assert!(width > 0 || height > 0);
    SizingInstruction {
        target_width: width,
        target_height: height,
        preserve_aspect_ratio: width == 0 || height == 0,
    }
}
