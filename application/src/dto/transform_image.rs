use serde::Deserialize;

/// Raw query parameters as received on the wire. Dimensions stay strings
/// here: validation parses them leniently (non-numeric becomes 0) so that
/// the rejection rules fire in their documented order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransformImageParams {
    pub image: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub mode: Option<String>,
}

/// Transformed bytes ready to stream back, with the source media type.
#[derive(Debug, Clone)]
pub struct TransformImageOutput {
    pub bytes: Vec<u8>,
    pub media_type: String,
}
