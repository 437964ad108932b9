use pixfit_domain::{TransformMode, TransformRequest};

use crate::TransformImageParams;

/// Validate raw query parameters into a `TransformRequest`. Pure function;
/// rules apply in order and the first failure wins.
pub fn validate_params(
    params: &TransformImageParams,
    max_dimension: u32,
) -> Result<TransformRequest, String> {
    let image_url = params.image.as_deref().map(str::trim).unwrap_or("");
    if image_url.is_empty() {
        return Err("Missing 'image' query parameter.".to_string());
    }

    let width = parse_dimension(params.width.as_deref());
    let height = parse_dimension(params.height.as_deref());
    if width == 0 && height == 0 {
        return Err("Missing non-zero 'height' or 'width' query parameter.".to_string());
    }
    if width < 0 || height < 0 {
        return Err("Negative height or width is not supported.".to_string());
    }
    if width > i64::from(max_dimension) || height > i64::from(max_dimension) {
        return Err(format!(
            "Height or width exceeds the maximum dimension of {max_dimension}."
        ));
    }

    let mode = match params.mode.as_deref() {
        None => TransformMode::Resize,
        Some(raw) => TransformMode::parse(raw).ok_or_else(|| {
            format!(
                "Invalid mode '{raw}'; accepted modes are {}.",
                TransformMode::ACCEPTED
                    .map(|mode| format!("'{mode}'"))
                    .join(" and ")
            )
        })?,
    };

    Ok(TransformRequest {
        image_url: image_url.to_string(),
        width: width as u32,
        height: height as u32,
        mode,
    })
}

/// Absent and non-numeric values both read as 0, matching the lenient
/// numeric coercion of the public query contract.
fn parse_dimension(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(0)
}
