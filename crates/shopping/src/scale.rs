use crate::{Result, ShoppingError};

/// Ratio of target servings to a recipe's base servings.
pub fn scale_factor(target_servings: u32, base_servings: u32) -> Result<f64> {
    if base_servings == 0 {
        return Err(ShoppingError::InvalidServings);
    }

    Ok(target_servings as f64 / base_servings as f64)
}

/// Scale an ingredient amount written for `base_servings` to `target_servings`.
///
/// The unit is left untouched; no conversion between measurement systems
/// happens here.
pub fn scale(amount: f64, target_servings: u32, base_servings: u32) -> Result<f64> {
    Ok(amount * scale_factor(target_servings, base_servings)?)
}
