use crate::error::ShopfrontError;

pub const MAX_SHOP_ID_LENGTH: usize = 64;
pub const MAX_CATEGORY_LENGTH: usize = 80;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, ShopfrontError> {
    if input.len() > max_len {
        return Err(ShopfrontError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(ShopfrontError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a shop identifier: non-empty, no inner whitespace, bounded length.
pub fn validate_shop_id(input: &str) -> Result<String, ShopfrontError> {
    let id = sanitize_text(input, MAX_SHOP_ID_LENGTH)?;
    if id.chars().any(char::is_whitespace) {
        return Err(ShopfrontError::InvalidInput(format!(
            "shop id '{}' must not contain whitespace",
            id
        )));
    }
    Ok(id)
}

/// Validate a category filter. `all` (any case) means no filter and yields `None`.
pub fn validate_category(input: &str) -> Result<Option<String>, ShopfrontError> {
    let category = sanitize_text(input, MAX_CATEGORY_LENGTH)?;
    if category.eq_ignore_ascii_case(shopfront_api::ALL_CATEGORIES) {
        Ok(None)
    } else {
        Ok(Some(category))
    }
}

/// Validate a page size: 1 to `MAX_PAGE_SIZE` inclusive.
pub fn validate_page_size(size: i64) -> Result<i64, ShopfrontError> {
    if (1..=MAX_PAGE_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(ShopfrontError::InvalidInput(format!(
            "page size {} out of range (1-{})",
            size, MAX_PAGE_SIZE
        )))
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
