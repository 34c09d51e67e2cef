use super::*;

// -- Text sanitization --

#[test]
fn sanitize_strips_control_chars() {
    assert_eq!(sanitize_text("co\u{7}ffee\n", 20).unwrap(), "coffee");
}

#[test]
fn sanitize_rejects_blank() {
    assert!(sanitize_text("  \t ", 20).is_err());
}

#[test]
fn sanitize_rejects_too_long() {
    assert!(sanitize_text(&"x".repeat(21), 20).is_err());
}

// -- Shop ids --

#[test]
fn shop_id_trimmed() {
    assert_eq!(validate_shop_id("  5c1a9e ").unwrap(), "5c1a9e");
}

#[test]
fn shop_id_with_space_rejected() {
    assert!(validate_shop_id("bean there").is_err());
}

#[test]
fn shop_id_empty_rejected() {
    assert!(validate_shop_id("").is_err());
}

#[test]
fn shop_id_too_long_rejected() {
    assert!(validate_shop_id(&"a".repeat(MAX_SHOP_ID_LENGTH + 1)).is_err());
}

// -- Categories --

#[test]
fn category_kept() {
    assert_eq!(
        validate_category("Hot Drinks").unwrap(),
        Some("Hot Drinks".to_string())
    );
}

#[test]
fn category_all_is_none() {
    assert_eq!(validate_category("all").unwrap(), None);
    assert_eq!(validate_category("ALL").unwrap(), None);
}

#[test]
fn category_blank_rejected() {
    assert!(validate_category(" ").is_err());
}

// -- Page size --

#[test]
fn page_size_bounds() {
    assert_eq!(validate_page_size(1).unwrap(), 1);
    assert_eq!(validate_page_size(MAX_PAGE_SIZE).unwrap(), MAX_PAGE_SIZE);
    assert!(validate_page_size(0).is_err());
    assert!(validate_page_size(-1).is_err());
    assert!(validate_page_size(MAX_PAGE_SIZE + 1).is_err());
}
