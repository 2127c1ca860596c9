use super::*;

const COORD: GeoCoordinate = GeoCoordinate {
    latitude: 16.8,
    longitude: 96.1,
};

// =========================================================
// 求助载荷测试
// =========================================================

#[test]
fn test_help_payload_carries_all_six_fields() {
    let payload = build_help_payload("Aye", "09123", "1", "", Some(COORD)).unwrap();

    assert_eq!(payload.name, "Aye");
    assert_eq!(payload.phone, "09123");
    assert_eq!(payload.address, "1");
    assert_eq!(payload.comment, "");
    assert_eq!(payload.lat, "16.8");
    assert_eq!(payload.lon, "96.1");
}

#[test]
fn test_help_payload_without_coordinate_sends_empty_strings() {
    let payload = build_help_payload("Aye", "09123", "Yangon", "note", None).unwrap();

    assert_eq!(payload.lat, "");
    assert_eq!(payload.lon, "");
}

#[test]
fn test_help_payload_rejects_empty_required_field() {
    for (name, phone, address) in [
        ("", "09123", "Yangon"),
        ("Aye", "", "Yangon"),
        ("Aye", "09123", ""),
        ("   ", "09123", "Yangon"),
    ] {
        let err = build_help_payload(name, phone, address, "", Some(COORD)).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredFields);
    }
}

#[test]
fn test_help_payload_comment_is_optional() {
    assert!(build_help_payload("Aye", "09123", "Yangon", "", None).is_ok());
}

#[test]
fn test_help_payload_serializes_to_wire_shape() {
    // 提交走 JSON；字段名必须与后端 /help 路由约定一致
    let payload = build_help_payload("Aye", "09123", "1", "", Some(COORD)).unwrap();
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "name": "Aye",
            "phone": "09123",
            "address": "1",
            "comment": "",
            "lat": "16.8",
            "lon": "96.1",
        })
    );
}

// =========================================================
// 援助提供者载荷测试
// =========================================================

#[test]
fn test_supplier_payload_joins_category_ids_with_commas() {
    let payload =
        build_supplier_payload("Mya", "09777", "2", "", &[3, 1, 7], Some(COORD)).unwrap();

    assert_eq!(payload.cat, "3,1,7");
}

#[test]
fn test_supplier_payload_requires_at_least_one_category() {
    let err = build_supplier_payload("Mya", "09777", "2", "", &[], Some(COORD)).unwrap_err();
    assert_eq!(err, ValidationError::NoCategorySelected);
}

#[test]
fn test_supplier_payload_requires_coordinate() {
    let err = build_supplier_payload("Mya", "09777", "2", "", &[1], None).unwrap_err();
    assert_eq!(err, ValidationError::NoLocation);
}

#[test]
fn test_supplier_payload_requires_presence_fields() {
    let err = build_supplier_payload("", "09777", "2", "", &[1], Some(COORD)).unwrap_err();
    assert_eq!(err, ValidationError::MissingRequiredFields);
}

// =========================================================
// 其余表单测试
// =========================================================

#[test]
fn test_blog_fields_both_required() {
    assert!(validate_blog_fields("title", "content").is_ok());
    assert!(validate_blog_fields("", "content").is_err());
    assert!(validate_blog_fields("title", "").is_err());
}

#[test]
fn test_login_fields_both_required() {
    assert!(validate_login_fields("admin", "secret").is_ok());
    assert!(validate_login_fields("", "secret").is_err());
    assert!(validate_login_fields("admin", "").is_err());
}

#[test]
fn test_comment_text_required() {
    assert!(validate_comment_text("we are coming").is_ok());
    assert!(validate_comment_text("  ").is_err());
}

#[test]
fn test_coordinate_fields_keep_full_precision() {
    let (lat, lon) = coordinate_fields(Some(GeoCoordinate {
        latitude: 16.871234567,
        longitude: 96.199876543,
    }));

    assert_eq!(lat, "16.871234567");
    assert_eq!(lon, "96.199876543");
}

#[test]
fn test_join_category_ids_single_and_empty() {
    assert_eq!(join_category_ids(&[5]), "5");
    assert_eq!(join_category_ids(&[]), "");
}
