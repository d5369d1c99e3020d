use brandwatch_core::{Brand, BrandValidationError, ServiceLevel};

#[test]
fn brand_new_sets_defaults() {
    let brand = Brand::new("acme");

    assert_eq!(brand.name, "acme");
    assert_eq!(brand.service_level, ServiceLevel::None);
    assert_eq!(brand.description, None);
    assert_eq!(brand.last_scan_date, None);
    assert!(!brand.is_scanned());
}

#[test]
fn validate_accepts_key_safe_names() {
    for name in ["acme", "ACME", "acme-corp.io", "a", "brand_7"] {
        Brand::new(name).validate().unwrap();
    }
}

#[test]
fn validate_rejects_empty_name() {
    let err = Brand::new("").validate().unwrap_err();
    assert_eq!(err, BrandValidationError::EmptyName);
}

#[test]
fn validate_rejects_names_unfit_for_document_keys() {
    for name in ["acme corp", "-acme", "acme-", ".acme", "acme/eu", "br&nd"] {
        let err = Brand::new(name).validate().unwrap_err();
        assert!(
            matches!(err, BrandValidationError::InvalidName(_)),
            "name `{name}` produced {err:?}"
        );
    }
}

#[test]
fn validate_rejects_overlong_name() {
    let name = "a".repeat(101);
    let err = Brand::new(name).validate().unwrap_err();
    assert_eq!(
        err,
        BrandValidationError::NameTooLong {
            length: 101,
            max: 100
        }
    );
}

#[test]
fn validate_rejects_pre_epoch_scan_date() {
    let mut brand = Brand::new("acme");
    brand.last_scan_date = Some(-1);

    let err = brand.validate().unwrap_err();
    assert_eq!(err, BrandValidationError::NegativeScanDate(-1));
}

#[test]
fn brand_serialization_uses_expected_wire_fields() {
    let mut brand = Brand::new("acme");
    brand.service_level = ServiceLevel::Gold;
    brand.description = Some("tire manufacturer".to_string());
    brand.last_scan_date = Some(1_700_000_000_000);

    let json = serde_json::to_value(&brand).unwrap();
    assert_eq!(json["name"], "acme");
    assert_eq!(json["serviceLevel"], "gold");
    assert_eq!(json["description"], "tire manufacturer");
    assert_eq!(json["lastScanDate"], 1_700_000_000_000_i64);

    let decoded: Brand = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, brand);
}

#[test]
fn deserialize_defaults_optional_wire_fields() {
    let value = serde_json::json!({ "name": "acme" });

    let decoded: Brand = serde_json::from_value(value).unwrap();
    assert_eq!(decoded.service_level, ServiceLevel::None);
    assert_eq!(decoded.description, None);
    assert_eq!(decoded.last_scan_date, None);
}
