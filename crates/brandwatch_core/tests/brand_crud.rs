use brandwatch_core::datalake::open_datalake_in_memory;
use brandwatch_core::{
    open_datalake, Brand, BrandRepository, BrandService, DatalakeBrandRepository, PageRequest,
    RepoError, ServiceLevel, ValidationError,
};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn create_and_find_roundtrip() {
    let datalake = open_datalake_in_memory().unwrap();
    let repo = DatalakeBrandRepository::new(&datalake);

    let mut brand = Brand::new("acme");
    brand.service_level = ServiceLevel::Gold;
    brand.description = Some("tire manufacturer".to_string());
    brand.last_scan_date = Some(1_700_000_000_000);
    assert!(repo.create(&brand).unwrap());

    let loaded = repo.find("acme").unwrap().unwrap();
    assert_eq!(loaded, brand);
}

#[test]
fn find_missing_brand_is_none_not_an_error() {
    let datalake = open_datalake_in_memory().unwrap();
    let repo = DatalakeBrandRepository::new(&datalake);

    assert!(repo.find("ghost").unwrap().is_none());
}

#[test]
fn create_duplicate_name_fails_and_leaves_record_unmodified() {
    let datalake = open_datalake_in_memory().unwrap();
    let repo = DatalakeBrandRepository::new(&datalake);

    let mut original = Brand::new("acme");
    original.description = Some("first".to_string());
    repo.create(&original).unwrap();

    let mut second = Brand::new("acme");
    second.description = Some("second".to_string());
    let err = repo.create(&second).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::DuplicateName(name)) if name == "acme"
    ));

    let loaded = repo.find("acme").unwrap().unwrap();
    assert_eq!(loaded.description.as_deref(), Some("first"));
}

#[test]
fn upsert_creates_when_absent_and_overwrites_when_present() {
    let datalake = open_datalake_in_memory().unwrap();
    let repo = DatalakeBrandRepository::new(&datalake);

    let mut brand = Brand::new("acme");
    assert!(repo.upsert(&brand).unwrap());

    brand.service_level = ServiceLevel::Silver;
    brand.last_scan_date = Some(42);
    assert!(repo.upsert(&brand).unwrap());

    let loaded = repo.find("acme").unwrap().unwrap();
    assert_eq!(loaded.service_level, ServiceLevel::Silver);
    assert_eq!(loaded.last_scan_date, Some(42));
}

#[test]
fn delete_reports_whether_a_brand_was_removed() {
    let datalake = open_datalake_in_memory().unwrap();
    let repo = DatalakeBrandRepository::new(&datalake);

    assert!(!repo.delete("ghost").unwrap());

    repo.create(&Brand::new("acme")).unwrap();
    assert!(repo.delete("acme").unwrap());
    assert!(repo.find("acme").unwrap().is_none());
}

#[test]
fn validation_failure_blocks_create_and_upsert() {
    let datalake = open_datalake_in_memory().unwrap();
    let repo = DatalakeBrandRepository::new(&datalake);

    let invalid = Brand::new("no spaces allowed");
    let create_err = repo.create(&invalid).unwrap_err();
    assert!(matches!(
        create_err,
        RepoError::Validation(ValidationError::InvalidBrand(_))
    ));

    let upsert_err = repo.upsert(&Brand::new("")).unwrap_err();
    assert!(matches!(
        upsert_err,
        RepoError::Validation(ValidationError::InvalidBrand(_))
    ));

    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn corrupt_document_surfaces_invalid_document_error() {
    let datalake = open_datalake_in_memory().unwrap();

    datalake.upsert("brands", "acme", "not json").unwrap();

    let repo = DatalakeBrandRepository::new(&datalake);
    let err = repo.find("acme").unwrap_err();
    assert!(matches!(err, RepoError::InvalidDocument { key, .. } if key == "acme"));
}

#[test]
fn find_page_walks_a_five_brand_fixture() {
    let datalake = open_datalake_in_memory().unwrap();
    let repo = DatalakeBrandRepository::new(&datalake);

    for name in ["b1", "b2", "b3", "b4", "b5"] {
        repo.create(&Brand::new(name)).unwrap();
    }

    let first = repo.find_page(&PageRequest { page: 0, size: 2 }).unwrap();
    assert_eq!(first.len(), 2);

    let last = repo.find_page(&PageRequest { page: 2, size: 2 }).unwrap();
    assert_eq!(last.len(), 1);

    let past_the_end = repo.find_page(&PageRequest { page: 3, size: 2 }).unwrap();
    assert!(past_the_end.is_empty());

    let all = repo.find_all().unwrap();
    assert_eq!(all.len(), 5);
}

#[test]
fn page_request_parse_rejects_non_numeric_and_negative_input() {
    let err = PageRequest::parse("abc", "2").unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidPageParam { field: "page", .. }
    ));

    let err = PageRequest::parse("0", "-2").unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidPageParam { field: "size", .. }
    ));

    let err = PageRequest::parse("0", "0").unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidPageParam { field: "size", .. }
    ));

    let request = PageRequest::parse(" 1 ", "20").unwrap();
    assert_eq!(request, PageRequest { page: 1, size: 20 });
    assert_eq!(request.offset(), 20);
}

#[test]
fn service_create_then_find_returns_stamped_brand() {
    let datalake = open_datalake_in_memory().unwrap();
    let repo = DatalakeBrandRepository::new(&datalake);
    let service = BrandService::new(repo);

    assert!(service.create(&Brand::new("acme")));

    let found = service.find("acme").unwrap();
    assert_eq!(found.name, "acme");
    assert!(found.is_scanned());
}

#[test]
fn concurrent_creates_for_same_new_name_elect_one_winner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("race.db");

    // Migrate once up front so both workers start from a ready store.
    drop(open_datalake(&path).unwrap());

    let barrier = Arc::new(Barrier::new(2));
    let mut workers = Vec::new();
    for _ in 0..2 {
        let barrier = Arc::clone(&barrier);
        let path = path.clone();
        workers.push(thread::spawn(move || {
            let datalake = open_datalake(&path).unwrap();
            let repo = DatalakeBrandRepository::new(&datalake);
            let service = BrandService::new(repo);

            barrier.wait();
            service.create(&Brand::new("contested"))
        }));
    }

    let outcomes: Vec<bool> = workers
        .into_iter()
        .map(|worker| worker.join().unwrap())
        .collect();

    assert_eq!(outcomes.iter().filter(|created| **created).count(), 1);

    let datalake = open_datalake(&path).unwrap();
    let repo = DatalakeBrandRepository::new(&datalake);
    let survivor = repo.find("contested").unwrap().unwrap();
    assert!(survivor.is_scanned());
}
