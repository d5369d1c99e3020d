//! Brand lifecycle service.
//!
//! # Responsibility
//! - Enforce the creation stamping rule for `last_scan_date`.
//! - Enforce pre-existence checks for update and delete.
//! - Translate storage faults into the boolean/absent caller channel,
//!   keeping the underlying error observable through logs.
//!
//! # Invariants
//! - A successful create always leaves a non-null `last_scan_date`; a
//!   caller-supplied date is never overwritten.
//! - Update and delete never touch storage when the target is absent.
//! - Only pagination `ValidationError` crosses the service boundary as an
//!   error; everything else is a `false`/`None` result.

use crate::model::brand::Brand;
use crate::repo::brand_repo::{BrandRepository, PageRequest, RepoError, ValidationError};
use log::{error, info, warn};
use std::time::{SystemTime, UNIX_EPOCH};

/// Epoch-millisecond time source for scan-date stamping.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(_) => 0,
        }
    }
}

/// Lifecycle service wrapper for brand CRUD operations.
pub struct BrandService<R: BrandRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
}

impl<R: BrandRepository> BrandService<R> {
    /// Creates a service using the wall clock for scan-date stamping.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, SystemClock)
    }
}

impl<R: BrandRepository, C: Clock> BrandService<R, C> {
    /// Creates a service with an explicit time source.
    pub fn with_clock(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Returns all brands, or `None` after a logged storage fault.
    pub fn find_all(&self) -> Option<Vec<Brand>> {
        info!("event=brand_find_all module=service status=start");
        match self.repo.find_all() {
            Ok(brands) => {
                info!(
                    "event=brand_find_all module=service status=ok count={}",
                    brands.len()
                );
                Some(brands)
            }
            Err(err) => {
                log_degraded("find_all", &err);
                None
            }
        }
    }

    /// Returns one pagination window from boundary-supplied text parameters.
    ///
    /// # Errors
    /// - `ValidationError` for non-numeric, negative, or zero-size input;
    ///   this is the one error callers must handle themselves.
    ///
    /// `Ok(None)` signals a logged storage fault, matching `find_all`.
    pub fn find_page(
        &self,
        page: &str,
        size: &str,
    ) -> Result<Option<Vec<Brand>>, ValidationError> {
        let request = PageRequest::parse(page, size)?;
        info!(
            "event=brand_find_page module=service status=start page={} size={}",
            request.page, request.size
        );

        match self.repo.find_page(&request) {
            Ok(brands) => {
                info!(
                    "event=brand_find_page module=service status=ok page={} count={}",
                    request.page,
                    brands.len()
                );
                Ok(Some(brands))
            }
            Err(err) => {
                log_degraded("find_page", &err);
                Ok(None)
            }
        }
    }

    /// Looks one brand up by name.
    ///
    /// `None` covers both legitimate absence and a logged storage fault.
    pub fn find(&self, name: &str) -> Option<Brand> {
        info!("event=brand_find module=service status=start name={name}");
        match self.repo.find(name) {
            Ok(Some(brand)) => {
                info!("event=brand_find module=service status=ok name={name}");
                Some(brand)
            }
            Ok(None) => {
                info!("event=brand_find module=service status=not_found name={name}");
                None
            }
            Err(err) => {
                log_degraded("find", &err);
                None
            }
        }
    }

    /// Creates a brand, stamping `last_scan_date` when the caller left it
    /// unset.
    ///
    /// The stamped record is written in a single conditional insert, so a
    /// duplicate name or storage fault leaves no partial state behind.
    /// Returns `true` only on a verified insert.
    pub fn create(&self, brand: &Brand) -> bool {
        info!(
            "event=brand_create module=service status=start name={}",
            brand.name
        );

        let mut record = brand.clone();
        if record.last_scan_date.is_none() {
            record.last_scan_date = Some(self.clock.now_ms());
        }

        match self.repo.create(&record) {
            Ok(created) => {
                info!(
                    "event=brand_create module=service status=ok name={}",
                    record.name
                );
                created
            }
            Err(RepoError::Validation(err)) => {
                warn!(
                    "event=brand_create module=service status=rejected name={} error={}",
                    record.name, err
                );
                false
            }
            Err(err) => {
                log_degraded("create", &err);
                false
            }
        }
    }

    /// Fully overwrites an existing brand.
    ///
    /// Returns `false` without any storage write when the brand is absent.
    pub fn update(&self, brand: &Brand) -> bool {
        info!(
            "event=brand_update module=service status=start name={}",
            brand.name
        );

        match self.repo.find(&brand.name) {
            Ok(Some(_)) => {}
            Ok(None) => {
                warn!(
                    "event=brand_update module=service status=not_found name={}",
                    brand.name
                );
                return false;
            }
            Err(err) => {
                log_degraded("update", &err);
                return false;
            }
        }

        match self.repo.upsert(brand) {
            Ok(written) => {
                info!(
                    "event=brand_update module=service status=ok name={}",
                    brand.name
                );
                written
            }
            Err(RepoError::Validation(err)) => {
                warn!(
                    "event=brand_update module=service status=rejected name={} error={}",
                    brand.name, err
                );
                false
            }
            Err(err) => {
                log_degraded("update", &err);
                false
            }
        }
    }

    /// Removes an existing brand.
    ///
    /// Returns `false` without attempting deletion when the brand is absent.
    pub fn delete(&self, name: &str) -> bool {
        info!("event=brand_delete module=service status=start name={name}");

        match self.repo.find(name) {
            Ok(Some(_)) => {}
            Ok(None) => {
                warn!("event=brand_delete module=service status=not_found name={name}");
                return false;
            }
            Err(err) => {
                log_degraded("delete", &err);
                return false;
            }
        }

        match self.repo.delete(name) {
            Ok(true) => {
                info!("event=brand_delete module=service status=ok name={name}");
                true
            }
            Ok(false) => {
                // Lost a same-name race between the existence check and the
                // delete; the return value still reflects what happened.
                warn!("event=brand_delete module=service status=not_found name={name}");
                false
            }
            Err(err) => {
                log_degraded("delete", &err);
                false
            }
        }
    }
}

fn log_degraded(operation: &str, err: &RepoError) {
    error!("event=brand_{operation} module=service status=error error={err}");
}
