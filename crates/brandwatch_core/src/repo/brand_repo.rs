//! Brand repository contract and datalake implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `brands` document collection.
//! - Keep document encoding and key handling inside the persistence
//!   boundary.
//! - Own the text-to-integer pagination parsing contract.
//!
//! # Invariants
//! - Write paths must call `Brand::validate()` before any storage mutation.
//! - Read paths must reject corrupt persisted documents instead of masking
//!   them.
//! - Absence (`find` miss, `delete` of a missing key) is a legitimate
//!   outcome, never an error.

use crate::datalake::{DatalakeClient, DatalakeError};
use crate::model::brand::{Brand, BrandValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BRAND_COLLECTION: &str = "brands";

pub type RepoResult<T> = Result<T, RepoError>;

/// Rejected caller input.
#[derive(Debug)]
pub enum ValidationError {
    /// The brand record itself violates the persistence contract.
    InvalidBrand(BrandValidationError),
    /// A brand with the same name already exists.
    DuplicateName(String),
    /// A pagination parameter is non-numeric, negative, or zero-sized.
    InvalidPageParam { field: &'static str, value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBrand(err) => write!(f, "{err}"),
            Self::DuplicateName(name) => write!(f, "brand `{name}` already exists"),
            Self::InvalidPageParam { field, value } => {
                write!(f, "invalid pagination parameter {field}=`{value}`")
            }
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBrand(err) => Some(err),
            _ => None,
        }
    }
}

/// Generic repository error for brand persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Storage(DatalakeError),
    Serialization(serde_json::Error),
    InvalidDocument { key: String, message: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "{err}"),
            Self::InvalidDocument { key, message } => {
                write!(f, "invalid persisted brand document `{key}`: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::InvalidDocument { .. } => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<BrandValidationError> for RepoError {
    fn from(value: BrandValidationError) -> Self {
        Self::Validation(ValidationError::InvalidBrand(value))
    }
}

impl From<DatalakeError> for RepoError {
    fn from(value: DatalakeError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Parsed pagination window.
///
/// Page indexes are zero-based; the storage offset is `page * size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    /// Parses boundary-supplied text parameters.
    ///
    /// # Errors
    /// - `InvalidPageParam` for non-numeric or negative input, and for a
    ///   zero page size.
    pub fn parse(page: &str, size: &str) -> Result<Self, ValidationError> {
        let parsed_page = parse_page_param("page", page)?;
        let parsed_size = parse_page_param("size", size)?;
        if parsed_size == 0 {
            return Err(ValidationError::InvalidPageParam {
                field: "size",
                value: size.trim().to_string(),
            });
        }

        Ok(Self {
            page: parsed_page,
            size: parsed_size,
        })
    }

    /// Storage offset of the first row in this window.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

fn parse_page_param(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidPageParam {
            field,
            value: value.trim().to_string(),
        })
}

/// Repository interface for brand CRUD operations.
pub trait BrandRepository {
    /// Returns every brand, in storage insertion order.
    fn find_all(&self) -> RepoResult<Vec<Brand>>;
    /// Returns one pagination window; past-the-end windows are empty.
    fn find_page(&self, request: &PageRequest) -> RepoResult<Vec<Brand>>;
    /// Looks one brand up by name. `None` is legitimate absence.
    fn find(&self, name: &str) -> RepoResult<Option<Brand>>;
    /// Inserts a new brand; a duplicate name fails with `ValidationError`.
    fn create(&self, brand: &Brand) -> RepoResult<bool>;
    /// Fully overwrites a brand document, creating it when absent.
    fn upsert(&self, brand: &Brand) -> RepoResult<bool>;
    /// Removes a brand document; `false` when the name did not exist.
    fn delete(&self, name: &str) -> RepoResult<bool>;
}

/// Datalake-backed brand repository.
pub struct DatalakeBrandRepository<'dl> {
    datalake: &'dl DatalakeClient,
}

impl<'dl> DatalakeBrandRepository<'dl> {
    /// Constructs a repository from a migrated/ready datalake client.
    pub fn new(datalake: &'dl DatalakeClient) -> Self {
        Self { datalake }
    }
}

impl BrandRepository for DatalakeBrandRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Brand>> {
        let bodies = self.datalake.scan(BRAND_COLLECTION)?;
        decode_bodies(bodies)
    }

    fn find_page(&self, request: &PageRequest) -> RepoResult<Vec<Brand>> {
        let bodies = self
            .datalake
            .scan_page(BRAND_COLLECTION, request.size, request.offset())?;
        decode_bodies(bodies)
    }

    fn find(&self, name: &str) -> RepoResult<Option<Brand>> {
        match self.datalake.get(BRAND_COLLECTION, name)? {
            Some(body) => Ok(Some(decode_brand(name, &body)?)),
            None => Ok(None),
        }
    }

    fn create(&self, brand: &Brand) -> RepoResult<bool> {
        brand.validate()?;

        let body = serde_json::to_string(brand)?;
        let inserted = self
            .datalake
            .insert_if_absent(BRAND_COLLECTION, &brand.name, &body)?;
        if !inserted {
            return Err(ValidationError::DuplicateName(brand.name.clone()).into());
        }

        Ok(true)
    }

    fn upsert(&self, brand: &Brand) -> RepoResult<bool> {
        brand.validate()?;

        let body = serde_json::to_string(brand)?;
        let written = self
            .datalake
            .upsert(BRAND_COLLECTION, &brand.name, &body)?;

        Ok(written)
    }

    fn delete(&self, name: &str) -> RepoResult<bool> {
        let removed = self.datalake.delete(BRAND_COLLECTION, name)?;
        Ok(removed)
    }
}

fn decode_bodies(bodies: Vec<String>) -> RepoResult<Vec<Brand>> {
    let mut brands = Vec::with_capacity(bodies.len());
    for (index, body) in bodies.iter().enumerate() {
        let brand: Brand =
            serde_json::from_str(body).map_err(|err| RepoError::InvalidDocument {
                key: format!("{BRAND_COLLECTION}[{index}]"),
                message: err.to_string(),
            })?;
        brands.push(brand);
    }
    Ok(brands)
}

fn decode_brand(key: &str, body: &str) -> RepoResult<Brand> {
    let brand: Brand = serde_json::from_str(body).map_err(|err| RepoError::InvalidDocument {
        key: key.to_string(),
        message: err.to_string(),
    })?;

    if brand.name != key {
        return Err(RepoError::InvalidDocument {
            key: key.to_string(),
            message: format!("document name `{}` does not match its key", brand.name),
        });
    }

    Ok(brand)
}
