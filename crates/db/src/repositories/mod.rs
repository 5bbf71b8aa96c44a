//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Language resolution happens in
//! SQL: listing queries LEFT JOIN the translation table at the requested
//! language (plus a fixed Korean join where the popularity sort needs its
//! tie-break key), so a page of entities costs one query.

pub mod category_repo;
pub mod place_repo;
pub mod refresh_token_repo;
pub mod region_repo;
pub mod sub_category_repo;
pub mod sub_region_repo;
pub mod user_repo;
pub mod verification_repo;

pub use category_repo::CategoryRepo;
pub use place_repo::PlaceRepo;
pub use refresh_token_repo::RefreshTokenRepo;
pub use region_repo::RegionRepo;
pub use sub_category_repo::SubCategoryRepo;
pub use sub_region_repo::SubRegionRepo;
pub use user_repo::UserRepo;
pub use verification_repo::VerificationRepo;
