//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods that guard
//! relationship integrity run their lookups and the write inside one
//! transaction and return [`RepoError`](crate::error::RepoError).

pub mod character_repo;
pub mod identity_repo;
pub mod maintenance_repo;
pub mod membership_repo;
pub mod stats_repo;
pub mod team_repo;

pub use character_repo::CharacterRepo;
pub use identity_repo::IdentityRepo;
pub use maintenance_repo::MaintenanceRepo;
pub use membership_repo::MembershipRepo;
pub use stats_repo::StatsRepo;
pub use team_repo::TeamRepo;
