//! Repository traits (ports)

pub mod role_repository;
pub mod profile_repository;

pub use role_repository::RoleRepository;
pub use profile_repository::ProfileRepository;
