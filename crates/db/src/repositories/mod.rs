//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod entry_repo;
pub mod member_repo;
pub mod report_repo;

pub use entry_repo::EntryRepo;
pub use member_repo::MemberRepo;
pub use report_repo::ReportRepo;
