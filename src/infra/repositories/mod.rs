pub mod sqlite_member_repo;
pub mod postgres_member_repo;
