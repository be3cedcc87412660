use crate::domain::models::member::{Member, NewMember};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn insert(&self, member: &NewMember) -> Result<Member, AppError>;
    async fn find_all(&self) -> Result<Vec<Member>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AppError>;
    async fn find_by_member_id(&self, member_id: &str) -> Result<Option<Member>, AppError>;
    async fn update(&self, member: &Member) -> Result<Member, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
