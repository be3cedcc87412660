use crate::domain::models::member::{Member, MemberRow, NewMember};
use crate::domain::ports::MemberRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

const MEMBER_COLUMNS: &str =
    "id, member_id, full_name, email, phone, membership_type, status, start_date, end_date, notes, created_at";

pub struct SqliteMemberRepo {
    pool: SqlitePool,
}

impl SqliteMemberRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepo {
    async fn insert(&self, member: &NewMember) -> Result<Member, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(&format!(
            "INSERT INTO members (member_id, full_name, email, phone, membership_type, status, start_date, end_date, notes, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            MEMBER_COLUMNS
        ))
            .bind(&member.member_id)
            .bind(&member.full_name)
            .bind(&member.email)
            .bind(&member.phone)
            .bind(member.membership_type.as_str())
            .bind(member.status.as_str())
            .bind(member.start_date)
            .bind(member.end_date)
            .bind(&member.notes)
            .bind(member.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        row.into_member()
    }

    async fn find_all(&self) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query_as::<_, MemberRow>(&format!(
            "SELECT {} FROM members ORDER BY created_at DESC",
            MEMBER_COLUMNS
        ))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        rows.into_iter().map(MemberRow::into_member).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(&format!(
            "SELECT {} FROM members WHERE id = ?",
            MEMBER_COLUMNS
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        row.map(MemberRow::into_member).transpose()
    }

    async fn find_by_member_id(&self, member_id: &str) -> Result<Option<Member>, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(&format!(
            "SELECT {} FROM members WHERE member_id = ?",
            MEMBER_COLUMNS
        ))
            .bind(member_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        row.map(MemberRow::into_member).transpose()
    }

    async fn update(&self, member: &Member) -> Result<Member, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(&format!(
            "UPDATE members SET member_id = ?, full_name = ?, email = ?, phone = ?, membership_type = ?, status = ?, start_date = ?, end_date = ?, notes = ? \
             WHERE id = ? RETURNING {}",
            MEMBER_COLUMNS
        ))
            .bind(&member.member_id)
            .bind(&member.full_name)
            .bind(&member.email)
            .bind(&member.phone)
            .bind(member.membership_type.as_str())
            .bind(member.status.as_str())
            .bind(member.start_date)
            .bind(member.end_date)
            .bind(&member.notes)
            .bind(member.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Member not found".into()))?;
        row.into_member()
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("SQLite member deletion failed: {:?}", e);
                AppError::Database(e)
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".into()));
        }
        Ok(())
    }
}
