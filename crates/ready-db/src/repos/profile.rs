use ready_core::entities::Profile;
use ready_core::enums::UserRole;

use crate::StockDb;
use crate::error::DatabaseError;
use crate::helpers::get_opt_string;

fn row_to_profile(row: &libsql::Row) -> Result<Profile, DatabaseError> {
    let role = get_opt_string(row, 2)?
        .map(|raw| {
            UserRole::from_claim(&raw)
                .ok_or_else(|| DatabaseError::Query(format!("unknown role '{raw}'")))
        })
        .transpose()?;
    Ok(Profile {
        id: row.get(0)?,
        email: get_opt_string(row, 1)?,
        role,
    })
}

impl StockDb {
    /// Insert or replace a profile row.
    pub async fn upsert_profile(&self, profile: &Profile) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO profiles (id, email, role) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET email = excluded.email, role = excluded.role",
                libsql::params![
                    profile.id.as_str(),
                    profile.email.as_deref(),
                    profile.role.map(UserRole::as_str)
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn get_profile(&self, id: &str) -> Result<Option<Profile>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT id, email, role FROM profiles WHERE id = ?1", [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn missing_profile_is_none() {
        let db = test_db().await;
        assert_eq!(db.get_profile("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn upsert_replaces_role() {
        let db = test_db().await;
        let mut profile = Profile {
            id: "u-1".into(),
            email: Some("lead@example.com".into()),
            role: Some(UserRole::Staff),
        };
        db.upsert_profile(&profile).await.unwrap();

        profile.role = Some(UserRole::Admin);
        db.upsert_profile(&profile).await.unwrap();

        assert_eq!(db.get_profile("u-1").await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn null_role_reads_back_as_none() {
        let db = test_db().await;
        let profile = Profile {
            id: "u-2".into(),
            email: None,
            role: None,
        };
        db.upsert_profile(&profile).await.unwrap();
        assert_eq!(db.get_profile("u-2").await.unwrap(), Some(profile));
    }
}
