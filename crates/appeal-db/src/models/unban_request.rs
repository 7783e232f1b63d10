//! Unban request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use appeal_core::{AccountId, DomainError, Resolution, UnbanRequest};

/// Database model for the `unban_requests` table
#[derive(Debug, Clone, FromRow)]
pub struct UnbanRequestModel {
    pub account_id: i64,
    pub platform_nickname: String,
    pub community: String,
    pub reason: String,
    pub request_count: i32,
    pub request_time: DateTime<Utc>,
    pub resolution: Option<String>,
    pub resolved_by: Option<String>,
}

impl UnbanRequestModel {
    /// Convert into the domain entity. A stored resolution value outside the
    /// known set means the table was written by something else; surface it
    /// as a database error rather than guessing.
    pub fn into_entity(self) -> Result<UnbanRequest, DomainError> {
        let resolution = self
            .resolution
            .as_deref()
            .map(Resolution::parse)
            .transpose()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(UnbanRequest {
            account_id: AccountId::new(self.account_id),
            platform_nickname: self.platform_nickname,
            community: self.community,
            reason: self.reason,
            request_count: self.request_count,
            request_time: self.request_time,
            resolution,
            resolved_by: self.resolved_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(resolution: Option<&str>) -> UnbanRequestModel {
        UnbanRequestModel {
            account_id: 76_561_198_012_345_678,
            platform_nickname: "muuki".to_string(),
            community: "DPLB".to_string(),
            reason: "crash".to_string(),
            request_count: 1,
            request_time: Utc::now(),
            resolution: resolution.map(String::from),
            resolved_by: resolution.map(|_| "mod".to_string()),
        }
    }

    #[test]
    fn test_into_entity_unresolved() {
        let entity = model(None).into_entity().unwrap();
        assert_eq!(entity.resolution, None);
        assert_eq!(entity.resolved_by, None);
    }

    #[test]
    fn test_into_entity_resolved() {
        let entity = model(Some("not_connected")).into_entity().unwrap();
        assert_eq!(entity.resolution, Some(Resolution::NotConnected));
        assert_eq!(entity.resolved_by.as_deref(), Some("mod"));
    }

    #[test]
    fn test_into_entity_rejects_unknown_resolution() {
        let err = model(Some("banned")).into_entity().unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
