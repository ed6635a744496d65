//! Caller roles.
//!
//! Sessions are issued elsewhere; here a request only carries a bearer
//! token that is matched against the configured admin and channel-owner
//! tokens. Unknown or missing tokens give an anonymous caller.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Roles of the caller making a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caller {
    pub is_admin: bool,
    pub is_channel_owner: bool,
}

impl Caller {
    /// A caller with no roles.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolves roles for a bearer token.
    pub fn from_token(config: &ApiConfig, token: Option<&str>) -> Self {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Self::anonymous();
        };
        Self {
            is_admin: config.admin_tokens.iter().any(|t| t == token),
            is_channel_owner: config.owner_tokens.iter().any(|t| t == token),
        }
    }

    /// Fails unless the caller is an admin.
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(ApiError::Unauthorized("admin access required".into()))
        }
    }

    /// Fails unless the caller is an admin or the channel owner.
    pub fn require_moderator(&self) -> Result<()> {
        if self.is_admin || self.is_channel_owner {
            Ok(())
        } else {
            Err(ApiError::Unauthorized(
                "admin or channel owner access required".into(),
            ))
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        Ok(Caller::from_token(&state.config, bearer_token(parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn config() -> ApiConfig {
        ApiConfig::default()
            .with_admin_tokens(vec!["admin-token".into()])
            .with_owner_tokens(vec!["owner-token".into()])
    }

    #[test]
    fn test_from_token_roles() {
        let config = config();

        assert!(Caller::from_token(&config, Some("admin-token")).is_admin);
        assert!(Caller::from_token(&config, Some("owner-token")).is_channel_owner);
        assert_eq!(Caller::from_token(&config, Some("other")), Caller::anonymous());
        assert_eq!(Caller::from_token(&config, None), Caller::anonymous());
        assert_eq!(Caller::from_token(&config, Some("")), Caller::anonymous());
    }

    #[test]
    fn test_require_admin() {
        let admin = Caller {
            is_admin: true,
            is_channel_owner: false,
        };
        let owner = Caller {
            is_admin: false,
            is_channel_owner: true,
        };

        assert!(admin.require_admin().is_ok());
        assert!(matches!(owner.require_admin(), Err(ApiError::Unauthorized(_))));
        assert!(Caller::anonymous().require_admin().is_err());
    }

    #[test]
    fn test_require_moderator() {
        let owner = Caller {
            is_admin: false,
            is_channel_owner: true,
        };
        let admin = Caller {
            is_admin: true,
            is_channel_owner: false,
        };

        assert!(owner.require_moderator().is_ok());
        assert!(admin.require_moderator().is_ok());
        assert!(Caller::anonymous().require_moderator().is_err());
    }

    #[test]
    fn test_bearer_token_parsing() {
        let (parts, _) = Request::builder()
            .header(AUTHORIZATION, "Bearer  admin-token ")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(bearer_token(&parts), Some("admin-token"));

        let (parts, _) = Request::builder()
            .header(AUTHORIZATION, "Basic abc")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(bearer_token(&parts), None);

        let (parts, _) = Request::builder().body(()).unwrap().into_parts();
        assert_eq!(bearer_token(&parts), None);
    }
}
