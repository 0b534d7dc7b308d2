use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use serde_json::Value;
use tracing::debug;

use crate::domain::model::Credentials;
use crate::domain::ports::CredentialSource;
use crate::utils::error::{FillerError, Result};

/// Fetches the database login from AWS Secrets Manager.
///
/// The secret id is `{environment}/api/rds` and its payload is a one-entry
/// JSON object mapping the username to the password.
pub struct SecretsManagerCredentials {
    profile: Option<String>,
}

impl SecretsManagerCredentials {
    pub fn new(profile: Option<String>) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl CredentialSource for SecretsManagerCredentials {
    async fn db_credentials(
        &self,
        environment: &str,
        region: Option<&str>,
    ) -> Result<Credentials> {
        let region = region.ok_or_else(|| FillerError::MissingConfig {
            field: "db_region".to_string(),
        })?;
        let secret_id = format!("{environment}/api/rds");
        debug!("fetching secret {} from {}", secret_id, region);

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()));
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;
        let client = aws_sdk_secretsmanager::Client::new(&sdk_config);

        let response = client
            .get_secret_value()
            .secret_id(&secret_id)
            .send()
            .await
            .map_err(|err| FillerError::Credential {
                secret_id: secret_id.clone(),
                message: err.to_string(),
            })?;

        let payload = response
            .secret_string()
            .ok_or_else(|| FillerError::Credential {
                secret_id: secret_id.clone(),
                message: "secret has no string payload".to_string(),
            })?;

        parse_secret(&secret_id, payload)
    }
}

/// Fixed login for the local development database.
pub struct LocalCredentials;

#[async_trait]
impl CredentialSource for LocalCredentials {
    async fn db_credentials(
        &self,
        _environment: &str,
        _region: Option<&str>,
    ) -> Result<Credentials> {
        Ok(Credentials {
            username: "root".to_string(),
            password: "strongpassword".to_string(),
        })
    }
}

fn parse_secret(secret_id: &str, payload: &str) -> Result<Credentials> {
    let value: Value = serde_json::from_str(payload)?;
    let entry = value
        .as_object()
        .and_then(|object| object.iter().next())
        .ok_or_else(|| FillerError::Credential {
            secret_id: secret_id.to_string(),
            message: "expected a username/password object".to_string(),
        })?;

    let password = entry.1.as_str().ok_or_else(|| FillerError::Credential {
        secret_id: secret_id.to_string(),
        message: "password is not a string".to_string(),
    })?;

    Ok(Credentials {
        username: entry.0.clone(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_pair_secret() {
        let credentials = parse_secret("dev/api/rds", r#"{"api_user": "hunter2"}"#).unwrap();
        assert_eq!(credentials.username, "api_user");
        assert_eq!(credentials.password, "hunter2");
    }

    #[test]
    fn test_parse_rejects_empty_object() {
        let result = parse_secret("dev/api/rds", "{}");
        assert!(matches!(result, Err(FillerError::Credential { .. })));
    }

    #[test]
    fn test_parse_rejects_non_string_password() {
        let result = parse_secret("dev/api/rds", r#"{"api_user": 42}"#);
        assert!(matches!(result, Err(FillerError::Credential { .. })));
    }

    #[tokio::test]
    async fn test_local_credentials_fixture() {
        let credentials = LocalCredentials
            .db_credentials("local", None)
            .await
            .unwrap();
        assert_eq!(credentials.username, "root");
    }
}
