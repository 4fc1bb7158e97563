use super::types::ResolvedCredentials;

/// Resolves one credential from its flag and environment values.
///
/// The flag wins when both are set; empty strings count as absent.
fn first_non_empty(flag: Option<&str>, env_val: Option<String>) -> Option<String> {
    flag.filter(|v| !v.is_empty())
        .map(str::to_string)
        .or(env_val.filter(|v| !v.is_empty()))
}

/// Resolve the credential pair from explicit flag values and the environment
/// fallback, without touching the process environment itself.
///
/// # Errors
///
/// Returns an error message identifying both configuration methods when
/// either key cannot be resolved.
pub fn resolve_credentials_from(
    access_flag: Option<&str>,
    access_env: Option<String>,
    secret_flag: Option<&str>,
    secret_env: Option<String>,
) -> Result<ResolvedCredentials, String> {
    let access_key_id = first_non_empty(access_flag, access_env);
    let secret_access_key = first_non_empty(secret_flag, secret_env);

    match (access_key_id, secret_access_key) {
        (Some(access_key_id), Some(secret_access_key)) => Ok(ResolvedCredentials {
            access_key_id,
            secret_access_key,
        }),
        _ => Err("R2 credentials required.\n\
            Set R2_ACCESS_KEY_ID and R2_SECRET_ACCESS_KEY environment variables\n\
            Or use --access-key and --secret-key arguments"
            .to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_environment() {
        let creds = resolve_credentials_from(
            Some("flag-access"),
            Some("env-access".to_string()),
            Some("flag-secret"),
            Some("env-secret".to_string()),
        )
        .unwrap();

        assert_eq!(creds.access_key_id, "flag-access");
        assert_eq!(creds.secret_access_key, "flag-secret");
    }

    #[test]
    fn test_environment_fallback() {
        let creds = resolve_credentials_from(
            None,
            Some("env-access".to_string()),
            None,
            Some("env-secret".to_string()),
        )
        .unwrap();

        assert_eq!(creds.access_key_id, "env-access");
        assert_eq!(creds.secret_access_key, "env-secret");
    }

    #[test]
    fn test_sources_can_mix_per_key() {
        let creds = resolve_credentials_from(
            Some("flag-access"),
            None,
            None,
            Some("env-secret".to_string()),
        )
        .unwrap();

        assert_eq!(creds.access_key_id, "flag-access");
        assert_eq!(creds.secret_access_key, "env-secret");
    }

    #[test]
    fn test_empty_flag_counts_as_absent() {
        let creds = resolve_credentials_from(
            Some(""),
            Some("env-access".to_string()),
            Some("flag-secret"),
            None,
        )
        .unwrap();

        assert_eq!(creds.access_key_id, "env-access");
        assert_eq!(creds.secret_access_key, "flag-secret");
    }

    #[test]
    fn test_missing_both_sources_is_an_error() {
        let err = resolve_credentials_from(None, None, None, None).unwrap_err();

        // The message must name both ways to supply credentials
        assert!(err.contains("R2_ACCESS_KEY_ID"));
        assert!(err.contains("R2_SECRET_ACCESS_KEY"));
        assert!(err.contains("--access-key"));
        assert!(err.contains("--secret-key"));
    }

    #[test]
    fn test_one_missing_key_is_an_error() {
        let result = resolve_credentials_from(Some("flag-access"), None, None, None);
        assert!(result.is_err());
    }
}
