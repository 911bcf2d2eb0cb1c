use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";

/// Decides whether a username/password pair may enter the application
pub trait CredentialVerifier: std::fmt::Debug + Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single fixed account, compared literally
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: SecretString,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, SecretString::from(DEFAULT_PASSWORD))
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password.expose_secret()
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credentials() {
        let verifier = StaticCredentials::default();
        assert!(verifier.verify("admin", "admin123"));
        assert!(!verifier.verify("admin", "admin"));
        assert!(!verifier.verify("Admin", "admin123"));
        assert!(!verifier.verify("", ""));
    }

    #[test]
    fn test_configured_credentials_replace_default() {
        let verifier = StaticCredentials::new("picker", SecretString::from("s3cret"));
        assert!(verifier.verify("picker", "s3cret"));
        assert!(!verifier.verify("admin", "admin123"));
    }

    #[test]
    fn test_debug_output_hides_password() {
        let verifier = StaticCredentials::default();
        assert!(!format!("{:?}", verifier).contains("admin123"));
    }
}
