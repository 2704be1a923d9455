use std::fmt;
use tracing::info;

/// Which side of the counter a user logs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Customer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Owner => write!(f, "owner"),
            Role::Customer => write!(f, "customer"),
        }
    }
}

/// A username/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Checks a claimed identity for a role against a known secret.
///
/// Flows only depend on this trait, so the credential store can be replaced
/// without touching them.
pub trait Authenticator {
    fn verify(&self, role: Role, username: &str, password: &str) -> bool;
}

/// The two built-in accounts, compared in plaintext.
#[derive(Debug, Clone)]
pub struct FixedCredentials {
    owner: Credential,
    customer: Credential,
}

impl FixedCredentials {
    pub fn new(owner: Credential, customer: Credential) -> Self {
        Self { owner, customer }
    }

    fn credential(&self, role: Role) -> &Credential {
        match role {
            Role::Owner => &self.owner,
            Role::Customer => &self.customer,
        }
    }
}

impl Default for FixedCredentials {
    /// `admin`/`admin123` for the owner, `customer`/`customer123` for customers.
    fn default() -> Self {
        Self::new(
            Credential::new("admin", "admin123"),
            Credential::new("customer", "customer123"),
        )
    }
}

impl Authenticator for FixedCredentials {
    fn verify(&self, role: Role, username: &str, password: &str) -> bool {
        let expected = self.credential(role);
        let ok = username == expected.username && password == expected.password;
        info!(%role, username, success = ok, "login attempt");
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accounts_accepted() {
        let auth = FixedCredentials::default();
        assert!(auth.verify(Role::Owner, "admin", "admin123"));
        assert!(auth.verify(Role::Customer, "customer", "customer123"));
    }

    #[test]
    fn test_accounts_are_bound_to_their_role() {
        let auth = FixedCredentials::default();
        assert!(!auth.verify(Role::Customer, "admin", "admin123"));
        assert!(!auth.verify(Role::Owner, "customer", "customer123"));
    }

    #[test]
    fn test_single_character_deviation_rejected() {
        let auth = FixedCredentials::default();
        for (user, pass) in [
            ("Admin", "admin123"),
            ("admin", "admin124"),
            ("admin ", "admin123"),
            ("admin", "admin12"),
            ("admi", "admin123"),
            ("", ""),
        ] {
            assert!(!auth.verify(Role::Owner, user, pass), "{user:?}/{pass:?} accepted");
        }
    }

    #[test]
    fn test_custom_credentials() {
        let auth = FixedCredentials::new(Credential::new("boss", "s3cret"), Credential::new("guest", "guest"));
        assert!(auth.verify(Role::Owner, "boss", "s3cret"));
        assert!(!auth.verify(Role::Owner, "admin", "admin123"));
    }
}
