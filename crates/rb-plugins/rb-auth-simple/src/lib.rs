//! # rb-auth-simple
//!
//! Argon2-based implementation of `CredentialGuard`.
//! Hashes and checks the delete passwords attached to threads and replies.

use anyhow::anyhow;
use async_trait::async_trait;
use rb_core::traits::CredentialGuard;
use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

pub struct Argon2Guard {
    /// Cost parameters for new hashes. Verification reads the costs
    /// embedded in the stored hash.
    params: Params,
}

impl Argon2Guard {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Builds a guard from raw costs (memory in KiB, iterations, lanes).
    pub fn from_costs(memory_kib: u32, iterations: u32, parallelism: u32) -> anyhow::Result<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| anyhow!("invalid argon2 parameters: {e}"))?;
        Ok(Self::new(params))
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Guard {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

#[async_trait]
impl CredentialGuard for Argon2Guard {
    /// Produces a salted PHC string, e.g. `$argon2id$v=19$m=...`.
    async fn hash(&self, password: &str) -> anyhow::Result<String> {
        let argon2 = self.hasher();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| anyhow!("password hashing failed: {e}"))
        })
        .await?
    }

    /// Verifies if a provided password matches a stored Argon2 hash.
    async fn verify(&self, password: &str, hash: &str) -> anyhow::Result<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash)
                .map_err(|e| anyhow!("stored password hash is unreadable: {e}"))?;
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => {
                    log::error!("argon2 verification failed: {e}");
                    Err(anyhow!("password verification failed: {e}"))
                }
            }
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum legal costs keep the suite fast.
    fn guard() -> Argon2Guard {
        Argon2Guard::from_costs(Params::MIN_M_COST, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn hash_then_verify() {
        let guard = guard();
        let hash = guard.hash("a").await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(guard.verify("a", &hash).await.unwrap());
        assert!(!guard.verify("incorrect password", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn empty_password_is_hashable() {
        let guard = guard();
        let hash = guard.hash("").await.unwrap();

        assert!(guard.verify("", &hash).await.unwrap());
        assert!(!guard.verify(" ", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn same_password_gets_a_fresh_salt() {
        let guard = guard();
        let first = guard.hash("a").await.unwrap();
        let second = guard.hash("a").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let guard = guard();
        assert!(guard.verify("a", "not a phc string").await.is_err());
    }

    #[tokio::test]
    async fn verification_ignores_current_costs() {
        let old = guard().hash("a").await.unwrap();
        let stronger = Argon2Guard::from_costs(Params::MIN_M_COST * 2, 2, 1).unwrap();

        assert!(stronger.verify("a", &old).await.unwrap());
    }

    #[test]
    fn rejects_impossible_costs() {
        assert!(Argon2Guard::from_costs(0, 0, 0).is_err());
    }
}
