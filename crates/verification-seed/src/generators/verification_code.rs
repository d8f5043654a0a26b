//! Verification code generation.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_SALT, SeedConfig};
use crate::crypto;

/// Code value of the admin verification code.
pub const ADMIN_CODE: &str = "012345678";
/// Security code of the admin verification code.
pub const ADMIN_SECURITY_CODE: &str = "1234";
/// `codeHash` of the admin code under the default salt.
pub const ADMIN_CODE_HASH: &str =
    "c9376e98836f316bf4133941da0210624996d6ba04fe243e2618edd84155d7ba";
/// `securityHash` of the admin code under the default salt.
pub const ADMIN_SECURITY_HASH: &str =
    "abbf3db594dfcf01807a6132931d8f0233ac35d21a02a828e29b8ede1ec4fbaa";
/// Batch label of the admin verification code.
pub const ADMIN_BATCH: &str = "ADMIN";
/// Product the admin verification code is attached to.
pub const ADMIN_PRODUCT_ID: &str = "sweetb-001";

/// Raw verification code as an operator would enter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCodeInput {
    pub code: String,
    pub security_code: String,
    pub batch: Option<String>,
    pub product_id: Option<String>,
}

impl VerificationCodeInput {
    pub fn new(code: impl Into<String>, security_code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            security_code: security_code.into(),
            batch: None,
            product_id: None,
        }
    }

    /// The admin code input.
    pub fn admin() -> Self {
        Self::new(ADMIN_CODE, ADMIN_SECURITY_CODE)
            .with_batch(ADMIN_BATCH)
            .with_product_id(ADMIN_PRODUCT_ID)
    }

    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = Some(batch.into());
        self
    }

    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }
}

/// Generated verification code data ready for database insertion.
///
/// The row id is not part of this struct; the seeder mints it only when the
/// row is actually inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedVerificationCode {
    pub code_hash: String,
    pub security_hash: String,
    pub code_last4: String,
    pub security_last4: String,
    pub code_value: String,
    pub security_code_value: String,
    pub batch: Option<String>,
    pub product_id: Option<String>,
}

impl GeneratedVerificationCode {
    /// The compiled-in admin code, with its literal hashes.
    pub fn admin() -> Self {
        Self {
            code_hash: ADMIN_CODE_HASH.to_string(),
            security_hash: ADMIN_SECURITY_HASH.to_string(),
            code_last4: "5678".to_string(),
            security_last4: "1234".to_string(),
            code_value: ADMIN_CODE.to_string(),
            security_code_value: ADMIN_SECURITY_CODE.to_string(),
            batch: Some(ADMIN_BATCH.to_string()),
            product_id: Some(ADMIN_PRODUCT_ID.to_string()),
        }
    }
}

/// Hashes and normalizes raw codes into insertable rows.
pub struct VerificationCodeGenerator {
    salt: String,
}

impl VerificationCodeGenerator {
    /// Creates a generator using the default salt.
    pub fn new() -> Self {
        Self::with_salt(DEFAULT_SALT)
    }

    pub fn with_salt(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    pub fn from_config(config: &SeedConfig) -> Self {
        Self::with_salt(config.salt.clone())
    }

    /// Generates a single row from raw input.
    pub fn generate(&self, input: &VerificationCodeInput) -> GeneratedVerificationCode {
        let code = crypto::normalize(&input.code);
        let security = crypto::normalize(&input.security_code);

        GeneratedVerificationCode {
            code_hash: crypto::hash_code(&code, &self.salt),
            security_hash: crypto::hash_security_code(&security, &self.salt),
            code_last4: crypto::last4(&code),
            security_last4: crypto::last4(&security),
            code_value: code,
            security_code_value: security,
            batch: trimmed_or_none(input.batch.as_deref()),
            product_id: trimmed_or_none(input.product_id.as_deref()),
        }
    }

    /// Generates rows for a batch of inputs.
    pub fn generate_batch(
        &self,
        inputs: &[VerificationCodeInput],
    ) -> Vec<GeneratedVerificationCode> {
        inputs.iter().map(|input| self.generate(input)).collect()
    }
}

impl Default for VerificationCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn trimmed_or_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_reproduces_admin_literals() {
        let generated = VerificationCodeGenerator::new().generate(&VerificationCodeInput::admin());
        assert_eq!(generated, GeneratedVerificationCode::admin());
    }

    #[test]
    fn test_generate_normalizes_input() {
        let input = VerificationCodeInput::new(" ab12cd34 ", "x9y8\t")
            .with_batch("  B-7 ")
            .with_product_id("   ");
        let generated = VerificationCodeGenerator::with_salt("salt").generate(&input);

        assert_eq!(generated.code_value, "AB12CD34");
        assert_eq!(generated.security_code_value, "X9Y8");
        assert_eq!(generated.code_last4, "CD34");
        assert_eq!(generated.security_last4, "X9Y8");
        assert_eq!(generated.code_hash, crypto::hash_code("AB12CD34", "salt"));
        assert_eq!(generated.batch.as_deref(), Some("B-7"));
        assert_eq!(generated.product_id, None);
    }

    #[test]
    fn test_configured_salt_is_used() {
        let config = SeedConfig::default().with_salt("pepper");
        let generated =
            VerificationCodeGenerator::from_config(&config).generate(&VerificationCodeInput::admin());

        assert_ne!(generated.code_hash, ADMIN_CODE_HASH);
        assert_eq!(generated.code_hash, crypto::hash_code(ADMIN_CODE, "pepper"));
        assert_eq!(generated.code_last4, "5678");
    }

    #[test]
    fn test_generate_batch() {
        let inputs: Vec<_> = (0..10)
            .map(|i| VerificationCodeInput::new(format!("CODE{i:04}"), "0000"))
            .collect();
        let codes = VerificationCodeGenerator::new().generate_batch(&inputs);

        assert_eq!(codes.len(), 10);

        // All code hashes should be unique
        let hashes: std::collections::HashSet<_> = codes.iter().map(|c| &c.code_hash).collect();
        assert_eq!(hashes.len(), 10);
    }
}
