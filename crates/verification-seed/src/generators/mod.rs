//! Generators that turn raw code input into rows ready for insertion.

mod verification_code;

pub use verification_code::{
    ADMIN_BATCH, ADMIN_CODE, ADMIN_CODE_HASH, ADMIN_PRODUCT_ID, ADMIN_SECURITY_CODE,
    ADMIN_SECURITY_HASH, GeneratedVerificationCode, VerificationCodeGenerator,
    VerificationCodeInput,
};
