//! Verification code storage module.

mod code_store;

pub use code_store::{
    StoreOutcome, VerificationChannel, VerificationCodeStore, VerifyOutcome,
};
