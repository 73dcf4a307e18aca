// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod orthography;
pub mod persistence;

pub use crate::config::EngineConfig;
pub use crate::core::engine::{Conjugation, ConjugatorEngine};
pub use crate::error::{ConjugatorError, Result};
pub use crate::orthography::Orthography;
