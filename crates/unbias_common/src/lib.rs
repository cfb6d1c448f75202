//! UnBias Common - wire types, API client and configuration shared by unbiasctl
//!
//! All analysis and rewriting happens on remote services; this crate only
//! speaks their JSON and maps responses into display-ready shapes.

pub mod analysis;
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod workflow;

pub use analysis::{AnalysisReport, TagGroup};
pub use client::{BiasApi, FakeBiasApi, HttpBiasApi};
pub use config::{ApiConfig, UiConfig, UnbiasConfig};
pub use error::ApiError;
pub use types::InputMode;
pub use workflow::{run_analysis, run_rewrite};
