//! 工具模块 - 日志和输入校验
//!
//! - [`logger`] - tracing subscriber setup and log retention
//! - [`validation`] - text length limits

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
