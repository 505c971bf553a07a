//! Shared response envelope types for API handlers.
//!
//! Every successful response uses the fixed
//! `{ "success": true, "message": ..., "data": ... }` envelope, with an
//! additional `pagination` object on list endpoints. Use these types instead
//! of ad-hoc `serde_json::json!` so the shape stays consistent and
//! compile-time checked.

use serde::Serialize;
use userhub_core::pagination::total_pages;

/// Standard `{ success, message, data }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Build a success envelope around `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Serialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: i64,
    /// Items per page after clamping.
    pub limit: i64,
    /// Total matching rows across all pages.
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    /// Derive the full pagination block from page/limit/total.
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Pagination {
            page,
            limit,
            total,
            total_pages: total_pages(total, limit),
        }
    }
}

/// List envelope: `{ success, message, data: [...], pagination }`.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Serialize> PagedResponse<T> {
    /// Build a success envelope around one page of `data`.
    pub fn ok(message: impl Into<String>, data: Vec<T>, pagination: Pagination) -> Self {
        PagedResponse {
            success: true,
            message: message.into(),
            data,
            pagination,
        }
    }
}
