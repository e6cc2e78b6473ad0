//! Page props handlers

use axum::extract::{Path, State};
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::Page;

use crate::content::{DestinationDetailProps, PackageDetailProps, PageProps};
use crate::core::ServerState;

pub(crate) fn parse_page(page: &str) -> AppResult<Page> {
    page.parse().map_err(|_| {
        AppError::with_message(ErrorCode::PageNotFound, format!("Page '{page}' not found"))
            .with_detail("page", page)
    })
}

/// GET /api/pages/{page} - 页面 props
pub async fn page_props(
    State(state): State<ServerState>,
    Path(page): Path<String>,
) -> AppResult<ApiResponse<PageProps>> {
    let page = parse_page(&page)?;
    Ok(ApiResponse::success(state.loader().load(page).await))
}

/// GET /api/packages/{id} - 套餐详情
pub async fn package_detail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<PackageDetailProps>> {
    Ok(ApiResponse::success(state.loader().package_detail(&id).await?))
}

/// GET /api/destinations/{id} - 目的地详情
pub async fn destination_detail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<DestinationDetailProps>> {
    Ok(ApiResponse::success(
        state.loader().destination_detail(&id).await?,
    ))
}
