//! Product REST API handlers
//!
//! One endpoint per catalog operation. Each handler only translates between
//! HTTP and the catalog; every rule is enforced by `ProductCatalog`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateProductRequest, ProductResponse, UpdatePriceRequest, UpdateQuantityRequest};
use crate::application::SharedCatalog;
use crate::domain::ProductId;
use crate::interfaces::http::common::{api_error, ApiError, ApiResponse, ValidatedJson};

/// Product handler state
#[derive(Clone)]
pub struct ProductState {
    pub catalog: SharedCatalog,
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    responses(
        (status = 200, description = "Product list", body = ApiResponse<Vec<ProductResponse>>)
    )
)]
pub async fn list_products(
    State(state): State<ProductState>,
) -> Result<Json<ApiResponse<Vec<ProductResponse>>>, ApiError> {
    let products = state.catalog.get_all_products().await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(
        products.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_product(
    State(state): State<ProductState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ApiResponse<ProductResponse>>, ApiError> {
    let product = state.catalog.get_product_by_id(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid JSON or product data"),
        (status = 409, description = "A product with this name already exists"),
        (status = 422, description = "Request constraint violated")
    )
)]
pub async fn create_product(
    State(state): State<ProductState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponse>>), ApiError> {
    let saved = state
        .catalog
        .add_product(req.into())
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(saved.into()))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}/quantity",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid JSON or negative quantity"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_quantity(
    State(state): State<ProductState>,
    Path(id): Path<ProductId>,
    ValidatedJson(req): ValidatedJson<UpdateQuantityRequest>,
) -> Result<Json<ApiResponse<ProductResponse>>, ApiError> {
    let updated = state
        .catalog
        .update_product_quantity(id, req.quantity)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(updated.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}/price",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdatePriceRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid JSON or price is not positive"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_price(
    State(state): State<ProductState>,
    Path(id): Path<ProductId>,
    ValidatedJson(req): ValidatedJson<UpdatePriceRequest>,
) -> Result<Json<ApiResponse<ProductResponse>>, ApiError> {
    let updated = state
        .catalog
        .update_product_price(id, req.price)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(updated.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<bool>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_product(
    State(state): State<ProductState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    let deleted = state.catalog.delete_product(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(deleted)))
}
