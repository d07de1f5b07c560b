//! Product handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{NameSearchParams, ProductDto, ProductRequest};
use crate::application::ProductService;
use crate::domain::Product;
use crate::interfaces::http::common::{
    not_found, storage_failure, ApiError, ApiResponse, ValidatedJson,
};

/// Product handler state
#[derive(Clone)]
pub struct ProductState {
    pub service: Arc<ProductService>,
}

fn to_list(products: Vec<Product>) -> Json<ApiResponse<Vec<ProductDto>>> {
    Json(ApiResponse::success(
        products.into_iter().map(ProductDto::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products ordered by id", body = ApiResponse<Vec<ProductDto>>)
    )
)]
pub async fn list_products(
    State(state): State<ProductState>,
) -> Result<Json<ApiResponse<Vec<ProductDto>>>, ApiError> {
    let products = state.service.list().await.map_err(storage_failure)?;
    Ok(to_list(products))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_product(
    State(state): State<ProductState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ProductDto>>, ApiError> {
    match state.service.get(id).await.map_err(storage_failure)? {
        Some(p) => Ok(Json(ApiResponse::success(ProductDto::from(p)))),
        None => Err(not_found("Product")),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ProductDto>),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<ProductState>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductDto>>), ApiError> {
    let created = state
        .service
        .create(request.into())
        .await
        .map_err(storage_failure)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ProductDto::from(created))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ProductDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_product(
    State(state): State<ProductState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> Result<Json<ApiResponse<ProductDto>>, ApiError> {
    match state
        .service
        .update(id, request.into())
        .await
        .map_err(storage_failure)?
    {
        Some(p) => Ok(Json(ApiResponse::success(ProductDto::from(p)))),
        None => Err(not_found("Product")),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_product(
    State(state): State<ProductState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.service.delete(id).await.map_err(storage_failure)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Product"))
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/products/search",
    tag = "Products",
    params(NameSearchParams),
    responses(
        (status = 200, description = "Products whose name contains the text, ignoring case", body = ApiResponse<Vec<ProductDto>>)
    )
)]
pub async fn search_products(
    State(state): State<ProductState>,
    Query(params): Query<NameSearchParams>,
) -> Result<Json<ApiResponse<Vec<ProductDto>>>, ApiError> {
    let products = state
        .service
        .search_by_name(&params.name)
        .await
        .map_err(storage_failure)?;
    Ok(to_list(products))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/category/{category}",
    tag = "Products",
    params(("category" = String, Path, description = "Exact category")),
    responses(
        (status = 200, description = "Products in the category", body = ApiResponse<Vec<ProductDto>>)
    )
)]
pub async fn products_by_category(
    State(state): State<ProductState>,
    Path(category): Path<String>,
) -> Result<Json<ApiResponse<Vec<ProductDto>>>, ApiError> {
    let products = state
        .service
        .find_by_category(&category)
        .await
        .map_err(storage_failure)?;
    Ok(to_list(products))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/stock/{min}",
    tag = "Products",
    params(("min" = i32, Path, description = "Minimum stock, inclusive")),
    responses(
        (status = 200, description = "Products with at least `min` units", body = ApiResponse<Vec<ProductDto>>)
    )
)]
pub async fn products_with_min_stock(
    State(state): State<ProductState>,
    Path(min): Path<i32>,
) -> Result<Json<ApiResponse<Vec<ProductDto>>>, ApiError> {
    let products = state
        .service
        .find_with_min_stock(min)
        .await
        .map_err(storage_failure)?;
    Ok(to_list(products))
}
