// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleProductDto, ArticleSummaryDto, ConventionReportDto, MinMaxPricePerLitreDto},
    queries::articles::{
        ArticleSummaryQuery, ArticlesByPriceQuery, CatalogConventionsQuery,
        MinMaxPricePerLitreQuery, MostBottlesQuery,
    },
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogParams {
    /// Catalog URL; the configured source is used when omitted.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceParams {
    /// Catalog URL; the configured source is used when omitted.
    #[serde(default)]
    pub url: Option<String>,
    /// Exact article price to match, dot-decimal (e.g. `17.99`).
    #[serde(default)]
    #[param(value_type = Option<f64>)]
    pub price: Option<Decimal>,
}

#[utoipa::path(
    get,
    path = "/productdata/article/min-and-max-price-per-litre",
    params(CatalogParams),
    responses(
        (status = 200, description = "Cheapest and most expensive articles per litre, ties included.", body = MinMaxPricePerLitreDto),
        (status = 400, description = "Query string could not be parsed."),
        (status = 422, description = "The catalog holds no articles.", body = ErrorResponse),
        (status = 502, description = "The catalog URL is unusable, or the catalog could not be fetched or parsed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn min_and_max_price_per_litre(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CatalogParams>,
) -> HttpResult<Json<MinMaxPricePerLitreDto>> {
    state
        .services
        .article_queries
        .min_and_max_price_per_litre(MinMaxPricePerLitreQuery { url: params.url })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/productdata/article/price",
    params(PriceParams),
    responses(
        (status = 200, description = "Articles with exactly the given price, cheapest per litre first.", body = [ArticleProductDto]),
        (status = 400, description = "Query string could not be parsed."),
        (status = 502, description = "The catalog URL is unusable, or the catalog could not be fetched or parsed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn articles_by_price(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PriceParams>,
) -> HttpResult<Json<Vec<ArticleProductDto>>> {
    state
        .services
        .article_queries
        .articles_by_price(ArticlesByPriceQuery {
            url: params.url,
            price: params.price,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/productdata/article/most-bottles",
    params(CatalogParams),
    responses(
        (status = 200, description = "Articles shipping the most bottles, ties included.", body = [ArticleProductDto]),
        (status = 400, description = "Query string could not be parsed."),
        (status = 422, description = "The catalog holds no articles.", body = ErrorResponse),
        (status = 502, description = "The catalog URL is unusable, or the catalog could not be fetched or parsed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn articles_with_most_bottles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CatalogParams>,
) -> HttpResult<Json<Vec<ArticleProductDto>>> {
    state
        .services
        .article_queries
        .articles_with_most_bottles(MostBottlesQuery { url: params.url })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/productdata/article/summary",
    params(PriceParams),
    responses(
        (status = 200, description = "All three article queries over one catalog fetch.", body = ArticleSummaryDto),
        (status = 400, description = "Query string could not be parsed."),
        (status = 422, description = "The catalog holds no articles.", body = ErrorResponse),
        (status = 502, description = "The catalog URL is unusable, or the catalog could not be fetched or parsed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn summary(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PriceParams>,
) -> HttpResult<Json<ArticleSummaryDto>> {
    state
        .services
        .article_queries
        .summary(ArticleSummaryQuery {
            url: params.url,
            price: params.price,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/productdata/catalog/conventions",
    params(CatalogParams),
    responses(
        (status = 200, description = "Articles whose text fields deviate from the feed conventions.", body = ConventionReportDto),
        (status = 400, description = "Query string could not be parsed."),
        (status = 502, description = "The catalog URL is unusable, or the catalog could not be fetched or parsed.", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn catalog_conventions(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CatalogParams>,
) -> HttpResult<Json<ConventionReportDto>> {
    state
        .services
        .article_queries
        .catalog_conventions(CatalogConventionsQuery { url: params.url })
        .await
        .into_http()
        .map(Json)
}
