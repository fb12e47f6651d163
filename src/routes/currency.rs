use actix_web::{web, HttpResponse, Responder};
use crate::core::currency::{parse_amount, TARGET_CURRENCY};
use crate::models::{ConversionResponse, ConvertRequest, RatesResponse};
use crate::routes::AppState;

/// Configure currency routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/currency/rates", web::get().to(rates))
        .route("/currency/convert", web::get().to(convert));
}

async fn rates(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(RatesResponse {
        base: TARGET_CURRENCY.to_string(),
        rates: state.currency.rates().clone(),
    })
}

/// Convert into LKR
///
/// GET /api/v1/currency/convert?from=USD&amount=25
async fn convert(
    state: web::Data<AppState>,
    query: web::Query<ConvertRequest>,
) -> impl Responder {
    let amount = parse_amount(query.amount.as_deref().unwrap_or(""));
    let conversion = state
        .currency
        .convert(query.from.as_deref().unwrap_or(""), amount);

    HttpResponse::Ok().json(ConversionResponse {
        result_label: conversion.result_label(),
        rate_label: conversion.rate_label(),
        from: conversion.code,
        to: TARGET_CURRENCY.to_string(),
        amount: conversion.amount,
        rate: conversion.rate,
        result: conversion.result,
        updated_at: chrono::Utc::now(),
    })
}
