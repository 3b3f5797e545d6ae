use actix_web::{web, HttpResponse};
use regex::Regex;

use crate::error::ApiError;
use crate::models::poi::{Poi, PoiKind};
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
}

/*
    /api/pois/{kind}
*/
pub async fn get_pois(
    path: web::Path<String>,
    params: web::Query<QueryParams>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let segment = path.into_inner();
    let kind = PoiKind::from_segment(&segment)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown POI kind '{}'", segment)))?;

    let name_filter = match &params.search {
        Some(search_text) if !search_text.is_empty() => Some(
            Regex::new(&format!("(?i)^{}", regex::escape(search_text)))
                .map_err(|e| ApiError::BadRequest(format!("Invalid search: {}", e)))?,
        ),
        _ => None,
    };
    let limit = params.limit.map(usize::from).unwrap_or(usize::MAX);

    let pois: Vec<&Poi> = state
        .destination
        .pool(kind)
        .iter()
        .filter(|poi| name_filter.as_ref().map_or(true, |re| re.is_match(&poi.name)))
        .take(limit)
        .collect();

    Ok(HttpResponse::Ok().json(pois))
}
