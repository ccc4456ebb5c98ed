//! Budgets API endpoints

use api_types::{
    Deleted,
    budget::{BudgetListQuery, BudgetListResponse, BudgetNew, BudgetView},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::BudgetDraft;
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{category_from_api, category_to_api, month_from_api, month_to_api},
    server::ServerState,
};

fn view(budget: engine::Budget) -> BudgetView {
    BudgetView {
        id: budget.id,
        category: category_to_api(budget.category),
        amount_minor: budget.amount.cents(),
        month: month_to_api(budget.month),
        year: budget.year,
    }
}

fn draft(payload: BudgetNew) -> BudgetDraft {
    BudgetDraft {
        category: category_from_api(payload.category),
        amount: engine::MoneyCents::new(payload.amount_minor),
        month: month_from_api(payload.month),
        year: payload.year,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<BudgetListQuery>,
) -> Result<Json<BudgetListResponse>, ServerError> {
    let budgets = state
        .engine
        .list_budgets(
            query.category.map(category_from_api),
            month_from_api(query.month),
            query.year,
        )
        .await?;

    Ok(Json(BudgetListResponse {
        budgets: budgets.into_iter().map(view).collect(),
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BudgetNew>,
) -> Result<(StatusCode, Json<BudgetView>), ServerError> {
    let budget = state.engine.create_budget(draft(payload)).await?;
    Ok((StatusCode::CREATED, Json(view(budget))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BudgetNew>,
) -> Result<Json<BudgetView>, ServerError> {
    let budget = state.engine.update_budget(id, draft(payload)).await?;
    Ok(Json(view(budget)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Deleted>, ServerError> {
    state.engine.delete_budget(id).await?;
    Ok(Json(Deleted {
        message: "Budget deleted successfully".to_string(),
    }))
}
