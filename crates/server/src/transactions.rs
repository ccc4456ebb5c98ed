//! Transactions API endpoints

use api_types::{
    Deleted,
    transaction::{TransactionListQuery, TransactionListResponse, TransactionNew, TransactionView},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use engine::{TransactionDraft, TransactionFilter};
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{category_from_api, category_to_api, kind_from_api, kind_to_api, month_from_api},
    server::ServerState,
};

/// Default page size for listings.
const DEFAULT_LIMIT: u64 = 50;

fn view(tx: engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        kind: kind_to_api(tx.kind),
        category: category_to_api(tx.category),
        description: tx.description,
        amount_minor: tx.amount.cents(),
        occurred_at: tx.occurred_at.fixed_offset(),
    }
}

fn draft(payload: TransactionNew) -> TransactionDraft {
    TransactionDraft {
        kind: kind_from_api(payload.kind),
        category: payload
            .category
            .map(category_from_api)
            .unwrap_or_default(),
        description: payload.description,
        amount: engine::MoneyCents::new(payload.amount_minor),
        occurred_at: payload.occurred_at.map(|at| at.with_timezone(&Utc)),
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Json<TransactionListResponse>, ServerError> {
    let period = match (query.month, query.year) {
        (Some(month), Some(year)) => Some(engine::MonthKey::new(year, month_from_api(month))),
        (None, None) => None,
        _ => {
            return Err(ServerError::Generic(
                "month and year must be provided together".to_string(),
            ));
        }
    };

    let transactions = state
        .engine
        .list_transactions(TransactionFilter {
            period,
            limit: Some(query.limit.unwrap_or(DEFAULT_LIMIT)),
        })
        .await?;

    Ok(Json(TransactionListResponse {
        transactions: transactions.into_iter().map(view).collect(),
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let tx = state.engine.create_transaction(draft(payload)).await?;
    Ok((StatusCode::CREATED, Json(view(tx))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransactionNew>,
) -> Result<Json<TransactionView>, ServerError> {
    let tx = state.engine.update_transaction(id, draft(payload)).await?;
    Ok(Json(view(tx)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Deleted>, ServerError> {
    state.engine.delete_transaction(id).await?;
    Ok(Json(Deleted {
        message: "Transaction deleted successfully".to_string(),
    }))
}
