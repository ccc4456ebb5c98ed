use axum::{
    Router,
    routing::{get, put},
};

use crate::{budgets, reports, transactions};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Engine,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/transactions/{id}",
            put(transactions::update).delete(transactions::remove),
        )
        .route("/budgets", get(budgets::list).post(budgets::create))
        .route(
            "/budgets/{id}",
            put(budgets::update).delete(budgets::remove),
        )
        .route("/reports/summary", get(reports::summary))
        .route("/reports/monthly", get(reports::monthly))
        .route("/reports/categories", get(reports::categories))
        .route("/reports/budgets", get(reports::budgets))
        .with_state(state)
}

/// Build the application router around an engine.
pub fn app(engine: Engine) -> Router {
    router(ServerState { engine })
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
