use crate::scoring::engine::ScoreRubric;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Point budgets and thresholds used by the score endpoint.
    /// Fixed at startup so every handler scores against the same table.
    pub rubric: ScoreRubric,
}
