use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    config::BoardConfig,
    error::AppResult,
    models::{BoardPage, Highlight, Record, ViewMode},
    services::{
        sources::{load_records, RowSource},
        CategoryRules, ViewBuilder,
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
pub struct AppStateInner {
    /// Filtered contributions, loaded once
    pub records: Vec<Record>,
    /// Computed once at load, independent of the active mode
    pub highlights: Vec<Highlight>,
    pub mode: ViewMode,
    pub config: BoardConfig,
    pub rules: CategoryRules,
    pub loaded_at: DateTime<Utc>,
}

impl AppStateInner {
    /// Re-derives the page for `mode` from the loaded records
    pub fn page(&self, mode: ViewMode) -> BoardPage {
        let builder = ViewBuilder::new(&self.config, &self.rules);
        BoardPage {
            highlights: self.highlights.clone(),
            view: builder.build(&self.records, mode),
            loaded_at: self.loaded_at,
        }
    }

    /// Page for the active mode
    pub fn current_page(&self) -> BoardPage {
        self.page(self.mode)
    }
}

impl AppState {
    /// Creates state over already-filtered records
    pub fn new(records: Vec<Record>, config: BoardConfig, rules: CategoryRules) -> Self {
        let highlights = ViewBuilder::new(&config, &rules).highlights(&records);

        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                records,
                highlights,
                mode: ViewMode::default(),
                config,
                rules,
                loaded_at: Utc::now(),
            })),
        }
    }

    /// Loads records from `source`
    pub async fn load(source: &dyn RowSource, config: BoardConfig) -> AppResult<Self> {
        let records = load_records(source).await?;
        Ok(Self::new(records, config, CategoryRules::standard()))
    }

    /// Loads records from `source`, starting with an empty board if ingestion fails
    pub async fn load_or_empty(source: &dyn RowSource, config: BoardConfig) -> Self {
        match load_records(source).await {
            Ok(records) => Self::new(records, config, CategoryRules::standard()),
            Err(e) => {
                tracing::warn!(
                    source = source.name(),
                    error = %e,
                    "Favourites could not be loaded, starting empty"
                );
                Self::new(Vec::new(), config, CategoryRules::standard())
            }
        }
    }

    /// Sets the active view mode and returns the page for it
    pub async fn switch_mode(&self, mode: ViewMode) -> BoardPage {
        let mut inner = self.inner.write().await;
        inner.mode = mode;
        tracing::info!(mode = %mode, "View mode set");
        inner.current_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::BoardView;
    use crate::services::sources::{MemorySource, MockRowSource};

    fn source() -> MemorySource {
        MemorySource::from_fields(&[
            &["Name", "Category", "Item", "Note"],
            &["Ann", "Movie", "Dune", ""],
            &["Bea", "Movie", "dune", "great!"],
            &["", "Movie", "Dune", ""],
        ])
    }

    #[tokio::test]
    async fn test_load_computes_highlights_once() {
        let state = AppState::load(&source(), BoardConfig::default()).await.unwrap();
        let inner = state.inner.read().await;

        assert_eq!(inner.records.len(), 2);
        assert_eq!(inner.highlights.len(), 1);
        // The row without a person is not counted
        assert_eq!(inner.highlights[0].count, 2);
        assert_eq!(inner.mode, ViewMode::Person);
    }

    #[tokio::test]
    async fn test_load_or_empty_on_failure() {
        let mut failing = MockRowSource::new();
        failing
            .expect_load_rows()
            .returning(|| Err(AppError::Internal("source unreachable".to_string())));
        failing.expect_name().return_const("mock");

        let state = AppState::load_or_empty(&failing, BoardConfig::default()).await;
        let inner = state.inner.read().await;
        assert!(inner.records.is_empty());
        assert!(inner.highlights.is_empty());
        match inner.current_page().view {
            BoardView::Person(view) => assert!(view.sections.is_empty()),
            BoardView::Category(_) => panic!("expected person view"),
        }
    }

    #[tokio::test]
    async fn test_switch_mode_is_idempotent() {
        let state = AppState::load(&source(), BoardConfig::default()).await.unwrap();

        let first = state.switch_mode(ViewMode::Category).await;
        let second = state.switch_mode(ViewMode::Category).await;
        assert_eq!(first.view, second.view);
        assert_eq!(first.view.mode(), ViewMode::Category);

        let back = state.switch_mode(ViewMode::Person).await;
        assert_eq!(back.view.mode(), ViewMode::Person);
        assert_eq!(state.inner.read().await.mode, ViewMode::Person);
    }
}
