use futures::future::LocalBoxFuture;

use super::entities::StockRecord;
use super::value_objects::CategoryFilter;
use crate::domain::errors::FetchError;

/// Boundary for asynchronous stock data sources.
///
/// The contract is intentionally small: a fetch is asynchronous and may be
/// delayed, it may fail, and results for a filter are deterministic given
/// fixed backing data. Whether the implementation is a static fixture or a
/// live client is invisible to the core.
pub trait StockDataProvider {
    fn fetch_stocks(
        &self,
        filter: CategoryFilter,
    ) -> LocalBoxFuture<'static, Result<Vec<StockRecord>, FetchError>>;
}
