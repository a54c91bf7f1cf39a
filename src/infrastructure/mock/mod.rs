pub mod fixtures;

use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::domain::errors::FetchError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::watchlist::repositories::StockDataProvider;
use crate::domain::watchlist::services::RecordValidationService;
use crate::domain::watchlist::{CategoryFilter, StockRecord};

/// Tuning for the simulated transport.
#[derive(Debug, Clone, Copy)]
pub struct MockConfig {
    pub simulated_delay: Duration,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self { simulated_delay: Duration::from_millis(500) }
    }
}

/// Fixture-backed data source standing in for a market-data transport.
/// Responses are deterministic per filter; the only asynchronous behavior
/// is the configured delay.
pub struct MockStockService {
    config: MockConfig,
    validation_service: RecordValidationService,
}

impl MockStockService {
    pub fn new() -> Self {
        Self::with_config(MockConfig::default())
    }

    pub fn with_config(config: MockConfig) -> Self {
        Self { config, validation_service: RecordValidationService::new() }
    }
}

impl Default for MockStockService {
    fn default() -> Self {
        Self::new()
    }
}

impl StockDataProvider for MockStockService {
    fn fetch_stocks(
        &self,
        filter: CategoryFilter,
    ) -> LocalBoxFuture<'static, Result<Vec<StockRecord>, FetchError>> {
        let delay = self.config.simulated_delay;
        let validation_service = self.validation_service.clone();

        Box::pin(async move {
            get_logger().debug(
                LogComponent::Infrastructure("MockService"),
                &format!("Fetching stocks for {filter} (simulated delay {delay:?})"),
            );

            gloo_timers::future::sleep(delay).await;

            let records = fixtures::stocks_for(filter);
            // Incoherent records are reported and passed through unchanged;
            // the fixture constants are caller-supplied data, not validated input.
            for (index, violation) in validation_service.validate_records(&records) {
                get_logger().warn(
                    LogComponent::Infrastructure("MockService"),
                    &format!("Fixture record {index} fails validation: {violation}"),
                );
            }
            Ok(records)
        })
    }
}
