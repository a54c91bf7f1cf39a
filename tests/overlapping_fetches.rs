use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::{LocalBoxFuture, join};

use stock_watch_wasm::application::coordinator::WatchlistCoordinator;
use stock_watch_wasm::application::use_cases::LoadStocksUseCase;
use stock_watch_wasm::domain::errors::FetchError;
use stock_watch_wasm::domain::watchlist::repositories::StockDataProvider;
use stock_watch_wasm::domain::watchlist::{CategoryFilter, StockRecord};
use stock_watch_wasm::infrastructure::mock::fixtures;

type ScriptedResponse = oneshot::Receiver<Result<Vec<StockRecord>, FetchError>>;

/// Provider whose responses resolve only when the test fires them,
/// letting fetches overlap deterministically.
struct ScriptedProvider {
    responses: RefCell<Vec<ScriptedResponse>>,
}

impl StockDataProvider for ScriptedProvider {
    fn fetch_stocks(
        &self,
        _filter: CategoryFilter,
    ) -> LocalBoxFuture<'static, Result<Vec<StockRecord>, FetchError>> {
        let response = self.responses.borrow_mut().remove(0);
        Box::pin(async move {
            response.await.unwrap_or_else(|_| Err(FetchError::new("channel closed")))
        })
    }
}

#[test]
fn only_the_latest_fetch_reaches_the_view_state() {
    let (send_first, first) = oneshot::channel();
    let (send_second, second) = oneshot::channel();
    let provider =
        Rc::new(ScriptedProvider { responses: RefCell::new(vec![first, second]) });
    let coordinator = Rc::new(RefCell::new(WatchlistCoordinator::new()));
    let use_case = LoadStocksUseCase::new(provider, Rc::clone(&coordinator));

    // Two rapid filter selections; both fetches are now in flight.
    let pending_all = use_case.execute(CategoryFilter::All);
    let pending_hk = use_case.execute(CategoryFilter::HongKong);
    assert!(coordinator.borrow().state().fetch_outcome.is_loading());

    // The superseded fetch resolves first, the fresh one second.
    send_first.send(Ok(fixtures::stocks_for(CategoryFilter::All))).expect("receiver alive");
    send_second
        .send(Ok(fixtures::stocks_for(CategoryFilter::HongKong)))
        .expect("receiver alive");

    let (applied_all, applied_hk) = block_on(join(pending_all, pending_hk));
    assert!(!applied_all);
    assert!(applied_hk);

    let state = coordinator.borrow().state().clone();
    assert_eq!(state.active_filter, CategoryFilter::HongKong);
    let records = state.fetch_outcome.records().expect("success expected");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].code.value(), "00700");
}
