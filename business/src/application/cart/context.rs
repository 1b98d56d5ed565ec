use std::sync::Arc;

use tokio::sync::watch;

use crate::application::cart::store::CartStore;
use crate::domain::cart::model::Cart;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};
use crate::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::shared::value_objects::ProductId;

/// Consumer-facing handle on the cart: current state, change feed and the
/// three mutations. Cheap to clone and share between views.
#[derive(Clone)]
pub struct CartContext {
    store: Arc<CartStore>,
    add_product: Arc<dyn AddProductUseCase>,
    remove_product: Arc<dyn RemoveProductUseCase>,
    update_product_amount: Arc<dyn UpdateProductAmountUseCase>,
}

impl CartContext {
    pub fn new(
        store: Arc<CartStore>,
        add_product: Arc<dyn AddProductUseCase>,
        remove_product: Arc<dyn RemoveProductUseCase>,
        update_product_amount: Arc<dyn UpdateProductAmountUseCase>,
    ) -> Self {
        Self {
            store,
            add_product,
            remove_product,
            update_product_amount,
        }
    }

    pub fn cart(&self) -> Cart {
        self.store.cart()
    }

    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.store.subscribe()
    }

    pub async fn add_product(&self, product_id: ProductId) -> CartOutcome {
        self.add_product
            .execute(AddProductParams { product_id })
            .await
    }

    pub async fn remove_product(&self, product_id: ProductId) -> CartOutcome {
        self.remove_product
            .execute(RemoveProductParams { product_id })
            .await
    }

    pub async fn update_product_amount(&self, params: UpdateProductAmountParams) -> CartOutcome {
        self.update_product_amount.execute(params).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::application::cart::add_product::AddProductUseCaseImpl;
    use crate::application::cart::remove_product::RemoveProductUseCaseImpl;
    use crate::application::cart::update_product_amount::UpdateProductAmountUseCaseImpl;
    use crate::domain::cart::model::CartItem;
    use crate::domain::cart::notice::CartNotice;
    use crate::domain::cart::repository::CartRepository;
    use crate::domain::catalog::errors::CatalogError;
    use crate::domain::catalog::model::{CatalogProduct, Stock};
    use crate::domain::catalog::services::CatalogService;
    use crate::domain::errors::RepositoryError;
    use crate::domain::logger::Logger;
    use crate::domain::notifier::Notifier;
    use async_trait::async_trait;
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    /// Keeps the last saved snapshot, like the single storage key would.
    #[derive(Default)]
    struct SnapshotRepo {
        snapshot: Mutex<Option<Cart>>,
    }

    impl SnapshotRepo {
        fn snapshot(&self) -> Option<Cart> {
            self.snapshot.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CartRepository for SnapshotRepo {
        async fn load(&self) -> Result<Option<Cart>, RepositoryError> {
            Ok(self.snapshot())
        }

        async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
            *self.snapshot.lock().unwrap() = Some(cart.clone());
            Ok(())
        }
    }

    struct StubCatalog {
        stock: HashMap<u64, i64>,
    }

    #[async_trait]
    impl CatalogService for StubCatalog {
        async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock, CatalogError> {
            self.stock
                .get(&product_id.value())
                .map(|amount| Stock {
                    id: product_id,
                    amount: *amount,
                })
                .ok_or(CatalogError::NotFound)
        }

        async fn fetch_product(&self, product_id: ProductId) -> Result<CatalogProduct, CatalogError> {
            if !self.stock.contains_key(&product_id.value()) {
                return Err(CatalogError::NotFound);
            }
            Ok(CatalogProduct {
                id: product_id,
                title: "X".to_string(),
                price: 10.0,
                image: "y".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    struct Harness {
        context: CartContext,
        repo: Arc<SnapshotRepo>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness(initial: Cart, stock: &[(u64, i64)]) -> Harness {
        let repo = Arc::new(SnapshotRepo::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let catalog: Arc<dyn CatalogService> = Arc::new(StubCatalog {
            stock: stock.iter().copied().collect(),
        });
        let logger = mock_logger();

        let store = Arc::new(CartStore::new(initial, repo.clone(), logger.clone()));
        let update = Arc::new(UpdateProductAmountUseCaseImpl {
            store: store.clone(),
            catalog: catalog.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let add = Arc::new(AddProductUseCaseImpl {
            store: store.clone(),
            catalog,
            update_amount: update.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let remove = Arc::new(RemoveProductUseCaseImpl {
            store: store.clone(),
            notifier: notifier.clone(),
            logger,
        });

        Harness {
            context: CartContext::new(store, add, remove, update),
            repo,
            notifier,
        }
    }

    fn line(id: u64, amount: i64) -> CartItem {
        CartItem::from_repository(
            ProductId::new(id),
            "X".to_string(),
            10.0,
            "y".to_string(),
            amount,
        )
    }

    #[tokio::test]
    async fn should_add_first_product_to_empty_cart() {
        let h = harness(Cart::empty(), &[(1, 5)]);

        let outcome = h.context.add_product(ProductId::new(1)).await;

        assert_eq!(outcome, CartOutcome::Ok);
        assert_eq!(h.context.cart(), Cart::from_repository(vec![line(1, 1)]));
        assert_eq!(h.repo.snapshot(), Some(h.context.cart()));
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn should_increment_when_adding_product_again() {
        let h = harness(Cart::from_repository(vec![line(1, 1)]), &[(1, 5)]);

        let outcome = h.context.add_product(ProductId::new(1)).await;

        assert_eq!(outcome, CartOutcome::Ok);
        let cart = h.context.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].amount, 2);
        assert_eq!(h.repo.snapshot(), Some(cart));
    }

    #[tokio::test]
    async fn should_refuse_increment_past_stock() {
        let h = harness(Cart::from_repository(vec![line(1, 1)]), &[(1, 1)]);

        let outcome = h.context.add_product(ProductId::new(1)).await;

        assert_eq!(outcome, CartOutcome::OutOfStock);
        assert_eq!(h.context.cart().items()[0].amount, 1);
        assert_eq!(h.notifier.messages(), vec![CartNotice::OutOfStock.message()]);
        assert_eq!(h.repo.snapshot(), None);
    }

    #[tokio::test]
    async fn should_leave_cart_when_amount_exceeds_stock() {
        let h = harness(Cart::from_repository(vec![line(1, 3)]), &[(1, 5)]);

        let outcome = h
            .context
            .update_product_amount(UpdateProductAmountParams {
                product_id: ProductId::new(1),
                amount: 10,
            })
            .await;

        assert_eq!(outcome, CartOutcome::OutOfStock);
        assert_eq!(h.context.cart(), Cart::from_repository(vec![line(1, 3)]));
        assert_eq!(h.notifier.messages(), vec![CartNotice::OutOfStock.message()]);
    }

    #[tokio::test]
    async fn should_notify_once_when_removing_unknown_product() {
        let h = harness(Cart::from_repository(vec![line(1, 3)]), &[]);

        let outcome = h.context.remove_product(ProductId::new(2)).await;

        assert_eq!(outcome, CartOutcome::NotFound);
        assert_eq!(h.context.cart().len(), 1);
        assert_eq!(h.notifier.messages(), vec![CartNotice::RemoveFailed.message()]);
    }

    #[tokio::test]
    async fn should_publish_committed_cart_to_subscribers() {
        let h = harness(Cart::empty(), &[(1, 5)]);
        let mut receiver = h.context.subscribe();

        h.context.add_product(ProductId::new(1)).await;

        assert!(receiver.has_changed().unwrap());
        assert_eq!(receiver.borrow_and_update().len(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64),
        Remove(u64),
        Update(u64, i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u64..5).prop_map(Op::Add),
            (1u64..5).prop_map(Op::Remove),
            (1u64..5, -2i64..8).prop_map(|(id, amount)| Op::Update(id, amount)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: the persisted snapshot always mirrors the in-memory cart,
        /// and operations that do not succeed leave the cart untouched.
        #[test]
        fn persisted_snapshot_tracks_cart(
            stock in prop::collection::vec(0i64..6, 4),
            ops in prop::collection::vec(op_strategy(), 1..30)
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async {
                let levels: Vec<(u64, i64)> = stock
                    .iter()
                    .enumerate()
                    .map(|(i, amount)| (i as u64 + 1, *amount))
                    .collect();
                let h = harness(Cart::empty(), &levels);

                for op in ops {
                    let before = h.context.cart();
                    let notices_before = h.notifier.messages().len();

                    let outcome = match op {
                        Op::Add(id) => h.context.add_product(ProductId::new(id)).await,
                        Op::Remove(id) => h.context.remove_product(ProductId::new(id)).await,
                        Op::Update(id, amount) => {
                            h.context
                                .update_product_amount(UpdateProductAmountParams {
                                    product_id: ProductId::new(id),
                                    amount,
                                })
                                .await
                        }
                    };

                    let after = h.context.cart();
                    let notices_after = h.notifier.messages().len();

                    if outcome.is_ok() {
                        assert_eq!(h.repo.snapshot(), Some(after.clone()));
                        assert_eq!(notices_after, notices_before);
                    } else {
                        assert_eq!(after, before);
                    }

                    match outcome {
                        CartOutcome::InvalidNoOp => assert_eq!(notices_after, notices_before),
                        CartOutcome::Ok => {}
                        _ => assert_eq!(notices_after, notices_before + 1),
                    }

                    if let Op::Add(id) = op {
                        if levels[id as usize - 1].1 == 0 && !before.contains(ProductId::new(id)) {
                            assert_eq!(after.len(), before.len());
                        }
                    }

                    let mut ids: Vec<u64> = after.items().iter().map(|i| i.id.value()).collect();
                    ids.sort_unstable();
                    ids.dedup();
                    assert_eq!(ids.len(), after.len());
                    assert!(after.items().iter().all(|item| item.amount >= 1));
                }
            });
        }
    }
}
