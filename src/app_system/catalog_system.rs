use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::domain::{Customer, Order, Product};

/// The assembled catalog: one store task per collection plus the client
/// handles used for seeding and snapshotting.
///
/// Responsible for starting up the stores, wiring them together, and handling
/// shutdown.
pub struct CatalogSystem {
    pub product_client: ProductClient,
    pub customer_client: CustomerClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

fn counter_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

impl CatalogSystem {
    pub fn new() -> Self {
        // 1. Product store
        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(32, counter_ids("product"));
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Customer store
        let (customer_actor, customer_resource_client) =
            ResourceActor::<Customer>::new(32, counter_ids("customer"));
        let customer_client = CustomerClient::new(customer_resource_client);
        let customer_handle = tokio::spawn(customer_actor.run());

        // 3. Order store; its client validates references through the others
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(32, counter_ids("order"));
        let order_client = OrderClient::new(
            order_resource_client,
            customer_client.clone(),
            product_client.clone(),
        );
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            product_client,
            customer_client,
            order_client,
            handles: vec![product_handle, customer_handle, order_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // ResourceActor stops when its channel closes, so dropping the clients
        // is the shutdown signal.
        drop(self.order_client);
        drop(self.customer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
