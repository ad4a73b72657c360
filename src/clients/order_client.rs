use chrono::NaiveDate;
use tracing::{error, info, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::clients::{CustomerClient, ProductClient};
use crate::domain::{Order, OrderCreate};
use crate::error::OrderError;
use crate::impl_client_methods;

/// Client for interacting with the order store.
///
/// Order creation is an orchestration: the customer and every product line
/// must resolve against their stores before the order is accepted.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    customer_client: CustomerClient,
    product_client: ProductClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        customer_client: CustomerClient,
        product_client: ProductClient,
    ) -> Self {
        Self {
            inner,
            customer_client,
            product_client,
        }
    }

    #[instrument(skip(self, product_ids), fields(line_count = product_ids.len()))]
    pub async fn create_order(
        &self,
        order_date: NaiveDate,
        customer_id: String,
        product_ids: Vec<String>,
    ) -> Result<String, OrderError> {
        info!("Processing create_order request");

        // Step 1: Resolve the customer
        let customer = match self.customer_client.get_customer(customer_id.clone()).await {
            Ok(Some(customer)) => {
                info!(customer_name = %customer.name, "Customer validation successful");
                customer
            }
            Ok(None) => {
                error!("Customer not found");
                return Err(OrderError::UnknownCustomer(customer_id));
            }
            Err(e) => {
                error!(error = %e, "Customer validation failed");
                return Err(OrderError::UnknownCustomer(format!(
                    "Customer lookup failed: {}",
                    e
                )));
            }
        };

        // Step 2: Resolve every product line; duplicate lines stay duplicated
        let mut products = Vec::with_capacity(product_ids.len());
        for product_id in &product_ids {
            match self.product_client.get_product(product_id.clone()).await {
                Ok(Some(product)) => products.push(product),
                Ok(None) => {
                    error!(product_id = %product_id, "Product not found");
                    return Err(OrderError::UnknownProduct(product_id.clone()));
                }
                Err(e) => {
                    error!(error = %e, "Product validation failed");
                    return Err(OrderError::UnknownProduct(format!(
                        "Product lookup failed: {}",
                        e
                    )));
                }
            }
        }
        info!(line_count = products.len(), "Product validation successful");

        // Step 3: Store the assembled order
        let payload = OrderCreate {
            order_date,
            customer,
            products,
        };
        self.inner.create(payload).await.map_err(|e| match e {
            FrameworkError::Validation(msg) => OrderError::ValidationError(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order, orders);
