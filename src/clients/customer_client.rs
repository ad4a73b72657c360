use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Customer, CustomerCreate};
use crate::error::CustomerError;
use crate::impl_basic_client;

/// Client for interacting with the customer store.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl_basic_client!(CustomerClient, Customer, CustomerError, customer, customers);

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(&self, payload: CustomerCreate) -> Result<String, CustomerError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(|e| match e {
            FrameworkError::Validation(msg) => CustomerError::ValidationError(msg),
            other => CustomerError::ActorCommunicationError(other.to_string()),
        })
    }
}
