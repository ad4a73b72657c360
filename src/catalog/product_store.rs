use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Product, ProductCreate};

impl Entity for Product {
    type Id = String;
    type CreatePayload = ProductCreate;

    fn id(&self) -> &String {
        &self.id
    }

    /// Prices must be non-negative at creation.
    fn from_create(id: String, payload: ProductCreate) -> Result<Self, FrameworkError> {
        if payload.price < 0.0 {
            return Err(FrameworkError::Validation(format!(
                "negative price: {}",
                payload.price
            )));
        }
        Ok(Self {
            id,
            name: payload.name,
            category: payload.category,
            price: payload.price,
        })
    }
}
