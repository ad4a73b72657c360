use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Customer, CustomerCreate};

impl Entity for Customer {
    type Id = String;
    type CreatePayload = CustomerCreate;

    fn id(&self) -> &String {
        &self.id
    }

    /// Tiers are 1-based.
    fn from_create(id: String, payload: CustomerCreate) -> Result<Self, FrameworkError> {
        if payload.tier == 0 {
            return Err(FrameworkError::Validation(
                "tier must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            id,
            name: payload.name,
            tier: payload.tier,
        })
    }
}
