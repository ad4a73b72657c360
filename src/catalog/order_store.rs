use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Order, OrderCreate};

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;

    fn id(&self) -> &String {
        &self.id
    }

    // Referential validation happens client-side, where the other stores are
    // reachable; the payload arrives fully resolved. An empty product list is
    // a valid order.
    fn from_create(id: String, payload: OrderCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            order_date: payload.order_date,
            customer: payload.customer,
            products: payload.products,
        })
    }
}
