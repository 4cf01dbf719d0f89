// Update handler: the asynchronous wrapper around UPDATE_EMPLOYEE.

use crate::application::command_handlers::request_lifecycle::run_request;
use crate::application::errors::ApplicationError;
use crate::application::store::Store;
use crate::core::employee::decide::decide_update;
use crate::core::employee::model::EmployeeUpdates;
use crate::core::ports::{Clock, EmployeeGateway, GatewayRequest};
use std::sync::Arc;

pub struct UpdateEmployeeHandler<TGateway, TClock>
where
    TGateway: EmployeeGateway,
    TClock: Clock,
{
    store: Arc<Store>,
    gateway: Arc<TGateway>,
    clock: Arc<TClock>,
}

impl<TGateway, TClock> UpdateEmployeeHandler<TGateway, TClock>
where
    TGateway: EmployeeGateway,
    TClock: Clock,
{
    pub fn new(store: Arc<Store>, gateway: Arc<TGateway>, clock: Arc<TClock>) -> Self {
        Self { store, gateway, clock }
    }

    pub async fn handle(&self, id: &str, updates: EmployeeUpdates) -> Result<(), ApplicationError> {
        let request = GatewayRequest::Update { id: id.to_string() };
        let clock = self.clock.clone();
        run_request(&self.store, self.gateway.as_ref(), request, move |state| {
            decide_update(state, id, updates, clock.now())
        })
        .await?;
        Ok(())
    }
}
