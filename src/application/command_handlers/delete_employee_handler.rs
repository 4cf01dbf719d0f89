// Deletion handler: the asynchronous wrapper around DELETE_EMPLOYEE.

use crate::application::command_handlers::request_lifecycle::run_request;
use crate::application::errors::ApplicationError;
use crate::application::store::Store;
use crate::core::employee::decide::decide_delete;
use crate::core::ports::{EmployeeGateway, GatewayRequest};
use std::sync::Arc;

pub struct DeleteEmployeeHandler<TGateway>
where
    TGateway: EmployeeGateway,
{
    store: Arc<Store>,
    gateway: Arc<TGateway>,
}

impl<TGateway> DeleteEmployeeHandler<TGateway>
where
    TGateway: EmployeeGateway,
{
    pub fn new(store: Arc<Store>, gateway: Arc<TGateway>) -> Self {
        Self { store, gateway }
    }

    pub async fn handle(&self, id: &str) -> Result<(), ApplicationError> {
        let request = GatewayRequest::Delete { id: id.to_string() };
        run_request(&self.store, self.gateway.as_ref(), request, |state| decide_delete(state, id)).await?;
        Ok(())
    }
}
