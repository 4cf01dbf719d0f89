// Creation handler: the asynchronous wrapper around ADD_EMPLOYEE.
//
// Responsibilities
// - Assign a time based id and the creation timestamp.
// - Run the request lifecycle against the simulated gateway.
// - Return the stored employee on success.

use crate::application::command_handlers::request_lifecycle::run_request;
use crate::application::errors::ApplicationError;
use crate::application::store::Store;
use crate::core::employee::decide::decide_add;
use crate::core::employee::model::{Employee, EmployeeDetails};
use crate::core::ports::{Clock, EmployeeGateway, GatewayRequest};
use crate::core::store::action::Action;
use std::sync::Arc;
use uuid::Uuid;

pub struct AddEmployeeHandler<TGateway, TClock>
where
    TGateway: EmployeeGateway,
    TClock: Clock,
{
    store: Arc<Store>,
    gateway: Arc<TGateway>,
    clock: Arc<TClock>,
}

impl<TGateway, TClock> AddEmployeeHandler<TGateway, TClock>
where
    TGateway: EmployeeGateway,
    TClock: Clock,
{
    pub fn new(store: Arc<Store>, gateway: Arc<TGateway>, clock: Arc<TClock>) -> Self {
        Self { store, gateway, clock }
    }

    pub async fn handle(&self, details: EmployeeDetails) -> Result<Employee, ApplicationError> {
        let request = GatewayRequest::Create {
            email: details.email.clone(),
        };
        let id = Uuid::now_v7().to_string();
        let clock = self.clock.clone();
        let action = run_request(&self.store, self.gateway.as_ref(), request, move |state| {
            decide_add(state, details, id, clock.now())
        })
        .await?;
        match action {
            Action::AddEmployee(employee) => Ok(employee),
            other => Err(ApplicationError::Unexpected(format!("creation produced {}", other.kind()))),
        }
    }
}
