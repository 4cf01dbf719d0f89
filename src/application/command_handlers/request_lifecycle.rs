// Request lifecycle shared by the asynchronous employee handlers.
//
// Responsibilities
// - Dispatch SET_LOADING(true) then CLEAR_ERROR before the simulated request starts.
// - On success dispatch the decided mutation, then SET_LOADING(false).
// - On failure dispatch SET_ERROR(message), then SET_LOADING(false), and hand the error back.
//
// Notes
// - The decision runs after the request completes, against the state at that moment.
// - No queuing and no cancellation. Concurrent requests race; the last write wins on loading and error.

use crate::application::errors::ApplicationError;
use crate::application::store::Store;
use crate::core::employee::decide::DecideError;
use crate::core::ports::{EmployeeGateway, GatewayRequest};
use crate::core::store::action::{Action, clear_error, set_error, set_loading};
use crate::core::store::state::EmployeesState;

pub(crate) async fn run_request<TGateway, TDecide>(
    store: &Store,
    gateway: &TGateway,
    request: GatewayRequest,
    decide: TDecide,
) -> Result<Action, ApplicationError>
where
    TGateway: EmployeeGateway + ?Sized,
    TDecide: FnOnce(&EmployeesState) -> Result<Action, DecideError>,
{
    store.dispatch(set_loading(true)).await;
    store.dispatch(clear_error()).await;

    let outcome = match gateway.send(&request).await {
        Ok(()) => store.select(|state| decide(&state.employees)).await.map_err(ApplicationError::from),
        Err(error) => Err(ApplicationError::from(error)),
    };

    match outcome {
        Ok(action) => {
            store.dispatch(action.clone()).await;
            store.dispatch(set_loading(false)).await;
            tracing::info!(request = request.kind(), action = action.kind(), "employee request completed");
            Ok(action)
        }
        Err(error) => {
            tracing::error!(request = request.kind(), %error, "employee request failed");
            store.dispatch(set_error(error.to_string())).await;
            store.dispatch(set_loading(false)).await;
            Err(error)
        }
    }
}
