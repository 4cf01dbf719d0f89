// Simulated employee service.
//
// Purpose
// - Model the latency and failure of a network round trip without any network.
//
// Responsibilities
// - Wait the configured delay for the request kind, then succeed, or fail while offline.

use crate::core::ports::{EmployeeGateway, GatewayError, GatewayRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const DEFAULT_CREATE_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_UPDATE_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_DELETE_DELAY: Duration = Duration::from_millis(1000);

pub struct SimulatedGateway {
    create_delay: Duration,
    update_delay: Duration,
    delete_delay: Duration,
    is_offline: AtomicBool,
}

impl SimulatedGateway {
    pub fn new(create_delay: Duration, update_delay: Duration, delete_delay: Duration) -> Self {
        Self {
            create_delay,
            update_delay,
            delete_delay,
            is_offline: AtomicBool::new(false),
        }
    }

    /// Same delay for every request kind.
    pub fn uniform(delay: Duration) -> Self {
        Self::new(delay, delay, delay)
    }

    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    pub fn delay_for(&self, request: &GatewayRequest) -> Duration {
        match request {
            GatewayRequest::Create { .. } => self.create_delay,
            GatewayRequest::Update { .. } => self.update_delay,
            GatewayRequest::Delete { .. } => self.delete_delay,
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_CREATE_DELAY, DEFAULT_UPDATE_DELAY, DEFAULT_DELETE_DELAY)
    }
}

#[async_trait::async_trait]
impl EmployeeGateway for SimulatedGateway {
    async fn send(&self, request: &GatewayRequest) -> Result<(), GatewayError> {
        let delay = self.delay_for(request);
        tracing::debug!(request = request.kind(), delay_ms = delay.as_millis() as u64, "simulating request");
        tokio::time::sleep(delay).await;
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(GatewayError::Offline);
        }
        Ok(())
    }
}

#[cfg(test)]
mod simulated_gateway_tests {
    use super::*;
    use rstest::rstest;
    use tokio::time::Instant;

    #[rstest]
    #[case(GatewayRequest::Create { email: "a@x.com".into() }, 2000)]
    #[case(GatewayRequest::Update { id: "1".into() }, 2000)]
    #[case(GatewayRequest::Delete { id: "1".into() }, 1000)]
    #[tokio::test(start_paused = true)]
    async fn it_should_wait_the_delay_of_the_request_kind(#[case] request: GatewayRequest, #[case] millis: u64) {
        let gateway = SimulatedGateway::default();
        let started = Instant::now();
        gateway.send(&request).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(millis));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_fail_while_offline() {
        let gateway = SimulatedGateway::uniform(Duration::from_millis(10));
        gateway.set_offline(true);
        let result = gateway.send(&GatewayRequest::Delete { id: "1".into() }).await;
        assert_eq!(result, Err(GatewayError::Offline));
    }
}
