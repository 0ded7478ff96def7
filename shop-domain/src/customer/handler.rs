use tracing::info;

use crate::domain_event::{Event, EventData};
use crate::entity::Entity;
use crate::eventing::EventHandler;

/// 客户创建后的第一条日志
pub struct CustomerCreatedLog1Handler;

impl EventHandler<Event> for CustomerCreatedLog1Handler {
    fn handler_name(&self) -> &str {
        "customer-created-log-1"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        info!(
            event_id = event.event_id(),
            "This is the first console.log of event: CustomerCreated"
        );
        Ok(())
    }
}

/// 客户创建后的第二条日志
pub struct CustomerCreatedLog2Handler;

impl EventHandler<Event> for CustomerCreatedLog2Handler {
    fn handler_name(&self) -> &str {
        "customer-created-log-2"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        info!(
            event_id = event.event_id(),
            "This is the second console.log of event: CustomerCreated"
        );
        Ok(())
    }
}

/// 记录客户地址变更
pub struct CustomerAddressChangedLogHandler;

impl EventHandler<Event> for CustomerAddressChangedLogHandler {
    fn handler_name(&self) -> &str {
        "customer-address-changed-log"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let EventData::CustomerChanged { customer } = event.data() else {
            anyhow::bail!("unexpected event type: {}", event.data().event_type());
        };

        let Some(address) = customer.address() else {
            anyhow::bail!("customer {} has no address", customer.id());
        };

        info!(
            customer_id = %customer.id(),
            customer_name = customer.name(),
            "Customer address: {}, {}, changed to: {}",
            customer.id(),
            customer.name(),
            address
        );
        Ok(())
    }
}
