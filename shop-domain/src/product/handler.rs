use tracing::info;

use crate::domain_event::{Event, EventData};
use crate::eventing::EventHandler;

/// 商品创建后发送通知邮件（此处仅记录日志）
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler<Event> for SendEmailWhenProductIsCreatedHandler {
    fn handler_name(&self) -> &str {
        "send-email-when-product-is-created"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let EventData::ProductCreated { name, price, .. } = event.data() else {
            anyhow::bail!("unexpected event type: {}", event.data().event_type());
        };

        info!(product = %name, price, "Sending email to ...");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_product_created() {
        let event = Event::new(EventData::ProductCreated {
            name: "Product 1".into(),
            description: "Product 1 description".into(),
            price: 10.0,
        });
        assert!(SendEmailWhenProductIsCreatedHandler.handle(&event).is_ok());
    }
}
