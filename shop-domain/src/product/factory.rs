use uuid::Uuid;

use super::Product;
use crate::domain_event::{Event, EventData};
use crate::error::DomainResult;
use crate::eventing::EventDispatcher;

/// 商品工厂：生成标识并发布 `ProductCreatedEvent`
pub struct ProductFactory;

impl ProductFactory {
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        dispatcher: &EventDispatcher<Event>,
    ) -> DomainResult<Product> {
        let product = Product::new(Uuid::new_v4().to_string(), name, price)?;
        dispatcher.notify(&Event::new(EventData::ProductCreated {
            name: product.name().to_string(),
            description: description.into(),
            price: product.price(),
        }))?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventing::EventHandler;
    use crate::product::PRODUCT_CREATED_EVENT;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<EventData>>,
    }

    impl EventHandler<Event> for Recorder {
        fn handler_name(&self) -> &str {
            "recorder"
        }

        fn handle(&self, event: &Event) -> anyhow::Result<()> {
            self.seen.lock().unwrap().push(event.data().clone());
            Ok(())
        }
    }

    #[test]
    fn create_announces_product() {
        let dispatcher = EventDispatcher::<Event>::new();
        let recorder = Arc::new(Recorder::default());
        dispatcher.register(PRODUCT_CREATED_EVENT, recorder.clone());

        let product =
            ProductFactory::create("Product 1", "Product 1 description", 10.0, &dispatcher)
                .unwrap();

        assert_eq!(product.price(), 10.0);
        assert_eq!(
            *recorder.seen.lock().unwrap(),
            vec![EventData::ProductCreated {
                name: "Product 1".into(),
                description: "Product 1 description".into(),
                price: 10.0,
            }]
        );
    }

    #[test]
    fn invalid_product_is_not_announced() {
        let dispatcher = EventDispatcher::<Event>::new();
        let recorder = Arc::new(Recorder::default());
        dispatcher.register(PRODUCT_CREATED_EVENT, recorder.clone());

        assert!(ProductFactory::create("Product 1", "d", -1.0, &dispatcher).is_err());
        assert!(recorder.seen.lock().unwrap().is_empty());
    }
}
