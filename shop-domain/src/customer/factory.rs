use uuid::Uuid;

use super::{Address, Customer};
use crate::domain_event::{Event, EventData};
use crate::error::DomainResult;
use crate::eventing::EventDispatcher;

/// 客户工厂：生成标识并发布 `CustomerCreatedEvent`
pub struct CustomerFactory;

impl CustomerFactory {
    pub fn create(
        name: impl Into<String>,
        dispatcher: &EventDispatcher<Event>,
    ) -> DomainResult<Customer> {
        let customer = Customer::new(Uuid::new_v4().to_string(), name)?;
        Self::announce(customer, dispatcher)
    }

    pub fn create_with_address(
        name: impl Into<String>,
        address: Address,
        dispatcher: &EventDispatcher<Event>,
    ) -> DomainResult<Customer> {
        let mut customer = Customer::new(Uuid::new_v4().to_string(), name)?;
        customer.set_address(address);
        Self::announce(customer, dispatcher)
    }

    fn announce(customer: Customer, dispatcher: &EventDispatcher<Event>) -> DomainResult<Customer> {
        dispatcher.notify(&Event::new(EventData::CustomerCreated {
            customer: customer.clone(),
        }))?;
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::CUSTOMER_CREATED_EVENT;
    use crate::entity::Entity;
    use crate::eventing::EventHandler;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        ids: Mutex<Vec<String>>,
    }

    impl EventHandler<Event> for Recorder {
        fn handler_name(&self) -> &str {
            "recorder"
        }

        fn handle(&self, event: &Event) -> anyhow::Result<()> {
            if let EventData::CustomerCreated { customer } = event.data() {
                self.ids.lock().unwrap().push(customer.id().clone());
            }
            Ok(())
        }
    }

    #[test]
    fn create_generates_id_and_announces() {
        let dispatcher = EventDispatcher::<Event>::new();
        let recorder = Arc::new(Recorder::default());
        dispatcher.register(CUSTOMER_CREATED_EVENT, recorder.clone());

        let customer = CustomerFactory::create("John", &dispatcher).unwrap();

        assert_eq!(customer.name(), "John");
        assert!(customer.address().is_none());
        assert!(Uuid::parse_str(customer.id()).is_ok());
        assert_eq!(*recorder.ids.lock().unwrap(), vec![customer.id().clone()]);
    }

    #[test]
    fn create_with_address_does_not_announce_address_change() {
        let dispatcher = EventDispatcher::<Event>::new();
        let recorder = Arc::new(Recorder::default());
        dispatcher.register(CUSTOMER_CREATED_EVENT, recorder.clone());
        let address = Address::new("Street", 1, "13330-250", "São Paulo").unwrap();

        let customer =
            CustomerFactory::create_with_address("John", address.clone(), &dispatcher).unwrap();

        assert_eq!(customer.address(), Some(&address));
        assert_eq!(recorder.ids.lock().unwrap().len(), 1);
    }

    #[test]
    fn create_rejects_blank_name() {
        let dispatcher = EventDispatcher::<Event>::new();
        assert!(CustomerFactory::create("", &dispatcher).is_err());
    }
}
