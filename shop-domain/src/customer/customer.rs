use serde::{Deserialize, Serialize};

use super::Address;
use crate::domain_event::{Event, EventData};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::eventing::EventDispatcher;
use crate::value_object::require_text;

/// 客户实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: f64,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0.0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> DomainResult<()> {
        require_text("id", &self.id)?;
        require_text("name", &self.name)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> f64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        require_text("name", &name)?;
        self.name = name;
        Ok(())
    }

    /// 修改地址，随后同步发布 `CustomerChangedEvent`
    ///
    /// 状态先于通知生效；处理器失败时地址已变更，错误原样返回。
    pub fn change_address(
        &mut self,
        address: Address,
        dispatcher: &EventDispatcher<Event>,
    ) -> DomainResult<()> {
        self.address = Some(address);
        dispatcher.notify(&Event::new(EventData::CustomerChanged {
            customer: self.clone(),
        }))
    }

    /// 设置地址而不发布事件（用于工厂组装）
    pub(crate) fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        if self.address.is_none() {
            return Err(DomainError::invalid_state(
                "address is mandatory to activate a customer",
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: f64) -> DomainResult<()> {
        if !points.is_finite() || points < 0.0 {
            return Err(DomainError::invalid_value(
                "reward points must be greater than or equal to zero",
            ));
        }
        let total = self.reward_points + points;
        if !total.is_finite() {
            return Err(DomainError::invalid_value("reward points overflow"));
        }
        self.reward_points = total;
        Ok(())
    }
}

impl Entity for Customer {
    type Id = String;
    const TYPE: &'static str = "Customer";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::CUSTOMER_CHANGED_EVENT;
    use crate::eventing::EventHandler;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Event>>,
    }

    impl EventHandler<Event> for Recorder {
        fn handler_name(&self) -> &str {
            "recorder"
        }

        fn handle(&self, event: &Event) -> anyhow::Result<()> {
            self.seen.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    fn address() -> Address {
        Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap()
    }

    #[test]
    fn id_and_name_are_required() {
        let err = Customer::new("", "John").unwrap_err();
        assert_eq!(err.to_string(), "invalid value: id is required");

        let err = Customer::new("123", "").unwrap_err();
        assert_eq!(err.to_string(), "invalid value: name is required");
    }

    #[test]
    fn change_name_keeps_old_name_on_error() {
        let mut customer = Customer::new("123", "John").unwrap();
        customer.change_name("Jane").unwrap();
        assert_eq!(customer.name(), "Jane");

        assert!(customer.change_name(" ").is_err());
        assert_eq!(customer.name(), "Jane");
    }

    #[test]
    fn activate_requires_address() {
        let dispatcher = EventDispatcher::<Event>::new();
        let mut customer = Customer::new("1", "Customer 1").unwrap();

        let err = customer.activate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidState { .. }));
        assert!(!customer.is_active());

        customer.change_address(address(), &dispatcher).unwrap();
        customer.activate().unwrap();
        assert!(customer.is_active());

        customer.deactivate();
        assert!(!customer.is_active());
    }

    #[test]
    fn reward_points_accumulate() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        assert_eq!(customer.reward_points(), 0.0);

        customer.add_reward_points(10.0).unwrap();
        customer.add_reward_points(5.0).unwrap();
        assert_eq!(customer.reward_points(), 15.0);

        assert!(customer.add_reward_points(-1.0).is_err());
        assert_eq!(customer.reward_points(), 15.0);
    }

    // 累加溢出为无穷时拒绝，并保留原积分
    #[test]
    fn reward_points_overflow_is_rejected() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        customer.add_reward_points(f64::MAX).unwrap();

        let err = customer.add_reward_points(f64::MAX).unwrap_err();

        assert_eq!(err.to_string(), "invalid value: reward points overflow");
        assert_eq!(customer.reward_points(), f64::MAX);
    }

    // 地址变更后同步通知，事件携带的是变更后的客户
    #[test]
    fn change_address_notifies_after_mutation() {
        let dispatcher = EventDispatcher::<Event>::new();
        let recorder = Arc::new(Recorder::default());
        dispatcher.register(CUSTOMER_CHANGED_EVENT, recorder.clone());

        let mut customer = Customer::new("1", "Customer 1").unwrap();
        customer.change_address(address(), &dispatcher).unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        match seen[0].data() {
            EventData::CustomerChanged { customer: snapshot } => {
                assert_eq!(snapshot.address(), Some(&address()));
                assert_eq!(snapshot, &customer);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
