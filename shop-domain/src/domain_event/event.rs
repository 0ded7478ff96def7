use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainEvent;
use crate::customer::{CUSTOMER_CHANGED_EVENT, CUSTOMER_CREATED_EVENT, Customer};
use crate::error::DomainResult;
use crate::product::PRODUCT_CREATED_EVENT;

/// 事件载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EventData {
    CustomerCreated {
        customer: Customer,
    },
    /// 客户地址变更
    CustomerChanged {
        customer: Customer,
    },
    ProductCreated {
        name: String,
        description: String,
        price: f64,
    },
}

impl EventData {
    pub fn event_type(&self) -> &'static str {
        match self {
            EventData::CustomerCreated { .. } => CUSTOMER_CREATED_EVENT,
            EventData::CustomerChanged { .. } => CUSTOMER_CHANGED_EVENT,
            EventData::ProductCreated { .. } => PRODUCT_CREATED_EVENT,
        }
    }
}

/// 领域事件：构造后不可变，由触发方持有
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    event_id: String,
    occurred_at: DateTime<Utc>,
    data: EventData,
}

impl Event {
    pub fn new(data: EventData) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            occurred_at: Utc::now(),
            data,
        }
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn data(&self) -> &EventData {
        &self.data
    }

    /// 载荷的 JSON 表示（不含类型标签）
    pub fn payload_json(&self) -> DomainResult<serde_json::Value> {
        let value = match &self.data {
            EventData::CustomerCreated { customer } | EventData::CustomerChanged { customer } => {
                let customer = serde_json::to_value(customer)?;
                serde_json::json!({ "customer": customer })
            }
            EventData::ProductCreated {
                name,
                description,
                price,
            } => serde_json::json!({
                "name": name,
                "description": description,
                "price": price,
            }),
        };
        Ok(value)
    }
}

impl DomainEvent for Event {
    fn event_type(&self) -> &str {
        self.data.event_type()
    }

    fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }
}
