use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shop_domain::checkout::Order;
use shop_domain::customer::Customer;
use shop_domain::entity::Entity;
use shop_domain::error::{DomainError, DomainResult};
use shop_domain::product::Product;
use shop_domain::repository::{
    CustomerRepository, OrderRepository, ProductRepository, Repository,
};
use tracing::debug;

/// 基于内存的仓储实现
/// - 以实体标识为键保存实体副本
/// - `find_all` 按标识排序返回
pub struct InMemoryRepository<T>
where
    T: Entity,
{
    items: DashMap<T::Id, T>,
}

pub type InMemoryCustomerRepository = InMemoryRepository<Customer>;
pub type InMemoryProductRepository = InMemoryRepository<Product>;
pub type InMemoryOrderRepository = InMemoryRepository<Order>;

impl<T> Default for InMemoryRepository<T>
where
    T: Entity,
{
    fn default() -> Self {
        Self {
            items: DashMap::new(),
        }
    }
}

impl<T> InMemoryRepository<T>
where
    T: Entity,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn not_found() -> DomainError {
        DomainError::not_found(format!("{} not found", T::TYPE))
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Entity + Clone + 'static,
{
    async fn create(&self, entity: &T) -> DomainResult<()> {
        match self.items.entry(entity.id().clone()) {
            Entry::Occupied(_) => Err(DomainError::already_exists(format!(
                "{} {} already exists",
                T::TYPE,
                entity.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(entity.clone());
                debug!(entity = T::TYPE, id = %entity.id(), "entity created");
                Ok(())
            }
        }
    }

    async fn update(&self, entity: &T) -> DomainResult<()> {
        let Some(mut stored) = self.items.get_mut(entity.id()) else {
            return Err(Self::not_found());
        };
        *stored = entity.clone();
        debug!(entity = T::TYPE, id = %entity.id(), "entity updated");
        Ok(())
    }

    async fn find(&self, id: &T::Id) -> DomainResult<T> {
        self.items
            .get(id)
            .map(|stored| stored.clone())
            .ok_or_else(Self::not_found)
    }

    async fn find_all(&self) -> DomainResult<Vec<T>> {
        let mut all: Vec<T> = self.items.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(all)
    }
}

impl CustomerRepository for InMemoryCustomerRepository {}

impl ProductRepository for InMemoryProductRepository {}

impl OrderRepository for InMemoryOrderRepository {}
