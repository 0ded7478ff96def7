use shop_domain::SharedEventDispatcher;
use shop_domain::checkout::{OrderItem, OrderService};
use shop_domain::customer::{
    Address, CUSTOMER_CHANGED_EVENT, CUSTOMER_CREATED_EVENT, CustomerAddressChangedLogHandler,
    CustomerCreatedLog1Handler, CustomerCreatedLog2Handler, CustomerFactory,
};
use shop_domain::entity::Entity;
use shop_domain::eventing::{DispatcherConfig, EventDispatcher, FailurePolicy};
use shop_domain::product::{
    PRODUCT_CREATED_EVENT, ProductFactory, ProductService, SendEmailWhenProductIsCreatedHandler,
};
use shop_domain::repository::Repository;
use shop_infrastructure::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn build_dispatcher() -> SharedEventDispatcher {
    let config = DispatcherConfig::builder()
        .failure_policy(FailurePolicy::Continue)
        .build();
    let dispatcher: SharedEventDispatcher = Arc::new(EventDispatcher::with_config(config));

    dispatcher.register(CUSTOMER_CREATED_EVENT, Arc::new(CustomerCreatedLog1Handler));
    dispatcher.register(CUSTOMER_CREATED_EVENT, Arc::new(CustomerCreatedLog2Handler));
    dispatcher.register(CUSTOMER_CHANGED_EVENT, Arc::new(CustomerAddressChangedLogHandler));
    dispatcher.register(PRODUCT_CREATED_EVENT, Arc::new(SendEmailWhenProductIsCreatedHandler));

    dispatcher
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 默认 info，可通过 RUST_LOG 覆盖，例如 RUST_LOG=debug
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let dispatcher = build_dispatcher();
    let customers = InMemoryCustomerRepository::new();
    let products = InMemoryProductRepository::new();
    let orders = InMemoryOrderRepository::new();

    // 客户：创建 -> 变更地址 -> 激活
    let mut customer = CustomerFactory::create("Customer 1", &dispatcher)?;
    customers.create(&customer).await?;

    customer.change_address(Address::new("Street 1", 1, "13330-250", "City 1")?, &dispatcher)?;
    customer.activate()?;
    customers.update(&customer).await?;

    // 商品：创建 -> 调价
    let mut catalog = vec![
        ProductFactory::create("Product 1", "Product 1 description", 10.0, &dispatcher)?,
        ProductFactory::create("Product 2", "Product 2 description", 25.0, &dispatcher)?,
    ];
    ProductService::increase_price(&mut catalog, 10.0)?;
    for product in &catalog {
        products.create(product).await?;
    }

    // 下单并发放积分
    let items = catalog
        .iter()
        .enumerate()
        .map(|(i, p)| OrderItem::new(format!("item-{i}"), p.name(), p.price(), p.id().clone(), 2))
        .collect::<Result<Vec<_>, _>>()?;
    let order = OrderService::place_order(&mut customer, items)?;
    orders.create(&order).await?;
    customers.update(&customer).await?;

    let stored = customers.find(customer.id()).await?;
    let order_total = OrderService::total(&orders.find_all().await?);
    tracing::info!(
        customer_id = %stored.id(),
        reward_points = stored.reward_points(),
        order_total,
        "checkout finished"
    );

    dispatcher.unregister_all();
    Ok(())
}
