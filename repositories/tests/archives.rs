use chrono::{DateTime, Utc};
use repositories::postgres::ConnectionDetails;
use repositories::postgres::initializer::{ArchiveCreator, Archives};
use rstest::{fixture, rstest};
use showroom_core::Archive;
use showroom_core::model::{Customer, Purchase, Vehicle};
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::ContainerAsync;
use testcontainers_modules::testcontainers::runners::AsyncRunner;

struct TestRuntime {
    _container: ContainerAsync<Postgres>,
    archives: Archives,
}

#[fixture]
async fn runtime() -> TestRuntime {
    let container = Postgres::default()
        .with_db_name("showroom")
        .with_user("testuser")
        .with_password("testpass")
        .start()
        .await
        .unwrap();

    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();

    let archives = ArchiveCreator::default()
        .with_pool_size(2)
        .create(ConnectionDetails::Url(format!(
            "postgresql://testuser:testpass@{host}:{port}/showroom"
        )))
        .await
        .unwrap();

    TestRuntime {
        _container: container,
        archives,
    }
}

fn corolla() -> Vehicle {
    Vehicle::new("Toyota".to_string(), "Corolla".to_string(), 20000.0)
}

fn purchase_date() -> DateTime<Utc> {
    "2024-01-01T00:00:00Z".parse().unwrap()
}

#[rstest]
#[tokio::test]
async fn list_all_with_no_data_returns_empty_vec(#[future(awt)] runtime: TestRuntime) {
    let cars = runtime.archives.cars.list_all().await.unwrap();

    assert!(cars.is_empty());
}

#[rstest]
#[tokio::test]
async fn add_then_list_contains_record_with_assigned_id(#[future(awt)] runtime: TestRuntime) {
    let cars = &runtime.archives.cars;

    cars.add(corolla()).await.unwrap();

    let listed = cars.list_all().await.unwrap();

    assert_eq!(1, listed.len());
    let car = &listed[0];
    assert!(car.id > 0, "store assigns a positive id");
    assert_eq!("Toyota", car.brand);
    assert_eq!("Corolla", car.model);
    assert_eq!(20000.0, car.price);
}

#[rstest]
#[tokio::test]
async fn add_ignores_client_supplied_id(#[future(awt)] runtime: TestRuntime) {
    let cars = &runtime.archives.cars;

    let mut car = corolla();
    car.id = 999;
    cars.add(car).await.unwrap();

    let listed = cars.list_all().await.unwrap();

    assert_eq!(1, listed.len());
    assert_ne!(999, listed[0].id, "the store assigns the id, not the client");
}

#[rstest]
#[tokio::test]
async fn delete_removes_the_matching_row_only(#[future(awt)] runtime: TestRuntime) {
    let customers = &runtime.archives.customers;

    customers
        .add(Customer::new(
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
        ))
        .await
        .unwrap();
    customers
        .add(Customer::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
        ))
        .await
        .unwrap();

    let listed = customers.list_all().await.unwrap();
    let jane = listed.iter().find(|c| c.name == "Jane Doe").unwrap();

    customers.remove(Customer::with_id(jane.id)).await.unwrap();

    let remaining = customers.list_all().await.unwrap();
    assert_eq!(1, remaining.len());
    assert_eq!("John Doe", remaining[0].name);
}

#[rstest]
#[tokio::test]
async fn delete_of_nonexistent_id_is_a_noop(#[future(awt)] runtime: TestRuntime) {
    let customers = &runtime.archives.customers;

    customers
        .add(Customer::new(
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
        ))
        .await
        .unwrap();

    customers.remove(Customer::with_id(4242)).await.unwrap();

    let listed = customers.list_all().await.unwrap();
    assert_eq!(1, listed.len(), "store contents are unchanged");
}

#[rstest]
#[tokio::test]
async fn update_fully_replaces_the_row(#[future(awt)] runtime: TestRuntime) {
    let cars = &runtime.archives.cars;

    cars.add(corolla()).await.unwrap();
    let id = cars.list_all().await.unwrap()[0].id;

    let mut replacement = Vehicle::new("Honda".to_string(), "Civic".to_string(), 22000.0);
    replacement.id = id;
    cars.update(replacement).await.unwrap();

    let listed = cars.list_all().await.unwrap();
    assert_eq!(1, listed.len());
    let car = &listed[0];
    assert_eq!(id, car.id);
    assert_eq!("Honda", car.brand);
    assert_eq!("Civic", car.model);
    assert_eq!(22000.0, car.price);
}

#[rstest]
#[tokio::test]
async fn purchase_with_dangling_references_still_inserts(#[future(awt)] runtime: TestRuntime) {
    let purchases = &runtime.archives.purchases;

    // neither customer 1 nor car 1 exists; no referential check is enforced
    purchases
        .add(Purchase::new(1, 1, purchase_date()))
        .await
        .unwrap();

    let listed = purchases.list_all().await.unwrap();
    assert_eq!(1, listed.len());
    let purchase = &listed[0];
    assert_eq!(1, purchase.customer_id);
    assert_eq!(1, purchase.auto_id);
    assert_eq!(purchase_date(), purchase.purchase_date);
}
