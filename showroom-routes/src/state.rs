use crate::service::RecordService;
use axum::extract::FromRef;
use repositories::postgres::archive::PgArchive;
use repositories::postgres::initializer::Archives;
use showroom_core::model::{Customer, Purchase, Vehicle};

pub type CarService = RecordService<PgArchive<Vehicle>>;
pub type CustomerService = RecordService<PgArchive<Customer>>;
pub type PurchaseService = RecordService<PgArchive<Purchase>>;

#[derive(Clone)]
pub struct ShowroomState {
    pub cars: CarService,
    pub customers: CustomerService,
    pub purchases: PurchaseService,
}

impl ShowroomState {
    pub fn new(archives: Archives) -> Self {
        Self {
            cars: RecordService::new(archives.cars),
            customers: RecordService::new(archives.customers),
            purchases: RecordService::new(archives.purchases),
        }
    }
}

impl FromRef<ShowroomState> for CarService {
    fn from_ref(input: &ShowroomState) -> Self {
        input.cars.clone()
    }
}

impl FromRef<ShowroomState> for CustomerService {
    fn from_ref(input: &ShowroomState) -> Self {
        input.customers.clone()
    }
}

impl FromRef<ShowroomState> for PurchaseService {
    fn from_ref(input: &ShowroomState) -> Self {
        input.purchases.clone()
    }
}
