//! Servicio del panel de control
//!
//! Agregación financiera y de estado de la flota. Se recalcula en cada
//! petición recorriendo las siete colecciones vivas; las colecciones se
//! cargan en paralelo y no comparten instantánea.

use rust_decimal::Decimal;
use tracing::debug;

use crate::dto::dashboard_dto::DashboardStats;
use crate::models::{
    Driver, FuelRecord, MaintenanceRecord, Trip, TripExpense, TripIncome, Truck,
};
use crate::repositories::FleetStore;
use crate::utils::errors::{AppError, AppResult};

/// Colecciones de entrada del agregado
#[derive(Debug, Default, Clone, Copy)]
pub struct FleetSnapshot<'a> {
    pub trucks: &'a [Truck],
    pub drivers: &'a [Driver],
    pub trips: &'a [Trip],
    pub fuel_records: &'a [FuelRecord],
    pub maintenance_records: &'a [MaintenanceRecord],
    pub trip_expenses: &'a [TripExpense],
    pub trip_incomes: &'a [TripIncome],
}

/// Calcular el resumen del panel (función pura)
///
/// Las sumas son comprobadas: un desbordamiento de `Decimal` devuelve
/// `AppError::Internal` en lugar de abortar la petición.
pub fn compute_dashboard_stats(fleet: FleetSnapshot<'_>) -> AppResult<DashboardStats> {
    let total_revenue = checked_total(fleet.trip_incomes.iter().map(|income| income.amount))?;

    let fuel_cost = checked_total(fleet.fuel_records.iter().map(|record| record.cost))?;
    let maintenance_cost = checked_total(
        fleet
            .maintenance_records
            .iter()
            .map(|record| record.cost),
    )?;
    let trip_expenses = checked_total(fleet.trip_expenses.iter().map(|expense| expense.amount))?;
    let total_expenses = checked_total([fuel_cost, maintenance_cost, trip_expenses])?;

    let pending_payments = checked_total(
        fleet
            .trip_incomes
            .iter()
            .filter(|income| income.payment_status.is_pending())
            .map(|income| income.amount),
    )?;

    let net_profit = total_revenue
        .checked_sub(total_expenses)
        .ok_or_else(|| overflow("beneficio neto"))?;

    Ok(DashboardStats {
        total_revenue,
        total_expenses,
        net_profit,
        active_trips: count(fleet.trips, |trip| trip.status.is_in_progress()),
        active_trucks: count(fleet.trucks, |truck| truck.status.is_active()),
        available_drivers: count(fleet.drivers, |driver| driver.status.is_available()),
        pending_payments,
    })
}

fn checked_total(values: impl IntoIterator<Item = Decimal>) -> AppResult<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(value))
        .ok_or_else(|| overflow("suma de importes"))
}

fn overflow(what: &str) -> AppError {
    AppError::Internal(format!("Desbordamiento al calcular {}", what))
}

fn count<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> u64 {
    items.iter().filter(|item| predicate(item)).count() as u64
}

pub struct DashboardService {
    store: FleetStore,
}

impl DashboardService {
    pub fn new(store: &FleetStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let (
            trucks,
            drivers,
            trips,
            fuel_records,
            maintenance_records,
            trip_expenses,
            trip_incomes,
        ) = tokio::try_join!(
            self.store.trucks.find_all(),
            self.store.drivers.find_all(),
            self.store.trips.find_all(),
            self.store.fuel_records.find_all(),
            self.store.maintenance_records.find_all(),
            self.store.trip_expenses.find_all(),
            self.store.trip_incomes.find_all(),
        )?;

        let stats = compute_dashboard_stats(FleetSnapshot {
            trucks: &trucks,
            drivers: &drivers,
            trips: &trips,
            fuel_records: &fuel_records,
            maintenance_records: &maintenance_records,
            trip_expenses: &trip_expenses,
            trip_incomes: &trip_incomes,
        })?;
        debug!("📊 Panel calculado: {:?}", stats);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DriverStatus, ExpenseType, MaintenanceType, PaymentStatus, RecordMeta, TripStatus,
        TruckStatus,
    };
    use chrono::Utc;
    use uuid::Uuid;

    fn money(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn truck(status: TruckStatus) -> Truck {
        Truck {
            id: Uuid::new_v4(),
            plate_number: Uuid::new_v4().to_string(),
            model: "Scania R450".to_string(),
            status,
            capacity: None,
            year: None,
            mileage: None,
            meta: RecordMeta::new(),
        }
    }

    fn driver(status: DriverStatus) -> Driver {
        Driver {
            id: Uuid::new_v4(),
            first_name: "Ana".to_string(),
            last_name: "Gil".to_string(),
            license_number: Uuid::new_v4().to_string(),
            license_expiry: None,
            phone: None,
            email: None,
            assigned_truck_id: None,
            status,
            meta: RecordMeta::new(),
        }
    }

    fn trip(status: TripStatus) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            origin: "Bilbao".to_string(),
            destination: "Sevilla".to_string(),
            start_date: None,
            end_date: None,
            driver_id: None,
            truck_id: None,
            status,
            distance: None,
            client_name: None,
            meta: RecordMeta::new(),
        }
    }

    fn fuel(cost: i64) -> FuelRecord {
        FuelRecord {
            id: Uuid::new_v4(),
            truck_id: Uuid::new_v4(),
            trip_id: None,
            amount: 100.0,
            cost: money(cost),
            date: Utc::now(),
            station: None,
            odometer_reading: None,
            meta: RecordMeta::new(),
        }
    }

    fn maintenance(cost: i64) -> MaintenanceRecord {
        MaintenanceRecord {
            id: Uuid::new_v4(),
            truck_id: Uuid::new_v4(),
            maintenance_type: MaintenanceType::Repair,
            description: None,
            cost: money(cost),
            date: Utc::now(),
            next_due_date: None,
            vendor: None,
            meta: RecordMeta::new(),
        }
    }

    fn expense(amount: i64) -> TripExpense {
        TripExpense {
            id: Uuid::new_v4(),
            trip_id: Uuid::new_v4(),
            expense_type: ExpenseType::Toll,
            description: None,
            amount: money(amount),
            date: Utc::now(),
            meta: RecordMeta::new(),
        }
    }

    fn income(amount: i64, payment_status: PaymentStatus) -> TripIncome {
        TripIncome {
            id: Uuid::new_v4(),
            trip_id: Uuid::new_v4(),
            client_name: None,
            amount: money(amount),
            payment_status,
            due_date: None,
            paid_date: None,
            meta: RecordMeta::new(),
        }
    }

    #[test]
    fn test_empty_fleet_is_all_zeros() {
        let stats = compute_dashboard_stats(FleetSnapshot::default()).unwrap();
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert_eq!(stats.total_expenses, Decimal::ZERO);
        assert_eq!(stats.net_profit, Decimal::ZERO);
        assert_eq!(stats.pending_payments, Decimal::ZERO);
        assert_eq!(stats.active_trips, 0);
        assert_eq!(stats.active_trucks, 0);
        assert_eq!(stats.available_drivers, 0);
    }

    #[test]
    fn test_expenses_sum_three_sources() {
        let fuel_records = [fuel(300), fuel(200)];
        let maintenance_records = [maintenance(1000)];
        let trip_expenses = [expense(50), expense(25)];
        let trip_incomes = [
            income(2000, PaymentStatus::Paid),
            income(500, PaymentStatus::Pending),
            income(700, PaymentStatus::Overdue),
        ];

        let stats = compute_dashboard_stats(FleetSnapshot {
            fuel_records: &fuel_records,
            maintenance_records: &maintenance_records,
            trip_expenses: &trip_expenses,
            trip_incomes: &trip_incomes,
            ..FleetSnapshot::default()
        })
        .unwrap();

        assert_eq!(stats.total_revenue, money(3200));
        assert_eq!(stats.total_expenses, money(1575));
        assert_eq!(stats.net_profit, money(1625));
        assert_eq!(stats.pending_payments, money(500));
    }

    #[test]
    fn test_net_profit_can_be_negative() {
        let fuel_records = [fuel(900)];
        let trip_incomes = [income(100, PaymentStatus::Paid)];
        let stats = compute_dashboard_stats(FleetSnapshot {
            fuel_records: &fuel_records,
            trip_incomes: &trip_incomes,
            ..FleetSnapshot::default()
        })
        .unwrap();
        assert_eq!(stats.net_profit, money(-800));
    }

    #[test]
    fn test_status_counts() {
        let trucks = [
            truck(TruckStatus::Active),
            truck(TruckStatus::Active),
            truck(TruckStatus::Maintenance),
        ];
        let drivers = [
            driver(DriverStatus::Available),
            driver(DriverStatus::OnTrip),
            driver(DriverStatus::OffDuty),
        ];
        let trips = [
            trip(TripStatus::InProgress),
            trip(TripStatus::Scheduled),
            trip(TripStatus::Completed),
            trip(TripStatus::InProgress),
        ];

        let stats = compute_dashboard_stats(FleetSnapshot {
            trucks: &trucks,
            drivers: &drivers,
            trips: &trips,
            ..FleetSnapshot::default()
        })
        .unwrap();

        assert_eq!(stats.active_trucks, 2);
        assert_eq!(stats.available_drivers, 1);
        assert_eq!(stats.active_trips, 2);
    }

    #[test]
    fn test_overflowing_totals_are_an_error() {
        let mut huge = income(0, PaymentStatus::Paid);
        huge.amount = Decimal::MAX;
        let trip_incomes = [huge.clone(), huge];

        let err = compute_dashboard_stats(FleetSnapshot {
            trip_incomes: &trip_incomes,
            ..FleetSnapshot::default()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_overflowing_expense_sources_are_an_error() {
        let mut fuel_record = fuel(0);
        fuel_record.cost = Decimal::MAX;
        let mut repair = maintenance(0);
        repair.cost = Decimal::MAX;
        let fuel_records = [fuel_record];
        let maintenance_records = [repair];

        let err = compute_dashboard_stats(FleetSnapshot {
            fuel_records: &fuel_records,
            maintenance_records: &maintenance_records,
            ..FleetSnapshot::default()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_service_ignores_deleted_records() {
        let store = FleetStore::in_memory();
        let kept = store.trip_incomes.insert(income(500, PaymentStatus::Pending)).await.unwrap();
        let removed = store.trip_incomes.insert(income(250, PaymentStatus::Pending)).await.unwrap();
        store.trip_incomes.soft_delete(removed.id).await.unwrap();
        store.trucks.insert(truck(TruckStatus::Active)).await.unwrap();

        let stats = DashboardService::new(&store).stats().await.unwrap();

        assert_eq!(stats.total_revenue, kept.amount);
        assert_eq!(stats.pending_payments, money(500));
        assert_eq!(stats.active_trucks, 1);
    }
}
