use rust_decimal::Decimal;
use serde::Serialize;

// Resumen del panel de control
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
    pub active_trips: u64,
    pub active_trucks: u64,
    pub available_drivers: u64,
    pub pending_payments: Decimal,
}
