//! Cálculo de coste del alquiler
//!
//! Precio orientativo mostrado en el asistente: tarifa diaria por días
//! completos más los extras elegidos, cada uno con recargo fijo por
//! día. El depósito va aparte y nunca entra en la multiplicación por
//! días. El precio vinculante lo calcula el servicio remoto.

use rust_decimal::Decimal;

use crate::models::Car;

/// Recargo diario del navegador GPS
pub const GPS_SURCHARGE_PER_DAY: i64 = 5;
/// Recargo diario de la silla infantil
pub const CHILD_SEAT_SURCHARGE_PER_DAY: i64 = 8;
/// Recargo diario del seguro a todo riesgo
pub const FULL_INSURANCE_SURCHARGE_PER_DAY: i64 = 25;

/// Extras opcionales del alquiler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RentalExtras {
    pub gps: bool,
    pub child_seat: bool,
    pub full_insurance: bool,
}

impl RentalExtras {
    /// Suma de recargos por día de los extras elegidos
    pub fn surcharge_per_day(&self) -> Decimal {
        let mut surcharge = 0;
        if self.gps {
            surcharge += GPS_SURCHARGE_PER_DAY;
        }
        if self.child_seat {
            surcharge += CHILD_SEAT_SURCHARGE_PER_DAY;
        }
        if self.full_insurance {
            surcharge += FULL_INSURANCE_SURCHARGE_PER_DAY;
        }
        Decimal::from(surcharge)
    }

    /// Etiquetas de los extras elegidos, para el resumen y las
    /// peticiones especiales
    pub fn selected_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.gps {
            labels.push("GPS");
        }
        if self.child_seat {
            labels.push("Detská sedačka");
        }
        if self.full_insurance {
            labels.push("Plné poistenie");
        }
        labels
    }
}

/// Presupuesto del alquiler para el resumen del paso 3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalQuote {
    pub days: i64,
    /// Tarifa diaria por días
    pub base_cost: Decimal,
    /// Recargos de extras por días
    pub extras_cost: Decimal,
    /// base + extras, antes del depósito
    pub rental_cost: Decimal,
    pub deposit: Decimal,
    pub total_cost: Decimal,
}

/// Calcular el presupuesto para un vehículo, un número de días y los
/// extras elegidos
pub fn rental_quote(car: &Car, days: i64, extras: RentalExtras) -> RentalQuote {
    let days_decimal = Decimal::from(days);
    let base_cost = car.daily_rate * days_decimal;
    let extras_cost = extras.surcharge_per_day() * days_decimal;
    let rental_cost = base_cost + extras_cost;

    RentalQuote {
        days,
        base_cost,
        extras_cost,
        rental_cost,
        deposit: car.deposit,
        total_cost: rental_cost + car.deposit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(rate: i64, deposit: i64) -> Car {
        serde_json::from_value(serde_json::json!({
            "_id": "car-1",
            "brand": "Škoda",
            "model": "Fabia",
            "dailyRate": rate,
            "deposit": deposit
        }))
        .unwrap()
    }

    #[test]
    fn test_quote_without_extras() {
        let quote = rental_quote(&car(50, 200), 3, RentalExtras::default());
        assert_eq!(quote.rental_cost, Decimal::from(150));
        assert_eq!(quote.total_cost, Decimal::from(350));
    }

    #[test]
    fn test_quote_with_one_extra() {
        // Tarifa 50, 3 días, un extra de 5/día: 50*3 + 5*3 = 165
        let extras = RentalExtras {
            gps: true,
            ..Default::default()
        };
        let quote = rental_quote(&car(50, 0), 3, extras);
        assert_eq!(quote.rental_cost, Decimal::from(165));
    }

    #[test]
    fn test_quote_with_all_extras() {
        let extras = RentalExtras {
            gps: true,
            child_seat: true,
            full_insurance: true,
        };
        let quote = rental_quote(&car(40, 100), 2, extras);
        // 40*2 + (5+8+25)*2 = 80 + 76 = 156
        assert_eq!(quote.base_cost, Decimal::from(80));
        assert_eq!(quote.extras_cost, Decimal::from(76));
        assert_eq!(quote.rental_cost, Decimal::from(156));
        assert_eq!(quote.total_cost, Decimal::from(256));
    }

    #[test]
    fn test_deposit_is_never_multiplied_by_days() {
        let quote = rental_quote(&car(50, 200), 7, RentalExtras::default());
        assert_eq!(quote.deposit, Decimal::from(200));
        assert_eq!(quote.total_cost, Decimal::from(350 + 200));
    }

    #[test]
    fn test_selected_labels() {
        let extras = RentalExtras {
            gps: true,
            full_insurance: true,
            ..Default::default()
        };
        assert_eq!(extras.selected_labels(), vec!["GPS", "Plné poistenie"]);
    }
}
