//! Demostración del cliente: lista la flota del operador, carga la
//! disponibilidad de cada vehículo en paralelo y muestra qué vehículos
//! quedan libres para un fin de semana próximo.

use anyhow::Result;
use chrono::{Days, Utc};
use dotenvy::dotenv;
use tracing::{error, info};

use carflow_client::availability::count_unavailable_days;
use carflow_client::config::EnvironmentConfig;
use carflow_client::services::{
    build_fleet_view, load_fleet_availability, CarflowApiClient, FleetFilters, RentalApi,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 CarFlow - Cliente del sistema de reservas");
    info!("============================================");

    let config = EnvironmentConfig::default();
    info!("🌐 Servicio remoto: {}", config.api_base_url);

    let api = match CarflowApiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Error creando el cliente HTTP: {}", e);
            return Err(anyhow::anyhow!("Error de cliente HTTP: {}", e));
        }
    };

    let cars = api.list_cars(None).await?;
    info!("🚗 Flota del operador: {} vehículos", cars.len());

    let today = Utc::now().date_naive();
    let availability = load_fleet_availability(&api, &cars, today).await;

    for car in &cars {
        if let Some(unavailable) = availability.get(&car.id) {
            let busy = count_unavailable_days(unavailable, today);
            info!(
                "  {} - {} €/día, {} días ocupados en los próximos 30",
                car.display_name(),
                car.daily_rate,
                busy
            );
        }
    }

    // Vehículos libres para un fin de semana dentro de dos semanas
    let pickup = today + Days::new(14);
    let return_date = pickup + Days::new(2);
    let filters = FleetFilters {
        date_range: Some((pickup, return_date)),
        ..Default::default()
    };
    let free = build_fleet_view(&cars, &availability, &filters);
    info!(
        "✅ {} vehículos libres del {} al {}",
        free.len(),
        pickup,
        return_date
    );

    Ok(())
}
