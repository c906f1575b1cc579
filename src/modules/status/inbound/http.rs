// Liveness endpoints. Neither probes anything; both answer 200 whenever the
// process is serving.

pub const HOME_MESSAGE: &str = "Aplicação em execução!\n";
pub const HEALTH_CHECK_MESSAGE: &str = "Aplicação Funcionando...\n";

pub async fn home() -> &'static str {
    HOME_MESSAGE
}

pub async fn health_check() -> &'static str {
    tracing::info!("health check endpoint called");
    HEALTH_CHECK_MESSAGE
}
