use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(container, config.cors, &addr);
        tracing::info!(%addr, "cart api listening");
        tracing::info!("swagger ui at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

fn build_app(container: DependencyContainer, cors: Cors, addr: &str) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (
            container.health_api,
            container.cart_api,
            container.notification_api,
        ),
        "Cart API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", addr));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();
    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .with(cors)
        .with(Tracing)
}
