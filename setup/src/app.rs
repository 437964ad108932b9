use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Error};

use pixfit_application::{TransformImageUseCase, TransformImageUseCaseImpl};
use pixfit_configuration::{AppConfig, ServerConfig};
use pixfit_domain::{ImageFetchPort, ImageTransformPort};
use pixfit_http_server::{create_app_routes, AppState};
use pixfit_infra_fetch::{FetchAdapterConfig, HttpImageFetchAdapter};
use pixfit_infra_image::ImageTransformAdapter;

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config).await?;
    app.run(server_config).await
}

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    /// Wire every adapter before the listener is bound; a request can only
    /// arrive once the whole pipeline is ready.
    pub async fn new(config: AppConfig) -> Result<Self, Error> {
        tracing::info!(
            max_dimension = config.service.limits.max_dimension,
            fetch_timeout_secs = config.service.fetch.request_timeout_secs,
            max_input_bytes = config.service.fetch.max_input_bytes,
            "initializing image transform application"
        );

        let fetcher: Arc<dyn ImageFetchPort> =
            Arc::new(HttpImageFetchAdapter::new(FetchAdapterConfig {
                request_timeout: Duration::from_secs(config.service.fetch.request_timeout_secs),
                max_input_bytes: config.service.fetch.max_input_bytes,
            })?);
        let transformer: Arc<dyn ImageTransformPort> = Arc::new(ImageTransformAdapter::new());
        let usecase: Arc<dyn TransformImageUseCase> = Arc::new(TransformImageUseCaseImpl::new(
            fetcher,
            transformer,
            config.service.limits.max_dimension,
        ));
        let state = AppState::new(usecase);

        Ok(Self { config, state })
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        tracing::info!(
            host = %server_config.host,
            port = server_config.port,
            "starting image transform HTTP server"
        );

        create_app_routes(self.state, server_config)
            .await
            .map_err(|err| anyhow!("http server failed: {err}"))
    }
}
