use std::sync::Arc;

use pixfit_application::TransformImageUseCase;

#[derive(Clone)]
pub struct AppState {
    pub usecase: Arc<dyn TransformImageUseCase>,
}

impl AppState {
    pub fn new(usecase: Arc<dyn TransformImageUseCase>) -> Self {
        Self { usecase }
    }
}
