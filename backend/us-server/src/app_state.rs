use us_core::UserController;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub controller: UserController,
}

impl AppState {
    pub fn new(controller: UserController) -> Self {
        Self { controller }
    }
}
