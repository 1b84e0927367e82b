use browser_core::Presenter;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) presenter: Presenter,
}
