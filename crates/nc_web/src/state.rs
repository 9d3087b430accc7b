use nc_extract::Pipeline;

pub struct AppState {
    pub pipeline: Pipeline,
}
