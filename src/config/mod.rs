mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    CONFIG_VERSION, Config, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, ExportConfig, RenderConfig,
    TableConfig,
};
pub use validation::validate_config_semantics;
