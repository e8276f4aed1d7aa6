use rstest::fixture;
use tracing::info;

mod test_app;
pub use self::test_app::*;

#[allow(
    dead_code,
    deprecated,
    missing_docs,
    clippy::pedantic,
    clippy::too_many_arguments
)]
mod generated;
pub use self::generated::*;

pub fn init_tracing() {
    // a second init fails, ignored
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("tracing ready");
}

#[fixture]
pub async fn app() -> TestApp {
    init_tracing();
    match TestApp::start().await {
        Ok(app) => app,
        Err(error) => {
            panic!("test server did not start: {error:?}");
        }
    }
}
