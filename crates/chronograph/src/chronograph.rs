pub struct Chronograph {}

static CHRONOGRAPH_STATIC: std::sync::OnceLock<ChronographStatic> = std::sync::OnceLock::new();

struct ChronographStatic {}

impl ChronographStatic {
    fn init(app_name: &str) -> &'static Self {
        CHRONOGRAPH_STATIC.get_or_init(|| {
            env_logger::builder()
                .filter_level(log::LevelFilter::Info)
                .parse_default_env()
                .init();

            log::debug!("Logging initialized by {}.", app_name);

            Self {}
        })
    }
}

impl Chronograph {
    /// Sets up process wide state such as logging, safe to call more than once.
    pub fn new(app_name: &str) -> Self {
        ChronographStatic::init(app_name);

        Self {}
    }
}
