use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, info, warn};

// 从 lib.rs 导入模块
use assignment_tracker::config::AppConfig;
use assignment_tracker::runtime::lifetime;

fn main() {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting {}...
        Project: {}
        Version: {}
        Authors: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = match lifetime::startup::prepare_store(config) {
        Ok(startup) => startup,
        Err(e) => {
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            error!("Failed to prepare store: {}", e);
            std::process::exit(1);
        }
    };
    let store = startup.store;

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    if startup.seeded {
        info!("Seed users written to a fresh store");
    }

    match store.get_current_user() {
        Some(user) => info!("Current session: {} ({})", user.name, user.role),
        None => info!("No active session"),
    }

    let overview = store.get_dashboard_overview();
    info!(
        "Assignments: {}, students: {}, submissions: {}/{} ({}%)",
        overview.assignments,
        overview.students,
        overview.total_submissions,
        overview.total_possible,
        overview.submission_rate
    );
}
