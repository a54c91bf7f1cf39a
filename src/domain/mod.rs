pub mod watchlist;

/// Centralized logging system for the entire application
pub mod logging {
    use std::fmt::Display;

    /// Log levels for structured logging
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum LogLevel {
        Debug = 0,
        Info = 1,
        Warn = 2,
        Error = 3,
    }

    impl Display for LogLevel {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                LogLevel::Debug => write!(f, "DEBUG"),
                LogLevel::Info => write!(f, "INFO"),
                LogLevel::Warn => write!(f, "WARN"),
                LogLevel::Error => write!(f, "ERROR"),
            }
        }
    }

    /// Component/Layer identification for logging
    #[derive(Debug, Clone)]
    pub enum LogComponent {
        Domain(&'static str),         // e.g., "Watchlist", "Sort"
        Application(&'static str),    // e.g., "Coordinator", "LoadStocks"
        Infrastructure(&'static str), // e.g., "MockService"
        Presentation(&'static str),   // e.g., "WatchlistApi", "App"
    }

    impl Display for LogComponent {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                LogComponent::Domain(name) => write!(f, "🏛️ Domain::{}", name),
                LogComponent::Application(name) => write!(f, "🎯 Application::{}", name),
                LogComponent::Infrastructure(name) => write!(f, "🔧 Infrastructure::{}", name),
                LogComponent::Presentation(name) => write!(f, "🌐 Presentation::{}", name),
            }
        }
    }

    /// Structured log entry
    #[derive(Debug, Clone)]
    pub struct LogEntry {
        pub timestamp: u64,
        pub level: LogLevel,
        pub component: LogComponent,
        pub message: String,
    }

    impl LogEntry {
        pub fn new(level: LogLevel, component: LogComponent, message: String) -> Self {
            Self { timestamp: now_millis(), level, component, message }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn now_millis() -> u64 {
        js_sys::Date::now() as u64
    }

    // Entries are also constructed from native test binaries, where the
    // browser clock is unavailable.
    #[cfg(not(target_arch = "wasm32"))]
    fn now_millis() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
    }

    /// Centralized logger trait
    pub trait Logger: Send + Sync {
        fn log(&self, entry: LogEntry);

        fn debug(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Debug, component, message.to_string()));
        }

        fn info(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Info, component, message.to_string()));
        }

        fn warn(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Warn, component, message.to_string()));
        }

        fn error(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Error, component, message.to_string()));
        }
    }

    /// Console logger implementation for the WASM environment
    pub struct ConsoleLogger {
        min_level: LogLevel,
    }

    impl ConsoleLogger {
        pub fn new(min_level: LogLevel) -> Self {
            Self { min_level }
        }

        pub fn new_production() -> Self {
            Self::new(LogLevel::Info)
        }

        pub fn new_development() -> Self {
            Self::new(LogLevel::Debug)
        }

        fn format_log_entry(&self, entry: &LogEntry) -> String {
            let date = js_sys::Date::new(&(entry.timestamp as f64).into());
            format!(
                "[{:02}:{:02}:{:02}.{:03}] {} {} | {}",
                date.get_hours(),
                date.get_minutes(),
                date.get_seconds(),
                date.get_milliseconds(),
                entry.level,
                entry.component,
                entry.message
            )
        }
    }

    impl Logger for ConsoleLogger {
        fn log(&self, entry: LogEntry) {
            if entry.level < self.min_level {
                return;
            }
            let formatted = self.format_log_entry(&entry);
            match entry.level {
                LogLevel::Debug => web_sys::console::debug_1(&formatted.into()),
                LogLevel::Info => web_sys::console::info_1(&formatted.into()),
                LogLevel::Warn => web_sys::console::warn_1(&formatted.into()),
                LogLevel::Error => web_sys::console::error_1(&formatted.into()),
            }
        }
    }

    use std::sync::OnceLock;
    static GLOBAL_LOGGER: OnceLock<Box<dyn Logger + Sync + Send>> = OnceLock::new();

    /// Initialize global logger
    pub fn init_logger(logger: Box<dyn Logger + Sync + Send>) {
        let _ = GLOBAL_LOGGER.set(logger);
    }

    /// Get global logger reference
    pub fn get_logger() -> &'static dyn Logger {
        GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or_else(|| {
            static FALLBACK: NoOpLogger = NoOpLogger;
            &FALLBACK
        })
    }

    /// No-op logger for fallback
    struct NoOpLogger;

    impl Logger for NoOpLogger {
        fn log(&self, _entry: LogEntry) {}
    }

    /// Convenience macros for logging
    #[macro_export]
    macro_rules! log_debug {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_info {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_warn {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_error {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
        };
    }
}

/// Centralized error handling for the entire application
pub mod errors {
    use std::fmt::{Display, Formatter, Result as FmtResult};

    /// Root error type for the entire application
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum AppError {
        Fetch(FetchError),
        Intent(IntentError),
    }

    /// The single data-layer error kind: a failed fetch with a
    /// user-visible message, surfaced verbatim in the view state.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FetchError {
        message: String,
    }

    impl FetchError {
        pub fn new(message: impl Into<String>) -> Self {
            Self { message: message.into() }
        }

        pub fn message(&self) -> &str {
            &self.message
        }

        /// Consume the error and return the message for publication.
        pub fn into_message(self) -> String {
            self.message
        }
    }

    /// A UI intent carried a value the domain cannot parse
    /// (unknown filter/sort/section name at the WASM boundary).
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum IntentError {
        UnknownFilter(String),
        UnknownSortKey(String),
        UnknownSection(String),
    }

    impl Display for AppError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                AppError::Fetch(e) => write!(f, "Fetch Error: {}", e),
                AppError::Intent(e) => write!(f, "Intent Error: {}", e),
            }
        }
    }

    impl Display for FetchError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            write!(f, "{}", self.message)
        }
    }

    impl Display for IntentError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                IntentError::UnknownFilter(name) => write!(f, "Unknown category filter: {}", name),
                IntentError::UnknownSortKey(name) => write!(f, "Unknown sort key: {}", name),
                IntentError::UnknownSection(name) => write!(f, "Unknown section: {}", name),
            }
        }
    }

    impl From<FetchError> for AppError {
        fn from(error: FetchError) -> Self {
            AppError::Fetch(error)
        }
    }

    impl From<IntentError> for AppError {
        fn from(error: IntentError) -> Self {
            AppError::Intent(error)
        }
    }
}
