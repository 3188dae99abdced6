//! Command implementations.

pub mod classify;
pub mod config;
pub mod eval;
pub mod grade;
pub mod run;
pub mod score;

pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::eval::execute_eval;
pub use self::grade::execute_grade;
pub use self::run::execute_run;
pub use self::score::execute_score;
