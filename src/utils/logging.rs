use tracing::Level;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, Registry};

/// Level for this crate's own events. Unrecognised values mean `info`.
pub fn parse_level(log_level: &str) -> Level {
    log_level.trim().parse::<Level>().unwrap_or(Level::INFO)
}

/// Resolver events at `level`; request/response tracing from tower-http stays
/// visible regardless so degraded upstream calls can be tied to a request.
pub fn dashboard_targets(level: Level) -> Targets {
    Targets::new()
        .with_target("tower_http::trace", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::WARN)
}

pub fn init_tracing(log_level: &str) {
    Registry::default()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(dashboard_targets(parse_level(log_level)))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level(" error "), Level::ERROR);
    }

    #[test]
    fn unknown_level_defaults_to_info() {
        assert_eq!(parse_level("verbose"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn crate_target_follows_configured_level() {
        let targets = dashboard_targets(Level::ERROR);
        assert!(targets.would_enable(env!("CARGO_CRATE_NAME"), &Level::ERROR));
        assert!(!targets.would_enable(
            concat!(env!("CARGO_CRATE_NAME"), "::services::next_race"),
            &Level::INFO
        ));
        assert!(targets.would_enable("tower_http::trace::on_request", &Level::DEBUG));
        assert!(!targets.would_enable("hyper::proto", &Level::INFO));
        assert_eq!(
            dashboard_targets(Level::TRACE).default_level(),
            Some(LevelFilter::WARN)
        );
    }
}
