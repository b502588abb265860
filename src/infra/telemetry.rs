use std::io;

use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Registry, fmt,
    fmt::format::FmtSpan,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

/// Environment variable holding filter directives, e.g. `tagwise=debug`.
pub const FILTER_ENV: &str = "TAGWISE_LOG";

/// Install the global tracing subscriber.
///
/// Events go to stderr so stdout carries command output only. At `debug`
/// and above, closing spans are logged with their timings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .with_env_var(FILTER_ENV)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(output_layer(logging))
        .with(env_filter)
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn span_events(level: LevelFilter) -> FmtSpan {
    if level >= LevelFilter::DEBUG {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

fn output_layer(logging: &LoggingSettings) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = fmt::layer()
        .with_target(true)
        .with_span_events(span_events(logging.level))
        .with_writer(io::stderr);

    match logging.format {
        LogFormat::Json => layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}
