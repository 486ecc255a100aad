use std::{collections::HashMap, time::Duration};

use color_eyre::eyre::{eyre, Result, WrapErr};
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{trace::Config, Resource};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{prelude::*, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

/// Status lines go to stderr so stdout stays free for command output.
pub fn setup_sentry() -> Option<sentry::ClientInitGuard> {
    let Ok(dsn) = std::env::var("SENTRY_DSN") else {
        eprintln!("Sentry not configured");

        return None;
    };

    eprintln!("Sentry enabled");

    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            traces_sample_rate: 0.5,
            ..Default::default()
        },
    )))
}

pub fn setup_tracing(crate_name: &str) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| format!("warn,{crate_name}=trace,tower_http=debug"));

    let env_filter = EnvFilter::builder()
        .parse(&rust_log)
        .wrap_err_with(|| eyre!("Couldn't create env filter from {}", rust_log))?;

    let opentelemetry_layer = if let Ok(honeycomb_key) = std::env::var("HONEYCOMB_API_KEY") {
        let mut map = HashMap::<String, String>::new();
        map.insert("x-honeycomb-team".to_string(), honeycomb_key);
        map.insert("x-honeycomb-dataset".to_string(), crate_name.to_string());

        let tracer = opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(
                opentelemetry_otlp::new_exporter()
                    .http()
                    .with_endpoint("https://api.honeycomb.io/v1/traces")
                    .with_timeout(Duration::from_secs(3))
                    .with_headers(map),
            )
            .with_trace_config(Config::default().with_resource(Resource::new(vec![
                KeyValue::new("service.name", crate_name.to_string()),
            ])))
            .install_batch(opentelemetry_sdk::runtime::Tokio)
            .wrap_err("Couldn't install the Honeycomb exporter")?;

        let opentelemetry_layer = OpenTelemetryLayer::new(tracer);
        eprintln!("Honeycomb layer configured");

        Some(opentelemetry_layer)
    } else {
        eprintln!("Skipping Honeycomb layer");

        None
    };

    let heirarchical = HierarchicalLayer::default()
        .with_writer(std::io::stdout)
        .with_indent_lines(true)
        .with_indent_amount(2)
        .with_thread_names(true)
        .with_thread_ids(true)
        .with_verbose_exit(true)
        .with_verbose_entry(true)
        .with_targets(true);

    Registry::default()
        .with(heirarchical)
        .with(opentelemetry_layer)
        .with(sentry_tracing::layer())
        .with(env_filter)
        .try_init()
        .wrap_err("Couldn't install the tracing subscriber")?;

    Ok(())
}
