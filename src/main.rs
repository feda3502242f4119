extern crate clap;
extern crate tokio;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{event, span, Level};
use tracing_subscriber::{fmt::format::FmtSpan, filter, prelude::*};

use wikipath_base::SupportedLang;
use wikipath_engine::{HttpTransport, WikiTransport};

mod arg;
mod config;
mod facade;
mod output;

/// One cheap `meta=siteinfo` call per supported language, fired
/// concurrently at startup, to prime the shared client's connection pool
/// before the first real search pays for the handshake (optional
/// warm-up).
async fn warm_up(transport: &Arc<dyn WikiTransport>) {
    let pings = SupportedLang::ALL.iter().map(|&lang| {
        let transport = transport.clone();
        async move {
            let mut params = HashMap::new();
            params.insert("action".to_string(), "query".to_string());
            params.insert("meta".to_string(), "siteinfo".to_string());
            params.insert("format".to_string(), "json".to_string());
            let base = format!("https://{}.wikipedia.org/w/api.php", lang.code());
            let _ = transport.get(&base, &params, Duration::from_secs(2)).await;
        }
    });
    futures::future::join_all(pings).await;
}

async fn run_once(transport: Arc<dyn WikiTransport>, cfg: config::Config, from: &str, to: &str, lang: Option<SupportedLang>) {
    let lang = lang.unwrap_or(cfg.default_lang);
    let outcome = wikipath_engine::search(transport, from, to, lang, cfg.profile).await;

    if outcome.found() {
        print!("{}", output::render_path(&outcome));
        std::process::exit(0);
    } else {
        println!("no path found between \"{from}\" and \"{to}\" ({} requests)", outcome.request_count);
        std::process::exit(1);
    }
}

async fn serve(transport: Arc<dyn WikiTransport>, cfg: config::Config) {
    let addr: SocketAddr = format!("{}:{}", cfg.host, cfg.port).parse().expect("invalid host/port in configuration");
    let state = facade::AppState { transport, profile: cfg.profile, default_lang: cfg.default_lang };
    let app = facade::app_router(state);

    event!(Level::INFO, %addr, "starting HTTP façade");
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    let graceful = server.with_graceful_shutdown(async {
        let _ = tokio::signal::ctrl_c().await;
        event!(Level::INFO, "ctrl-c detected, shutting down");
    });
    if let Err(e) = graceful.await {
        event!(Level::ERROR, error = %e, "HTTP façade exited with an error");
    }
}

/// Parses arguments, loads configuration, wires up the shared HTTP
/// transport, and either runs one search and prints the result or (with
/// `--serve`) hands control to the REST façade.
#[tokio::main]
async fn main() {
    let args = arg::build_argparse().get_matches();

    let file_appender = tracing_appender::rolling::daily("logs", "wikipath.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_span_events(FmtSpan::NONE)
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();

    let cfg = config::load(args.value_of("config"));

    let transport: Arc<dyn WikiTransport> = span!(target: "main", Level::INFO, "bootstrap").in_scope(|| {
        event!(Level::INFO, "building shared HTTP transport");
        match HttpTransport::new(&cfg.user_agent) {
            Ok(t) => Arc::new(t),
            Err(e) => {
                event!(Level::ERROR, error = %e, "failed to build HTTP client");
                eprintln!("failed to build HTTP client: {e}");
                std::process::exit(1);
            }
        }
    });

    if !args.is_present("no-warmup") {
        warm_up(&transport).await;
    }

    if args.is_present("serve") {
        serve(transport, cfg).await;
    } else {
        let from = args.value_of("from").expect("\"from\" is required outside --serve");
        let to = args.value_of("to").expect("\"to\" is required outside --serve");
        let lang = match args.value_of("lang") {
            Some(raw) => match raw.parse::<SupportedLang>() {
                Ok(l) => Some(l),
                Err(e) => {
                    eprintln!("invalid language \"{raw}\": {e}");
                    std::process::exit(1);
                }
            },
            None => None,
        };
        run_once(transport, cfg, from, to, lang).await;
    }
}
