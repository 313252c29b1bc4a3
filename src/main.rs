mod cli;
pub mod config;
pub mod crawler;
pub mod declare;
pub mod error;
pub mod logging;
pub mod report;
pub mod util;

use std::{
    io::{self, Write},
    process::ExitCode,
    time::Duration,
};

use anyhow::{Context, Result};

use crate::{
    cli::Cli,
    config::{App, SETTINGS},
    crawler::tgju,
    declare::Currency,
    util::spinner::Spinner,
};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli.targets, &SETTINGS, &mut io::stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            tracing::error!("{:#}", why);
            ExitCode::FAILURE
        }
    }
}

/// Fetches the quote page once and prints one row per target to `out`.
///
/// A fetch failure is returned before anything is written. Failures for
/// individual currencies end up in their rows instead.
async fn run<W: Write>(targets: &[Currency], settings: &App, out: &mut W) -> Result<()> {
    let labels: Vec<&str> = targets.iter().map(|c| c.label()).collect();
    tracing::debug!("開始 fetch {:?}", labels);

    let document = {
        // 不論成功或失敗，離開這個區塊時 spinner 一定會停止並清掉該行
        let _spinner = scopeguard::guard(
            Spinner::start(
                "Fetching data...",
                Duration::from_millis(settings.spinner.interval_millis),
                settings.spinner.enabled,
            ),
            |spinner| spinner.stop(),
        );

        tgju::visit(
            &settings.source.url,
            Duration::from_secs(settings.source.timeout_secs),
        )
        .await
    }
    .context("Failed to fetch data")?;

    let results = report::process_targets(&document, targets);
    report::write_results(out, &results).context("Failed to write the price table")?;

    tracing::debug!("結束 fetch {:?}", labels);
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::Html, routing::get, Router};

    use super::*;

    const PAGE: &str = r#"
        <html><body><table>
            <tr data-market-nameslug="price_dollar_rl" data-price="1,234,500"><td>USD</td></tr>
            <tr data-market-nameslug="price_eur" data-price="1,400,000"><td>EUR</td></tr>
            <tr data-market-nameslug="sekee" data-price="1,000,000,000"><td>COIN</td></tr>
            <tr data-market-nameslug="crypto-tether" data-price="1,100,000"><td>USDT</td></tr>
        </table></body></html>"#;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{}/", addr)
    }

    fn settings(url: String) -> App {
        let mut app = App::default();
        app.source.url = url;
        app.source.timeout_secs = 5;
        app.spinner.enabled = false;
        app
    }

    #[tokio::test]
    async fn test_run_prints_all_targets() {
        let url = serve(Router::new().route("/", get(|| async { Html(PAGE) }))).await;
        let targets: Vec<Currency> = Currency::iterator().collect();
        let mut out = Vec::new();

        run(&targets, &settings(url), &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "USD         123,450\n\
             EUR         140,000\n\
             GOLD/COIN   100,000,000\n\
             TETHER      110,000\n"
        );
    }

    #[tokio::test]
    async fn test_run_prints_requested_targets_only() {
        let url = serve(Router::new().route("/", get(|| async { Html(PAGE) }))).await;
        let cli = Cli::try_parse_from(["toman", "-usd", "-tether"]).unwrap();
        let mut out = Vec::new();

        run(&cli.targets, &settings(url), &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "USD      123,450\n\
             TETHER   110,000\n"
        );
    }

    #[tokio::test]
    async fn test_run_fetch_failure_prints_nothing() {
        let url = serve(Router::new().route(
            "/",
            get(|| async { (StatusCode::FORBIDDEN, "blocked") }),
        ))
        .await;
        let targets: Vec<Currency> = Currency::iterator().collect();
        let mut out = Vec::new();

        let why = run(&targets, &settings(url), &mut out).await.unwrap_err();

        assert_eq!(
            format!("{:#}", why),
            "Failed to fetch data: unexpected status: 403 Forbidden"
        );
        assert!(out.is_empty());
    }
}
