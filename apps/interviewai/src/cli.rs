//! # CLI Module
//!
//! Command-line interface for the InterviewAI site.
//!
//! ## Commands
//! - `serve`: run the HTTP server
//! - `render`: render one route through the router and print it
//! - `export`: write every page as static HTML, once per login state
//!
//! `render` and `export` drive the same router the server uses, so their
//! output is exactly what a browser would receive.

use std::convert::Infallible;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::header::{COOKIE, LOCATION};
use axum::http::{Method, Request};
use clap::{Args, Parser, Subcommand};
use interviewai_core::processing::{
    DEFAULT_REDIRECT_DELAY_MS, DEFAULT_STEP_DURATION_MS, MAX_TIMING_MS,
};
use interviewai_core::{Page, ProcessingTiming, Session, gate};
use tokio::net::TcpListener;
use tower::ServiceExt;
use tracing::{debug, info, warn};

use crate::config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use crate::error::AppError;
use crate::server::{AppState, create_router};
use crate::session;

/// Subdirectory of an export holding the logged-in pages.
pub const MEMBER_DIR: &str = "member";

#[derive(Parser, Debug)]
#[command(name = "interviewai")]
#[command(author, version, about = "InterviewAI demo site: sample dashboards, analysis, and a simulated upload flow")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Render one route and print the HTML (or the redirect target)
    Render {
        /// Route path, e.g. /dashboard
        path: String,

        /// Render as a logged-in visitor
        #[arg(long)]
        logged_in: bool,
    },

    /// Write a snapshot of every page as static .html files
    ///
    /// Links inside the files still point at server routes, so the output is
    /// a set of page snapshots rather than a browsable offline site.
    Export {
        /// Output directory
        #[arg(long)]
        out: PathBuf,

        /// Write into a non-empty directory
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    // =========================================================================
    // Network
    // =========================================================================
    /// Address to listen on
    #[arg(long, env = "INTERVIEWAI_HOST", default_value = DEFAULT_HOST, help_heading = "Network")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "INTERVIEWAI_PORT", default_value_t = DEFAULT_PORT, help_heading = "Network")]
    pub port: u16,

    // =========================================================================
    // Processing animation
    // =========================================================================
    /// Time spent on each processing step, in milliseconds (1 to 60000)
    #[arg(
        long,
        default_value_t = DEFAULT_STEP_DURATION_MS,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TIMING_MS),
        help_heading = "Processing"
    )]
    pub step_ms: u64,

    /// Pause between completion and the redirect, in milliseconds (0 to 60000)
    #[arg(
        long,
        default_value_t = DEFAULT_REDIRECT_DELAY_MS,
        value_parser = clap::value_parser!(u64).range(..=MAX_TIMING_MS),
        help_heading = "Processing"
    )]
    pub redirect_delay_ms: u64,
}

impl ServeArgs {
    /// Build the server configuration from these flags.
    #[must_use]
    pub fn to_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            timing: ProcessingTiming::new(self.step_ms, self.redirect_delay_ms),
        }
    }
}

/// Result of rendering one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedPage {
    /// The page body.
    Html(String),
    /// The gate sent the visitor here instead.
    Redirect(String),
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args.to_config()).await,
        Command::Render { path, logged_in } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            cmd_render(&path, logged_in, &mut out).await
        }
        Command::Export { out, force } => {
            let written = cmd_export(&out, force).await?;
            println!("Exported {} pages to {}", written.len(), out.display());
            Ok(())
        }
    }
}

// =============================================================================
// SERVE
// =============================================================================

/// Bind and serve until Ctrl+C.
pub async fn cmd_serve(config: ServerConfig) -> Result<(), AppError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        addr = %addr,
        step_ms = config.timing.step_duration_ms,
        redirect_delay_ms = config.timing.redirect_delay_ms,
        "InterviewAI listening"
    );

    let app = create_router(AppState::new(config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "failed to install Ctrl+C handler, running until killed");
            std::future::pending::<()>().await;
        }
    }
}

// =============================================================================
// RENDER
// =============================================================================

/// Send a GET for `path` through `router` as `session`.
pub async fn render_route(
    router: &Router,
    path: &str,
    session: Session,
) -> Result<RenderedPage, AppError> {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if session.logged_in {
        builder = builder.header(COOKIE, session::cookie_pair(&session)?);
    }
    let request = builder
        .body(Body::empty())
        .map_err(|e| AppError::Render(format!("invalid request for {path}: {e}")))?;

    let response = router
        .clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|never: Infallible| match never {});
    let status = response.status();

    if status.is_redirection() {
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Render(format!("{path} redirected without a location")))?;
        return Ok(RenderedPage::Redirect(location.to_string()));
    }

    if !status.is_success() {
        return Err(AppError::Render(format!("{path} returned {status}")));
    }

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|e| AppError::Render(e.to_string()))?;
    let html = String::from_utf8(bytes.to_vec()).map_err(|e| AppError::Render(e.to_string()))?;
    Ok(RenderedPage::Html(html))
}

/// Render the page at `path` and write the result to `out`.
pub async fn cmd_render(path: &str, logged_in: bool, out: &mut impl Write) -> Result<(), AppError> {
    let page = Page::from_path(path)
        .ok_or_else(|| AppError::Render(format!("no page at {path}")))?;
    let router = create_router(AppState::new(ServerConfig::default()));
    let session = if logged_in {
        Session::member()
    } else {
        Session::guest()
    };

    match render_route(&router, page.path(), session).await? {
        RenderedPage::Html(html) => writeln!(out, "{html}")?,
        RenderedPage::Redirect(location) => writeln!(out, "redirect: {location}")?,
    }
    Ok(())
}

// =============================================================================
// EXPORT
// =============================================================================

/// Write every page both login states can see.
///
/// Guest pages go in `out`, logged-in pages in `out/member`. Pages the gate
/// redirects away from are skipped. Links are left as server routes. Returns
/// the written paths.
pub async fn cmd_export(out: &Path, force: bool) -> Result<Vec<PathBuf>, AppError> {
    if out.exists() && fs::read_dir(out)?.next().is_some() && !force {
        return Err(AppError::Export(format!(
            "{} is not empty (use --force to overwrite)",
            out.display()
        )));
    }

    let router = create_router(AppState::new(ServerConfig::default()));
    let mut written = Vec::new();

    for (session, dir) in [
        (Session::guest(), out.to_path_buf()),
        (Session::member(), out.join(MEMBER_DIR)),
    ] {
        fs::create_dir_all(&dir)?;
        for page in Page::ALL {
            if !gate(page, session).is_render() {
                debug!(page = %page, logged_in = session.logged_in, "skipped");
                continue;
            }
            match render_route(&router, page.path(), session).await? {
                RenderedPage::Html(html) => {
                    let path = dir.join(format!("{}.html", page.slug()));
                    fs::write(&path, html)?;
                    debug!(page = %page, file = %path.display(), "exported");
                    written.push(path);
                }
                RenderedPage::Redirect(location) => {
                    return Err(AppError::Export(format!(
                        "{page} redirected to {location} while exporting"
                    )));
                }
            }
        }
    }

    info!(pages = written.len(), out = %out.display(), "export complete");
    Ok(written)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_flags() {
        let cli = Cli::try_parse_from([
            "interviewai",
            "serve",
            "--port",
            "8080",
            "--step-ms",
            "10",
        ]);
        let Ok(Cli {
            command: Command::Serve(args),
        }) = cli
        else {
            unreachable!("serve should parse");
        };
        let config = args.to_config();
        assert_eq!(config.port, 8080);
        assert_eq!(config.timing.step_duration_ms, 10);
        assert_eq!(config.timing.redirect_delay_ms, DEFAULT_REDIRECT_DELAY_MS);
    }

    #[test]
    fn rejects_out_of_range_timing() {
        for flags in [
            ["--step-ms", "0"],
            ["--step-ms", "60001"],
            ["--redirect-delay-ms", "18446744073709551615"],
        ] {
            let mut argv = vec!["interviewai", "serve"];
            argv.extend(flags);
            assert!(Cli::try_parse_from(argv).is_err(), "{flags:?} should be rejected");
        }
        assert!(Cli::try_parse_from(["interviewai", "serve", "--step-ms", "60000"]).is_ok());
        assert!(Cli::try_parse_from(["interviewai", "serve", "--redirect-delay-ms", "0"]).is_ok());
    }

    #[test]
    fn parses_render_and_export() {
        assert!(matches!(
            Cli::try_parse_from(["interviewai", "render", "/dashboard", "--logged-in"]),
            Ok(Cli {
                command: Command::Render { logged_in: true, .. }
            })
        ));
        assert!(matches!(
            Cli::try_parse_from(["interviewai", "export", "--out", "site"]),
            Ok(Cli {
                command: Command::Export { force: false, .. }
            })
        ));
        assert!(Cli::try_parse_from(["interviewai", "export"]).is_err());
    }
}
