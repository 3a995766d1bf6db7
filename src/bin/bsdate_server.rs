//! bsdate API server binary
//!
//! HTTP upload/download surface for the conversion pipeline.

use bsdate::api::{run_api_server, server::ApiConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bsdate-server")]
#[command(version)]
#[command(about = "bsdate API server - upload an .xlsx workbook, download the annotated copy")]
#[command(long_about = r#"
bsdate API server

Endpoints:
  - POST /api/v1/convert  - Multipart .xlsx upload; responds with the
                            converted workbook (BS_Date_converted.xlsx)
  - POST /api/v1/date     - Convert a single Gregorian date (JSON)

Additional endpoints:
  - GET  /health          - Health check
  - GET  /version         - Server version info
  - GET  /                - API documentation

Features:
  - CORS enabled for cross-origin requests
  - Graceful shutdown on SIGINT/SIGTERM
  - JSON error format with request IDs
  - Tracing and structured logging

Example usage:
  bsdate-server                           # Start on localhost:8080
  bsdate-server --host 0.0.0.0 --port 3000

  curl -X POST http://localhost:8080/api/v1/convert \
    -F "file=@dates.xlsx" -o BS_Date_converted.xlsx
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "BSDATE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "BSDATE_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
    };

    run_api_server(config).await
}
