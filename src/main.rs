use anyhow::{bail, Context};

use pkgrun::args::parse_args;
use pkgrun::config::Config;
use pkgrun::help::render_help;
use pkgrun::logging::{init_tracing, report_warnings};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::load().context("Failed to load configuration")?;
    let registry = config.registry();

    // std::env::args() carries a single platform token, the program path.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = parse_args(&args, &registry);
    report_warnings(&parsed.warnings, parsed.has_option("quiet"));

    if parsed.has_option("help") {
        print!("{}", render_help(&registry));
        return Ok(());
    }
    if parsed.has_option("version") {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if parsed.command.is_empty() {
        bail!("missing command (see `pkgrun --help`)");
    }

    tracing::info!(
        command = %parsed.command,
        package = %parsed.package,
        package_requested = parsed.package_requested,
        "resolved launch plan"
    );

    let plan = serde_json::to_string(&parsed).context("Failed to serialize launch plan")?;
    println!("{}", plan);
    Ok(())
}
