use anyhow::Result;

fn main() -> Result<()> {
    parlor::cli::run_cli()
}
