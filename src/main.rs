use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = ynab_ledger::args::parse();
    ynab_ledger::cli::main(args)
}
