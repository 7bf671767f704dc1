use ledgerbank_bank::Bank;

fn main() -> anyhow::Result<()> {
    ledgerbank_observability::init("warn");

    let config = ledgerbank_cli::config::from_env();
    tracing::info!(
        "starting with branch {}, overdraft limit {}, max withdrawals {}",
        config.branch_code,
        config.checking.overdraft_limit,
        config.checking.max_withdrawals
    );

    let mut bank = Bank::new(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    ledgerbank_cli::run(&mut bank, stdin.lock(), stdout.lock())
}
