use bank_ledger::app::{init_tracing, parse_args, run_command};
use bank_ledger::prelude::*;

#[tokio::main]
async fn main() {
    let args = parse_args();
    init_tracing();

    let config = args.to_config();
    let command = args.command;

    let code = CliApp::new("bank-ledger")
        .run(|mut writer| async move {
            let backend = JsonFileBackend::new(config.data_path());
            let store = LedgerStore::<FixedPoint, _>::open(backend).await?;
            run_command(&store, command, &mut writer).await?;
            Ok::<_, AppError>(writer)
        })
        .await;

    std::process::exit(code);
}
