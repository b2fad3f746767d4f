use crate::config::ListFormat;
use crate::core::Result;
use crate::transaction::{CommandLog, Transaction, TransactionId};
use serde::Serialize;

#[derive(Serialize)]
struct ListedTransaction<'a> {
    index: usize,
    id: TransactionId,
    commands: &'a [CommandLog],
}

/// Render committed transactions, numbered from 1 in commit order
pub fn render(committed: &[Transaction], format: ListFormat) -> Result<Vec<String>> {
    match format {
        ListFormat::Text => Ok(committed
            .iter()
            .enumerate()
            .map(|(i, txn)| format!("transaction #{} commands: {}", i + 1, render_log(txn.commands())))
            .collect()),
        ListFormat::Json => {
            let listed: Vec<ListedTransaction> = committed
                .iter()
                .enumerate()
                .map(|(i, txn)| ListedTransaction {
                    index: i + 1,
                    id: txn.id(),
                    commands: txn.commands(),
                })
                .collect();
            Ok(vec![serde_json::to_string(&listed)?])
        }
    }
}

fn render_log(commands: &[CommandLog]) -> String {
    let entries: Vec<String> = commands.iter().map(ToString::to_string).collect();
    format!("[{}]", entries.join(" "))
}
