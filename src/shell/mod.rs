//! Shell Module
//!
//! Line-oriented command shell driving a store from any async reader.
//!
//! # Commands
//! - `SET`, `SETEX` - Store a value, optionally with a TTL
//! - `GET`, `EXISTS`, `TTL` - Inspect a key
//! - `DEL`, `CLEAR` - Remove keys
//! - `COUNT`, `ACTIVE`, `STATS` - Store size and read statistics

mod command;
mod handlers;
mod reply;

pub use command::{parse_command, Command, CommandError};
pub use handlers::execute;
pub use reply::{Reply, HELP_TEXT};

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::store::{ConcurrentMap, Entry, ExpiringStore};

/// Reads commands line by line and writes one reply per command.
///
/// Blank lines are skipped. Returns when the input ends or a `QUIT` command
/// is read, with the number of commands executed.
pub async fn run_shell<M, R, W>(
    store: &ExpiringStore<M>,
    reader: R,
    mut writer: W,
) -> std::io::Result<usize>
where
    M: ConcurrentMap<Entry>,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut executed = 0;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match parse_command(&line) {
            Ok(command) => {
                debug!("Executing {:?}", command);
                executed += 1;
                execute(store, command)
            }
            Err(err) => {
                warn!("Rejected input: {}", err);
                Reply::from(err)
            }
        };

        writer.write_all(format!("{}\n", reply).as_bytes()).await?;
        writer.flush().await?;

        if matches!(reply, Reply::Bye) {
            break;
        }
    }

    Ok(executed)
}

/// Runs the shell until its input ends or `shutdown` resolves.
///
/// Returns the number of commands executed, or None when `shutdown` won.
/// The shell future is dropped in that case; a read already handed to a
/// blocking thread is left behind and must not be awaited by the caller.
pub async fn run_until_shutdown<M, R, W, S>(
    store: &ExpiringStore<M>,
    reader: R,
    writer: W,
    shutdown: S,
) -> std::io::Result<Option<usize>>
where
    M: ConcurrentMap<Entry>,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    tokio::select! {
        result = run_shell(store, reader, writer) => {
            let executed = result?;
            info!("Input closed after {} commands", executed);
            Ok(Some(executed))
        }
        _ = shutdown => {
            info!("Shell interrupted");
            Ok(None)
        }
    }
}
