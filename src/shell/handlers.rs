//! Shell Handlers
//!
//! Runs parsed commands against a store.

use crate::error::StoreError;
use crate::shell::{Command, Reply};
use crate::store::{ConcurrentMap, Entry, ExpiringStore};

/// Executes one command and returns the reply to print.
pub fn execute<M: ConcurrentMap<Entry>>(store: &ExpiringStore<M>, command: Command) -> Reply {
    match command {
        Command::Set { key, value } => {
            store.write(key, value);
            Reply::Ok
        }
        Command::SetEx {
            key,
            ttl_seconds,
            value,
        } => {
            store.write_with_expiration(key, value, ttl_seconds);
            Reply::Ok
        }
        Command::Get { key } => match store.read(&key) {
            Ok(value) => Reply::Value(value),
            Err(StoreError::NotFound(_)) => Reply::Nil,
            Err(StoreError::Expired(_)) => Reply::Expired,
        },
        Command::Exists { key } => Reply::Integer(i64::from(store.exists(&key))),
        Command::Del { key } => Reply::Integer(i64::from(store.remove(&key))),
        Command::Ttl { key } => match store.ttl(&key) {
            Ok(remaining) => Reply::ttl(remaining),
            Err(StoreError::NotFound(_)) => Reply::Nil,
            Err(StoreError::Expired(_)) => Reply::Expired,
        },
        Command::Clear => {
            store.clear();
            Reply::Ok
        }
        Command::Count => Reply::count(store.count_all()),
        Command::Active => Reply::count(store.count_active()),
        Command::Stats => Reply::Stats(store.stats()),
        Command::Help => Reply::Help,
        Command::Quit => Reply::Bye,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::parse_command;

    fn run(store: &ExpiringStore, line: &str) -> String {
        let command = parse_command(line).unwrap();
        execute(store, command).to_string()
    }

    #[test]
    fn test_set_then_get() {
        let store = ExpiringStore::new();

        assert_eq!(run(&store, "SET animal1 elephant"), "OK");
        assert_eq!(run(&store, "GET animal1"), "\"elephant\"");
        assert_eq!(run(&store, "GET animal2"), "(nil)");
    }

    #[test]
    fn test_expired_key_is_reported_but_present() {
        let store = ExpiringStore::new();

        run(&store, "SETEX a 0 x");
        assert_eq!(run(&store, "GET a"), "(expired)");
        assert_eq!(run(&store, "TTL a"), "(expired)");
        assert_eq!(run(&store, "EXISTS a"), "(integer) 1");
        assert_eq!(run(&store, "COUNT"), "(integer) 1");
        assert_eq!(run(&store, "ACTIVE"), "(integer) 0");
    }

    #[test]
    fn test_ttl_replies() {
        let store = ExpiringStore::new();

        run(&store, "SET forever v");
        run(&store, "SETEX soon 30 v");

        assert_eq!(run(&store, "TTL forever"), "(integer) -1");
        assert_eq!(run(&store, "TTL soon"), "(integer) 30");
        assert_eq!(run(&store, "TTL missing"), "(nil)");
    }

    #[test]
    fn test_del_and_clear() {
        let store = ExpiringStore::new();

        run(&store, "SET a 1");
        run(&store, "SET b 2");
        assert_eq!(run(&store, "DEL a"), "(integer) 1");
        assert_eq!(run(&store, "DEL a"), "(integer) 0");
        assert_eq!(run(&store, "CLEAR"), "OK");
        assert_eq!(run(&store, "COUNT"), "(integer) 0");
    }

    #[test]
    fn test_stats_reply() {
        let store = ExpiringStore::new();

        run(&store, "SET a 1");
        run(&store, "GET a");
        run(&store, "GET b");

        let json: serde_json::Value = serde_json::from_str(&run(&store, "STATS")).unwrap();
        assert_eq!(json["hits"], 1);
        assert_eq!(json["misses"], 1);
    }

    #[test]
    fn test_quit_and_help() {
        let store = ExpiringStore::new();

        assert_eq!(run(&store, "QUIT"), "bye");
        assert!(run(&store, "HELP").contains("SETEX"));
    }
}
