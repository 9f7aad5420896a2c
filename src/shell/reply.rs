//! Shell Replies
//!
//! Defines what the shell prints back for each command.

use std::fmt;
use std::time::Duration;

use crate::shell::CommandError;
use crate::store::StatsSnapshot;

pub const HELP_TEXT: &str = "\
SET key value...            store a value that never expires
SETEX key seconds value...  store a value with a TTL
GET key                     read a live value
EXISTS key                  1 if the key is present, expired or not
DEL key                     remove a key
TTL key                     remaining seconds, -1 if the key never expires
CLEAR                       remove every key
COUNT                       number of keys present
ACTIVE                      number of keys not expired
STATS                       read statistics as JSON
QUIT                        leave the shell";

// == Reply ==
/// Result of running one command.
#[derive(Debug, Clone)]
pub enum Reply {
    Ok,
    Value(String),
    Nil,
    Expired,
    Integer(i64),
    Stats(StatsSnapshot),
    Help,
    Error(String),
    Bye,
}

impl Reply {
    /// Converts a remaining TTL into the integer the shell prints.
    ///
    /// Whole seconds rounded up, so a live key never reports 0.
    pub fn ttl(remaining: Option<Duration>) -> Self {
        match remaining {
            Some(remaining) => {
                let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
                Reply::Integer(i64::try_from(secs).unwrap_or(i64::MAX))
            }
            None => Reply::Integer(-1),
        }
    }

    pub fn count(n: usize) -> Self {
        Reply::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<CommandError> for Reply {
    fn from(err: CommandError) -> Self {
        Reply::Error(err.to_string())
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => write!(f, "OK"),
            Reply::Value(value) => write!(f, "{:?}", value),
            Reply::Nil => write!(f, "(nil)"),
            Reply::Expired => write!(f, "(expired)"),
            Reply::Integer(n) => write!(f, "(integer) {}", n),
            Reply::Stats(stats) => match serde_json::to_string_pretty(stats) {
                Ok(json) => write!(f, "{}", json),
                Err(err) => write!(f, "(error) {}", err),
            },
            Reply::Help => write!(f, "{}", HELP_TEXT),
            Reply::Error(msg) => write!(f, "(error) {}", msg),
            Reply::Bye => write!(f, "bye"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreStats;

    #[test]
    fn test_display_simple_replies() {
        assert_eq!(Reply::Ok.to_string(), "OK");
        assert_eq!(Reply::Value("elephant".to_string()).to_string(), "\"elephant\"");
        assert_eq!(Reply::Nil.to_string(), "(nil)");
        assert_eq!(Reply::Expired.to_string(), "(expired)");
        assert_eq!(Reply::Integer(3).to_string(), "(integer) 3");
        assert_eq!(Reply::Bye.to_string(), "bye");
    }

    #[test]
    fn test_display_value_escapes_quotes() {
        let reply = Reply::Value(r#"say "hi" \ bye"#.to_string());
        assert_eq!(reply.to_string(), r#""say \"hi\" \\ bye""#);
    }

    #[test]
    fn test_display_error() {
        let reply = Reply::from(CommandError::Unknown("FLY".to_string()));
        assert_eq!(reply.to_string(), "(error) unknown command 'FLY'");
    }

    #[test]
    fn test_display_stats_is_json() {
        let reply = Reply::Stats(StoreStats::new().snapshot(2, 1));
        let json: serde_json::Value = serde_json::from_str(&reply.to_string()).unwrap();

        assert_eq!(json["total_entries"], 2);
        assert_eq!(json["active_entries"], 1);
    }

    #[test]
    fn test_ttl_reply() {
        assert!(matches!(Reply::ttl(None), Reply::Integer(-1)));
        assert!(matches!(
            Reply::ttl(Some(Duration::from_millis(9_400))),
            Reply::Integer(10)
        ));
        assert!(matches!(
            Reply::ttl(Some(Duration::from_secs(5))),
            Reply::Integer(5)
        ));
    }
}
