// src/metadata.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metadata block attached to every output document

use chrono::{DateTime, Local, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Environment variables consulted for the operator name, in order
const USER_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

const UNKNOWN_USER: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub generated_at: GeneratedAt,
    pub records: RecordsInfo,
    pub user: String,
    pub random_seed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAt {
    pub local: LocalStamp,
    /// UTC, RFC 3339 with a `+00:00` offset
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalStamp {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsInfo {
    /// Only set for partitioned output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<IndexRange>,
    pub number_of_records: usize,
}

/// Inclusive 0-based bounds of a slice within the full population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl Metadata {
    /// Capture metadata now, for the invoking user
    pub fn new(number_of_records: usize, random_seed: u64, index: Option<IndexRange>) -> Self {
        Self::at(Local::now(), current_user(), number_of_records, random_seed, index)
    }

    pub fn at(
        generated_at: DateTime<Local>,
        user: String,
        number_of_records: usize,
        random_seed: u64,
        index: Option<IndexRange>,
    ) -> Self {
        Self {
            generated_at: GeneratedAt::from_local(generated_at),
            records: RecordsInfo {
                index,
                number_of_records,
            },
            user,
            random_seed,
        }
    }

    /// Pretty-printed JSON with a 4-space indent, for operator output
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| {
            GenError::io(
                "<metadata>",
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }
}

impl GeneratedAt {
    fn from_local(now: DateTime<Local>) -> Self {
        // Sub-second digits are dropped on whole seconds
        let whole_second = now.nanosecond() / 1_000 == 0;
        let time = if whole_second {
            now.format("%H:%M:%S").to_string()
        } else {
            now.format("%H:%M:%S%.6f").to_string()
        };
        let seconds_format = if whole_second {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };

        Self {
            local: LocalStamp {
                date: now.format("%Y-%m-%d").to_string(),
                time,
            },
            timestamp: now
                .with_timezone(&Utc)
                .to_rfc3339_opts(seconds_format, false),
        }
    }
}

/// Name of the invoking OS user
///
/// Environment variables are consulted first, then the password database.
/// Records `"unknown"` only when both come up empty.
pub fn current_user() -> String {
    user_from(|var| std::env::var(var).ok(), passwd_user).unwrap_or_else(|| {
        tracing::warn!(
            "No user name found in {:?} or the password database, recording '{}'",
            USER_VARS,
            UNKNOWN_USER
        );
        UNKNOWN_USER.to_string()
    })
}

fn user_from(
    lookup: impl Fn(&str) -> Option<String>,
    fallback: impl FnOnce() -> Option<String>,
) -> Option<String> {
    USER_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.is_empty())
        .or_else(|| fallback().filter(|value| !value.is_empty()))
}

/// Login name of the current uid from the password database
#[cfg(unix)]
fn passwd_user() -> Option<String> {
    use std::ffi::CStr;

    const MAX_BUF: usize = 1 << 16;

    // SAFETY: getuid has no preconditions and cannot fail
    let uid = unsafe { libc::getuid() };
    let mut buf: Vec<libc::c_char> = vec![0; 1024];

    loop {
        // SAFETY: an all-zero passwd is a valid value for getpwuid_r to fill
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        // SAFETY: every pointer refers to live, correctly sized storage owned here
        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
        };

        if rc == libc::ERANGE && buf.len() < MAX_BUF {
            let grown = buf.len() * 2;
            buf.resize(grown, 0);
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
            tracing::debug!("No password entry for uid {} (rc={})", uid, rc);
            return None;
        }

        // SAFETY: pw_name points into `buf` and is NUL-terminated on success
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

#[cfg(not(unix))]
fn passwd_user() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time(micros: u32) -> DateTime<Local> {
        let utc = Utc
            .with_ymd_and_hms(2024, 3, 9, 17, 4, 5)
            .unwrap()
            .with_nanosecond(micros * 1_000)
            .unwrap();
        utc.with_timezone(&Local)
    }

    #[test]
    fn test_timestamp_formats() {
        let meta = Metadata::at(fixed_time(123_456), "ops".into(), 10, 42, None);
        assert_eq!(
            meta.generated_at.timestamp,
            "2024-03-09T17:04:05.123456+00:00"
        );
        assert!(meta.generated_at.local.time.ends_with(":05.123456"));
        assert_eq!(meta.generated_at.local.date.len(), 10);

        let whole = Metadata::at(fixed_time(0), "ops".into(), 10, 42, None);
        assert_eq!(whole.generated_at.timestamp, "2024-03-09T17:04:05+00:00");
        assert!(whole.generated_at.local.time.ends_with(":05"));
    }

    #[test]
    fn test_single_file_shape() {
        let meta = Metadata::at(fixed_time(1), "ops".into(), 5, 1, None);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["records"], serde_json::json!({"number_of_records": 5}));
        assert_eq!(json["random_seed"], 1);
        assert_eq!(json["user"], "ops");
        assert!(json["generated_at"]["local"]["date"].is_string());
    }

    #[test]
    fn test_partition_shape_and_key_order() {
        let meta = Metadata::at(
            fixed_time(1),
            "ops".into(),
            10,
            42,
            Some(IndexRange { start: 10, end: 19 }),
        );
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            json["records"],
            serde_json::json!({"index": {"start": 10, "end": 19}, "number_of_records": 10})
        );

        let text = serde_json::to_string(&meta).unwrap();
        let order = ["generated_at", "records", "user", "random_seed"]
            .map(|key| text.find(&format!("\"{}\"", key)).unwrap());
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        let meta = Metadata::at(fixed_time(1), "ops".into(), 3, 7, None);
        let pretty = meta.to_pretty_json().unwrap();
        assert!(pretty.contains("\n    \"generated_at\": {\n        \"local\""));
        let parsed: Metadata = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, meta);
    }

    #[test]
    fn test_user_lookup_order() {
        let env = |var: &str| match var {
            "USER" => Some("alice".to_string()),
            "USERNAME" => Some("bob".to_string()),
            "LOGNAME" => Some(String::new()),
            _ => None,
        };
        assert_eq!(
            user_from(env, || Some("passwd".to_string())).as_deref(),
            Some("alice")
        );
    }

    #[test]
    fn test_user_falls_back_to_password_database() {
        let unset = |_: &str| None;
        assert_eq!(
            user_from(unset, || Some("root".to_string())).as_deref(),
            Some("root")
        );
        // Empty env values do not shadow the fallback
        assert_eq!(
            user_from(|_| Some(String::new()), || Some("root".to_string())).as_deref(),
            Some("root")
        );
        assert_eq!(user_from(unset, || Some(String::new())), None);
        assert_eq!(user_from(unset, || None), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_password_database_lookup() {
        // Any entry found for the running uid is a real, non-empty login name
        if let Some(name) = passwd_user() {
            assert!(!name.is_empty());
            assert!(!name.contains('\0'));
        }
    }
}
