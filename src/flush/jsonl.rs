use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::EventLog;

/// Write an iterator of serializable items to a JSONL file (one JSON
/// object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush the destruction log to a JSONL file, one event per line in the
/// order the fights happened.
pub fn flush_events_to_jsonl(log: &EventLog, path: &Path) -> io::Result<()> {
    write_jsonl(path, log.destructions.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Destruction;

    #[test]
    fn one_event_per_line() {
        let mut log = EventLog::new();
        log.record(Destruction {
            round: 1,
            city: "a".to_string(),
            aliens: vec!["0".to_string(), "1".to_string()],
        });
        log.record(Destruction {
            round: 4,
            city: "b".to_string(),
            aliens: vec!["2".to_string(), "3".to_string(), "4".to_string()],
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        flush_events_to_jsonl(&log, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Destruction = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, log.destructions[0]);
        let second: Destruction = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.aliens.len(), 3);
    }
}
