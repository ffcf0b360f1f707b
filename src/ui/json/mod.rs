//! NDJSON output for `--json`.
//!
//! ```ignore
//! use crate::ui::json::{emit_event, events::*};
//!
//! emit_event(&StartEvent::new("compile"))?;
//! emit_event(&CompleteEvent::success("compile"))?;
//! ```

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes a raw JSON value to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::*;

    #[test]
    fn typed_event_is_one_json_line() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &StartEvent::new("compile")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));
        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["event"], "start");
        assert_eq!(parsed["command"], "compile");
    }

    #[test]
    fn data_event_flattens_payload() {
        let mut buffer = Vec::new();
        let payload = serde_json::json!({ "id": "base", "desc": null });

        write_typed_event(&mut buffer, &DataEvent::new("list", payload)).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_slice(buffer.strip_suffix(b"\n").unwrap()).unwrap();
        assert_eq!(parsed["event"], "data");
        assert_eq!(parsed["id"], "base");
    }

    #[test]
    fn events_are_ndjson() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &StartEvent::new("doctor")).unwrap();
        write_event(&mut buffer, &serde_json::json!({ "event": "custom" })).unwrap();
        write_typed_event(&mut buffer, &CompleteEvent::failure("doctor")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert!(serde_json::from_str::<serde_json::Value>(line).is_ok());
        }
    }
}
