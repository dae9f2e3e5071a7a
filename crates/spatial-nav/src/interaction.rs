//! Structured interaction records.
//!
//! One record per navigation keypress and per programmatic scroll, written
//! to the `log` facade as a JSON line under the `interaction` target.

use serde::{Deserialize, Serialize};
use spatial_types::input::Direction;

/// Outcome of a navigation keypress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Movement {
    Moved {
        #[serde(rename = "originalElementType")]
        from: String,
        #[serde(rename = "destinationElementType")]
        to: String,
    },
    Unsuccessful(Unsuccessful),
}

/// Serializes as the bare string `"unsuccessful"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unsuccessful {
    Unsuccessful,
}

impl Movement {
    pub fn unsuccessful() -> Self {
        Self::Unsuccessful(Unsuccessful::Unsuccessful)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "eventType", rename_all = "lowercase")]
pub enum InteractionEvent {
    Keypress {
        key: String,
        direction: Direction,
        movement: Movement,
    },
    Scroll {
        #[serde(rename = "elementType")]
        element_type: String,
        direction: Direction,
    },
}

impl InteractionEvent {
    /// Emit the record. `detailed` raises it from `debug` to `info`.
    pub fn log(&self, detailed: bool) {
        let level = if detailed {
            log::Level::Info
        } else {
            log::Level::Debug
        };
        if !log::log_enabled!(target: "interaction", level) {
            return;
        }
        match serde_json::to_string(self) {
            Ok(line) => log::log!(target: "interaction", level, "{line}"),
            Err(e) => log::warn!("Failed to serialize interaction record: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypress_serializes_like_the_event_stream() {
        let e = InteractionEvent::Keypress {
            key: "arrowdown".into(),
            direction: Direction::Down,
            movement: Movement::Moved {
                from: "p".into(),
                to: "a".into(),
            },
        };
        let v: serde_json::Value = serde_json::to_value(&e).unwrap();
        assert_eq!(v["eventType"], "keypress");
        assert_eq!(v["direction"], "down");
        assert_eq!(v["movement"]["originalElementType"], "p");
        assert_eq!(v["movement"]["destinationElementType"], "a");
    }

    #[test]
    fn unsuccessful_is_a_bare_string() {
        let e = InteractionEvent::Keypress {
            key: "w".into(),
            direction: Direction::Up,
            movement: Movement::unsuccessful(),
        };
        let v: serde_json::Value = serde_json::to_value(&e).unwrap();
        assert_eq!(v["movement"], "unsuccessful");
    }

    #[test]
    fn scroll_record_parses_back() {
        let json = r#"{"eventType":"scroll","elementType":"div","direction":"up"}"#;
        let e: InteractionEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            e,
            InteractionEvent::Scroll {
                element_type: "div".into(),
                direction: Direction::Up,
            }
        );
    }

    #[test]
    fn log_without_logger_is_a_no_op() {
        InteractionEvent::Scroll {
            element_type: "html".into(),
            direction: Direction::Down,
        }
        .log(true);
    }
}
