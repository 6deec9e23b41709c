//! Default payload shown when the visualizer first loads.
//!
//! A small character/scene document that exercises every leaf kind and the
//! depth cutoff. At the default cap it also runs into the node cap partway
//! through `props`; with a larger cap that list shows the sibling cutoff.

/// Default input text. Valid JSON with an object root.
pub const DEFAULT_INPUT: &str = r#"{
  "scene": {
    "id": "lantern-market",
    "title": "Lantern Market at Dusk",
    "mood": "expectant",
    "weather": { "sky": "amber haze", "wind": 0.3, "rain": false },
    "camera": {
      "lens": "35mm",
      "height": 1.6,
      "dolly": { "from": [0, 0, 4], "to": [0, 0.4, 2.5], "ease": "inOutSine" }
    },
    "beats": ["arrival", "barter", "pursuit", "escape"]
  },
  "characters": [
    {
      "name": "Mira Okonkwo-Hale",
      "role": "cartographer",
      "age": 34,
      "traits": ["patient", "stubborn", "curious"],
      "inventory": { "compass": { "brass": true, "needle": "north-ish" }, "coins": 12 },
      "companion": null
    },
    {
      "name": "Tobias Wren",
      "role": "lamplighter",
      "age": 61,
      "traits": ["wry", "tired"],
      "inventory": { "matches": 40, "ladder": true },
      "companion": "a one-eyed gull named Pickle"
    },
    {
      "name": "The Archivist",
      "role": "antagonist",
      "age": null,
      "traits": [],
      "inventory": {},
      "companion": null
    }
  ],
  "props": [
    "paper lanterns",
    "spice crates",
    "tide clock",
    "rope bridge",
    "brass scales",
    "chalk map",
    "kite frame",
    "salt barrel",
    "fishing net",
    "bell tower",
    "rusted key",
    "ledger"
  ],
  "version": 3,
  "draft": true
}
"#;
