#![allow(dead_code)]
// Not every payload is used by every test crate; hence the suppression

pub const VALID_PAYLOAD_1: &str = r#"
time:
  - platform: sntp
    id: sntp_time
ble_client:
  - id: ble_bedroom
    mac_address: "aa:bb:cc:dd:ee:f1"
bedjet:
  - id: bedjet_hub
    ble_client_id: ble_bedroom
    receive_timeout: 10s
climate:
  - platform: bedjet
    id: master_bedjet
    name: "Master BedJet"
    bedjet_id: bedjet_hub
    heat_mode: extended
    time_id: sntp_time
    receive_timeout: 5s
    update_interval: 1min
    visual:
      min_temperature: 20.0
      max_temperature: 40.0
"#;

// Minimal config: every optional key left to its default, ids generated
pub const VALID_PAYLOAD_MINIMAL: &str = r#"
climate:
  - platform: bedjet
    name: "BedJet"
"#;

// heat_mode outside {heat, extended}
pub const BAD_PAYLOAD_HEAT_MODE: &str = r#"
climate:
  - platform: bedjet
    name: "BedJet"
    heat_mode: turbo
"#;

// Both transport bindings set on the same climate entry
pub const BAD_PAYLOAD_BOTH_TRANSPORTS: &str = r#"
ble_client:
  - id: ble_a
bedjet:
  - id: hub_a
    ble_client_id: ble_a
climate:
  - platform: bedjet
    name: "BedJet"
    ble_client_id: ble_a
    bedjet_id: hub_a
"#;

// bedjet_id points at an id that was never declared
pub const BAD_PAYLOAD_DANGLING_REF: &str = r#"
climate:
  - platform: bedjet
    name: "BedJet"
    bedjet_id: no_such_hub
"#;

// Not YAML a climate platform block would ever parse as
pub const BAD_PAYLOAD_SYNTAX: &str = "climate: [}";
