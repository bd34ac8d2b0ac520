use super::cstr;
use crate::schema::BedjetClimateConfig;

/// Setup statements for a `platform: bedjet` climate block, mirroring
/// the order the firmware expects: instantiation, component and climate
/// registration, transport binding, then the device setters.
pub fn climate_to_code(cfg: &BedjetClimateConfig, id: &str) -> Vec<String> {
    let mut stmts = vec![
        format!("auto *{id} = new bedjet::Bedjet();"),
        format!(
            "{id}->set_update_interval({});",
            cfg.update_interval.as_millis()
        ),
        format!("App.register_component({id});"),
        format!("{id}->set_name({});", cstr(&cfg.name)),
    ];
    if let Some(visual) = &cfg.visual {
        stmts.push(format!(
            "{id}->set_visual_min_temperature_override({:?});",
            visual.min_temperature
        ));
        stmts.push(format!(
            "{id}->set_visual_max_temperature_override({:?});",
            visual.max_temperature
        ));
        stmts.push(format!(
            "{id}->set_visual_temperature_step_override({:?});",
            visual.temperature_step
        ));
    }
    stmts.push(format!("App.register_climate({id});"));

    if cfg.ble_client_id.is_some() {
        // Compat layer: the direct BLE-node binding no longer registers
        // anything; the accessory is expected to move behind a hub.
        log::warn!(
            "'ble_client_id' on a bedjet climate is deprecated; \
             bind through a bedjet hub with 'bedjet_id' instead"
        );
    } else if let Some(hub_id) = &cfg.bedjet_id {
        stmts.push(format!("{hub_id}->register_child({id});"));
    }

    stmts.push(format!(
        "{id}->set_heating_mode({});",
        cfg.heat_mode.cpp_constant()
    ));
    if let Some(time_id) = &cfg.time_id {
        stmts.push(format!("{id}->set_time_id({time_id});"));
    }
    stmts.push(format!(
        "{id}->set_status_timeout({});",
        cfg.receive_timeout.as_millis()
    ));
    stmts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climate(raw: &str) -> BedjetClimateConfig {
        serde_yaml::from_str(raw).unwrap()
    }

    fn code(raw: &str) -> Vec<String> {
        climate_to_code(&climate(raw), "bj")
    }

    #[test]
    fn test_default_block_statements() {
        let stmts = code("name: My BedJet");
        assert_eq!(
            stmts,
            vec![
                "auto *bj = new bedjet::Bedjet();",
                "bj->set_update_interval(30000);",
                "App.register_component(bj);",
                "bj->set_name(\"My BedJet\");",
                "App.register_climate(bj);",
                "bj->set_heating_mode(bedjet::HEAT_MODE_HEAT);",
                "bj->set_status_timeout(0);",
            ]
        );
    }

    #[test]
    fn test_time_id_emits_exactly_one_setter() {
        let with_time = code("name: bj\ntime_id: sntp_time");
        let setters: Vec<_> = with_time
            .iter()
            .filter(|s| s.contains("set_time_id"))
            .collect();
        assert_eq!(setters, vec!["bj->set_time_id(sntp_time);"]);

        let without_time = code("name: bj");
        assert!(!without_time.iter().any(|s| s.contains("set_time_id")));
    }

    #[test]
    fn test_positive_timeout_distinguished_from_zero() {
        let zero = code("name: bj\nreceive_timeout: 0s");
        let positive = code("name: bj\nreceive_timeout: 5s");
        assert!(zero.contains(&"bj->set_status_timeout(0);".to_string()));
        assert!(positive.contains(&"bj->set_status_timeout(5000);".to_string()));
    }

    #[test]
    fn test_extended_heat_mode_constant() {
        let stmts = code("name: bj\nheat_mode: Extended");
        assert!(stmts.contains(&"bj->set_heating_mode(bedjet::HEAT_MODE_EXTENDED);".to_string()));
    }

    #[test]
    fn test_hub_binding_registers_child() {
        let stmts = code("name: bj\nbedjet_id: hub_a");
        assert!(stmts.contains(&"hub_a->register_child(bj);".to_string()));
    }

    #[test]
    fn test_deprecated_ble_client_binding_emits_nothing() {
        let stmts = code("name: bj\nble_client_id: ble_a");
        assert!(!stmts.iter().any(|s| s.contains("ble_a")));
    }

    #[test]
    fn test_visual_overrides_emitted() {
        let stmts = code("name: bj\nvisual:\n  min_temperature: 20.0\n  max_temperature: 40.0");
        assert!(stmts.contains(&"bj->set_visual_min_temperature_override(20.0);".to_string()));
        assert!(stmts.contains(&"bj->set_visual_max_temperature_override(40.0);".to_string()));
        assert!(stmts.contains(&"bj->set_visual_temperature_step_override(1.0);".to_string()));
    }
}
