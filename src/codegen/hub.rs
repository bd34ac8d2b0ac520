use crate::schema::BedjetHubConfig;

/// Setup statements for a `bedjet` hub block: instantiation, component
/// registration, attachment to its BLE transport, then setters for the
/// options that are present.
pub fn hub_to_code(hub: &BedjetHubConfig, id: &str) -> Vec<String> {
    let mut stmts = vec![
        format!("auto *{id} = new bedjet::BedJetHub();"),
        format!("App.register_component({id});"),
        format!("{}->register_ble_node({id});", hub.ble_client_id),
    ];
    if let Some(timeout) = &hub.receive_timeout {
        stmts.push(format!("{id}->set_status_timeout({});", timeout.as_millis()));
    }
    stmts
}
