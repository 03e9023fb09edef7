use tabled::Table;

use crate::{info, spotify, types::DeviceTableRow, warning};

use super::{require_token, spinner};

/// Lists the user's available playback devices.
pub async fn list_devices() {
    let token = require_token().await;

    let pb = spinner("Fetching devices...");
    let devices = match spotify::player::get_devices(&token).await {
        Ok(devices) => devices,
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to fetch devices: {}", e);
            return;
        }
    };
    pb.finish_and_clear();

    if devices.is_empty() {
        info!("No devices available. Open Spotify somewhere first.");
        return;
    }

    let rows: Vec<DeviceTableRow> = devices
        .into_iter()
        .map(|d| DeviceTableRow {
            name: d.name,
            kind: d.kind,
            active: if d.is_active {
                "yes".to_string()
            } else {
                "-".to_string()
            },
            id: d.id.unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
