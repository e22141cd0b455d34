use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use qscale::snapshot::{BackendProperties, Catalog, DeviceEntry, GateProperties, Nduv};

/// Illustrative roadmap table, in the raw column naming
const DEMO_ROADMAP: &str = "\
Year (Roadmap),Label,Year,Qubit counts,Expected Qubit Counts
2020,Falcon,2019,27,Executed
2020,Hummingbird,2020,65,Executed
2020,Eagle,2021,127,Forecast
2020,Osprey,2022,433,Forecast
2020,Condor,2023,\"1,121\",Forecast
2022,Falcon,2019,27,Executed
2022,Hummingbird,2020,65,Executed
2022,Eagle,2021,127,Executed
2022,Osprey,2022,433,Forecast
2022,Heron,2023,133,Forecast
2022,Condor,2023,\"1,121\",Forecast
2022,Flamingo,2024,\"1,386\",Forecast
2022,Kookaburra,2025,\"4,158\",Forecast
2025,Eagle,2021,127,Executed
2025,Osprey,2022,433,Executed
2025,Condor,2023,\"1,121\",Executed
2025,Heron,2024,156,Executed
2025,Nighthawk,2025,120,Forecast
2025,Nighthawk,2027,360,Forecast
2025,Nighthawk,2028,\"1,080\",Forecast
2025,Starling,2029,15K,Forecast
";

/// Per-generation calibration profile of the synthetic devices
struct EraProfile {
    qubits: usize,
    t1_us: f64,
    t2_ratio: f64,
    readout_error: f64,
    calibrated: &'static str,
}

fn era_profile(label: &str) -> EraProfile {
    if label.starts_with("Falcon") {
        EraProfile {
            qubits: 27,
            t1_us: 110.0,
            t2_ratio: 0.85,
            readout_error: 0.022,
            calibrated: "2021-09-14T08:12:44+00:00",
        }
    } else if label.starts_with("Eagle R1") {
        EraProfile {
            qubits: 127,
            t1_us: 95.0,
            t2_ratio: 0.80,
            readout_error: 0.031,
            calibrated: "2022-11-03T07:45:10+00:00",
        }
    } else if label.starts_with("Eagle R3") {
        EraProfile {
            qubits: 127,
            t1_us: 260.0,
            t2_ratio: 0.65,
            readout_error: 0.018,
            calibrated: "2023-12-01T06:30:00+00:00",
        }
    } else {
        EraProfile {
            qubits: 156,
            t1_us: 180.0,
            t2_ratio: 0.70,
            readout_error: 0.012,
            calibrated: "2024-10-22T05:00:00+00:00",
        }
    }
}

/// Generate synthetic snapshots for the built-in catalog and a roadmap table
pub fn run(dir: PathBuf) -> Result<()> {
    info!("qscale - Demo Data Generator");
    info!("============================");

    let snapshot_dir = dir.join("snapshots");
    fs::create_dir_all(&snapshot_dir)
        .with_context(|| format!("Failed to create {}", snapshot_dir.display()))?;

    let catalog = Catalog::ibm_eras();
    let mut device_index = 0usize;
    let mut total_qubits = 0usize;

    for generation in &catalog.generations {
        let profile = era_profile(&generation.label);
        for entry in &generation.devices {
            let properties = generate_device(entry, &profile, device_index);
            total_qubits += properties.qubits.len();
            device_index += 1;

            let path = snapshot_dir.join(entry.path());
            let json = properties
                .to_json()
                .with_context(|| format!("Failed to serialize {}", properties.backend_name))?;
            fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("  {} ({} qubits)", path.display(), properties.qubits.len());
        }
    }

    let roadmap_path = dir.join("database-quantum-qubits.csv");
    fs::write(&roadmap_path, DEMO_ROADMAP)
        .with_context(|| format!("Failed to write {}", roadmap_path.display()))?;

    let config_path = dir.join("qscale.toml");
    fs::write(&config_path, demo_config(&dir))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    info!("Demo data complete!");
    info!("  Devices: {}", device_index);
    info!("  Qubits: {}", total_qubits);
    println!("Demo data written to {}", dir.display());
    println!("  qscale extract --config {}", config_path.display());
    println!("  qscale plot --config {}", config_path.display());

    Ok(())
}

/// Deterministic legacy-properties document for one device
fn generate_device(entry: &DeviceEntry, profile: &EraProfile, device_index: usize) -> BackendProperties {
    let chip = entry
        .path()
        .trim_start_matches("props_")
        .trim_end_matches(".json");
    let mut properties = BackendProperties::new(&format!("ibm_{}", chip));
    properties.backend_version = Some("1.0.0".to_string());
    properties.last_update_date = Some(profile.calibrated.to_string());

    let seed = device_index as f64 * 1.7;
    for q in 0..profile.qubits {
        let x = q as f64 + seed;
        let t1 = profile.t1_us * (1.0 + 0.35 * (x * 0.731).sin());
        let t2 = t1 * profile.t2_ratio * (1.0 + 0.25 * (x * 1.137).cos());
        let readout = profile.readout_error * (1.0 + 0.6 * (x * 0.419).sin().abs());
        let frequency = 4.8 + 0.3 * (x * 0.271).sin();

        let mut entries = vec![
            Nduv::new("T1", "us", round_to(t1, 2)),
            Nduv::new("frequency", "GHz", round_to(frequency, 4)),
            Nduv::new("readout_error", "", round_to(readout, 5)),
            Nduv::new("readout_length", "ns", 1560.0),
        ];
        // Every 23rd qubit has no T2 characterization
        if q % 23 != 11 {
            entries.insert(1, Nduv::new("T2", "us", round_to(t2, 2)));
        }
        properties.qubits.push(entries);

        properties.gates.push(GateProperties {
            gate: "sx".to_string(),
            qubits: vec![q],
            parameters: vec![
                Nduv::new("gate_error", "", round_to(2.5e-4 * (1.0 + (x * 0.9).sin().abs()), 7)),
                Nduv::new("gate_length", "ns", 35.55),
            ],
            name: Some(format!("sx{}", q)),
        });
    }

    properties
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn demo_config(dir: &Path) -> String {
    format!(
        "[extract]\nsnapshot_dir = {:?}\noutput = {:?}\n\n[plot]\ninput = {:?}\nfigures_dir = {:?}\n",
        dir.join("snapshots").display().to_string(),
        dir.join("database-quantum-qiskit_ibm.csv").display().to_string(),
        dir.join("database-quantum-qubits.csv").display().to_string(),
        dir.join("figures").display().to_string(),
    )
}
