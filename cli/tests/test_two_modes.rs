// Copyright  (C) 2020, Kisio Digital and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
// the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
// powered by Kisio Digital (www.kisio.com).
// Help us simplify mobility and open public transport:
// a non ending quest to the responsive locomotion way of traveling!
//
// This contribution is a part of the research and development work of the
// IVA Project which aims to enhance traveler information and is carried out
// under the leadership of the Technological Research Institute SystemX,
// with the partnership and support of the transport organization authority
// Ile-De-France Mobilités (IDFM), SNCF, and public funds
// under the scope of the French Program "Investissements d’Avenir".
//
// LICENCE: This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// channel `#navitia` on riot https://riot.im/app/#/room/#navitia:matrix.org
// https://groups.google.com/d/forum/navitia
// www.navitia.io

use std::io::Write;
use std::process::{Command, Stdio};

fn run_with_stdin(mode: &str, input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_munin"))
        .arg(mode)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn the binary");
    child
        .stdin
        .as_mut()
        .expect("piped stdin")
        .write_all(input.as_bytes())
        .expect("failed to write the input document");
    child.wait_with_output().expect("failed to wait for the binary")
}

#[test]
fn make_base_then_process_requests() {
    let working_dir = tempfile::tempdir().unwrap();
    let snapshot_path = working_dir.path().join("network.snapshot");
    let snapshot_path = snapshot_path.to_str().unwrap();

    let base = format!(
        r#"{{
            "base_requests": [
                {{ "type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.6,
                   "road_distances": {{ "B": 2000 }} }},
                {{ "type": "Stop", "name": "B", "latitude": 55.7, "longitude": 37.7 }},
                {{ "type": "Bus", "name": "99", "stops": ["A", "B", "A"], "is_roundtrip": true }}
            ],
            "routing_settings": {{ "bus_wait_time": 6, "bus_velocity": 36 }},
            "serialization_settings": {{ "file": "{}" }}
        }}"#,
        snapshot_path
    );
    let output = run_with_stdin("make_base", &base);
    assert!(
        output.status.success(),
        "make_base failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(std::path::Path::new(snapshot_path).exists());

    let stat = format!(
        r#"{{
            "serialization_settings": {{ "file": "{}" }},
            "stat_requests": [
                {{ "id": 1, "type": "Bus", "name": "99" }},
                {{ "id": 2, "type": "Route", "from": "A", "to": "B" }}
            ]
        }}"#,
        snapshot_path
    );
    let output = run_with_stdin("process_requests", &stat);
    assert!(
        output.status.success(),
        "process_requests failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"route_length\": 4000"));
    assert!(stdout.contains("\"total_time\""));
}

#[test]
fn bad_usage_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_munin"))
        .arg("frobnicate")
        .output()
        .expect("failed to run the binary");
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}

#[test]
fn malformed_input_exits_nonzero() {
    let output = run_with_stdin("make_base", "this is not json");
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
