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


use serde_json::{json, Value};

use munin::{handler, read, snapshot, RequestHandler, Solver};

fn base_document(snapshot_path: &str) -> String {
    json!({
        "base_requests": [
            {
                "type": "Bus",
                "name": "99",
                "stops": ["A", "B", "A"],
                "is_roundtrip": true
            },
            {
                "type": "Stop",
                "name": "A",
                "latitude": 55.6,
                "longitude": 37.6,
                "road_distances": { "B": 2000 }
            },
            {
                "type": "Stop",
                "name": "B",
                "latitude": 55.7,
                "longitude": 37.7
            },
            {
                "type": "Stop",
                "name": "Quiet",
                "latitude": 55.65,
                "longitude": 37.65
            }
        ],
        "render_settings": {
            "width": 200,
            "height": 200,
            "padding": 10,
            "line_width": 14,
            "stop_radius": 5,
            "bus_label_font_size": 20,
            "bus_label_offset": [7, 15],
            "stop_label_font_size": 20,
            "stop_label_offset": [7, -3],
            "underlayer_color": [255, 255, 255, 0.85],
            "underlayer_width": 3,
            "color_palette": ["green", [255, 160, 0], "red"]
        },
        "routing_settings": { "bus_wait_time": 6, "bus_velocity": 36 },
        "serialization_settings": { "file": snapshot_path }
    })
    .to_string()
}

fn stat_document(snapshot_path: &str) -> String {
    json!({
        "serialization_settings": { "file": snapshot_path },
        "stat_requests": [
            { "id": 1, "type": "Bus", "name": "99" },
            { "id": 2, "type": "Bus", "name": "phantom" },
            { "id": 3, "type": "Stop", "name": "A" },
            { "id": 4, "type": "Stop", "name": "Quiet" },
            { "id": 5, "type": "Stop", "name": "Nowhere" },
            { "id": 6, "type": "Route", "from": "A", "to": "B" },
            { "id": 7, "type": "Route", "from": "A", "to": "Quiet" },
            { "id": 8, "type": "Map" }
        ]
    })
    .to_string()
}

fn answer(base: &str, stat: &str) -> Vec<Value> {
    let base_document = read::read_base_document(base.as_bytes()).unwrap();
    let catalogue = read::build_catalogue(&base_document.base_requests).unwrap();
    snapshot::save(
        &base_document.serialization_settings.file,
        &catalogue,
        &base_document.render_settings,
        &base_document.routing_settings,
    )
    .unwrap();

    let stat_document = read::read_stat_document(stat.as_bytes()).unwrap();
    let (catalogue, render_settings, routing_settings) =
        snapshot::load(&stat_document.serialization_settings.file).unwrap();
    let solver = Solver::new(&catalogue, routing_settings);
    let request_handler = RequestHandler::new(&catalogue, &render_settings, &solver);
    request_handler.handle_all(&stat_document.stat_requests)
}

#[test]
fn the_two_modes_compose() {
    let _log_guard = munin::logger::init_test_logger();

    let working_dir = tempfile::tempdir().unwrap();
    let path = working_dir.path().join("network.snapshot");
    let path = path.to_str().unwrap();

    let responses = answer(&base_document(path), &stat_document(path));
    assert_eq!(responses.len(), 8);

    // responses echo the request ids, in request order
    let ids: Vec<i64> = responses
        .iter()
        .map(|response| response["request_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

    assert_eq!(responses[0]["stop_count"], json!(3));
    assert_eq!(responses[0]["unique_stop_count"], json!(2));
    assert_eq!(responses[0]["route_length"], json!(4000));

    assert_eq!(responses[1]["error_message"], json!("not found"));

    assert_eq!(responses[2]["buses"], json!(["99"]));

    // the stop exists but no bus serves it
    assert_eq!(responses[3]["buses"], json!([]));

    assert_eq!(responses[4]["error_message"], json!("not found"));

    // wait 6 min, then ride one stop: 2000 m at 600 m/min
    let journey = &responses[5];
    assert!((journey["total_time"].as_f64().unwrap() - (6.0 + 2000.0 / 600.0)).abs() < 1e-9);
    let items = journey["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["type"], json!("Wait"));
    assert_eq!(items[0]["stop_name"], json!("A"));
    assert_eq!(items[1]["type"], json!("Bus"));
    assert_eq!(items[1]["bus"], json!("99"));
    assert_eq!(items[1]["span_count"], json!(1));

    // no bus reaches Quiet
    assert_eq!(responses[6]["error_message"], json!("not found"));

    let map = responses[7]["map"].as_str().unwrap();
    assert!(map.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
    assert!(map.contains("<polyline"));
}

#[test]
fn responses_are_printed_pretty_with_sorted_keys() {
    let working_dir = tempfile::tempdir().unwrap();
    let path = working_dir.path().join("network.snapshot");
    let path = path.to_str().unwrap();

    let responses = answer(&base_document(path), &stat_document(path));

    let mut buffer = Vec::new();
    handler::write_responses(&mut buffer, &responses).unwrap();
    let printed = String::from_utf8(buffer).unwrap();

    assert!(printed.starts_with("[\n"));
    let curvature = printed.find("\"curvature\"").unwrap();
    let request_id = printed.find("\"request_id\"").unwrap();
    assert!(curvature < request_id, "keys are not sorted:\n{}", printed);
}

#[test]
fn null_stat_requests_mean_no_requests() {
    let working_dir = tempfile::tempdir().unwrap();
    let path = working_dir.path().join("network.snapshot");
    let path = path.to_str().unwrap();

    let stat = json!({
        "serialization_settings": { "file": path },
        "stat_requests": null
    })
    .to_string();

    let responses = answer(&base_document(path), &stat);
    assert!(responses.is_empty());

    let mut buffer = Vec::new();
    handler::write_responses(&mut buffer, &responses).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "[]");
}

#[test]
fn integrity_failures_abort_the_build() {
    let bad_base = json!({
        "base_requests": [
            {
                "type": "Bus",
                "name": "1",
                "stops": ["Ghost"],
                "is_roundtrip": false
            }
        ],
        "serialization_settings": { "file": "unused" }
    })
    .to_string();

    let document = read::read_base_document(bad_base.as_bytes()).unwrap();
    assert!(read::build_catalogue(&document.base_requests).is_err());
}
