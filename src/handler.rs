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


use std::io;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalogue::Catalogue;
use crate::config::RenderSettings;
use crate::renderer::MapRenderer;
use crate::response::JourneyItem;
use crate::solver::Solver;

const NOT_FOUND: &str = "not found";

/// One entry of the `stat_requests` array.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Stop { id: i64, name: String },
    Bus { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

/// Answers stat requests against a sealed catalogue.
///
/// Responses are produced in request order, each echoing the request id.
/// A miss on an individual query never aborts: it answers with
/// `error_message = "not found"`.
pub struct RequestHandler<'a> {
    catalogue: &'a Catalogue,
    renderer: MapRenderer<'a>,
    solver: &'a Solver<'a>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(
        catalogue: &'a Catalogue,
        render_settings: &'a RenderSettings,
        solver: &'a Solver<'a>,
    ) -> Self {
        Self {
            catalogue,
            renderer: MapRenderer::new(render_settings),
            solver,
        }
    }

    pub fn handle_all(&self, requests: &[StatRequest]) -> Vec<Value> {
        requests.iter().map(|request| self.handle(request)).collect()
    }

    pub fn handle(&self, request: &StatRequest) -> Value {
        match request {
            StatRequest::Stop { id, name } => self.stop_response(*id, name),
            StatRequest::Bus { id, name } => self.bus_response(*id, name),
            StatRequest::Map { id } => self.map_response(*id),
            StatRequest::Route { id, from, to } => self.route_response(*id, from, to),
        }
    }

    fn stop_response(&self, id: i64, name: &str) -> Value {
        if self.catalogue.find_stop(name).is_none() {
            return not_found(id);
        }
        json!({
            "request_id": id,
            "buses": self.catalogue.stop_info(name),
        })
    }

    fn bus_response(&self, id: i64, name: &str) -> Value {
        match self.catalogue.route_stats(name) {
            None => not_found(id),
            Some(stats) => json!({
                "request_id": id,
                "stop_count": stats.stop_count,
                "unique_stop_count": stats.unique_stop_count,
                "route_length": stats.route_length,
                "curvature": stats.curvature,
            }),
        }
    }

    fn map_response(&self, id: i64) -> Value {
        json!({
            "request_id": id,
            "map": self.renderer.render(self.catalogue),
        })
    }

    fn route_response(&self, id: i64, from: &str, to: &str) -> Value {
        match self.solver.find_journey(from, to) {
            None => not_found(id),
            Some(journey) => {
                let items: Vec<Value> = journey.items.iter().map(journey_item_value).collect();
                json!({
                    "request_id": id,
                    "total_time": journey.total_time,
                    "items": items,
                })
            }
        }
    }
}

fn journey_item_value(item: &JourneyItem) -> Value {
    match item {
        JourneyItem::Wait { stop_name, time } => json!({
            "type": "Wait",
            "stop_name": stop_name,
            "time": time,
        }),
        JourneyItem::Ride {
            bus,
            time,
            span_count,
        } => json!({
            "type": "Bus",
            "bus": bus,
            "time": time,
            "span_count": span_count,
        }),
    }
}

fn not_found(id: i64) -> Value {
    json!({
        "request_id": id,
        "error_message": NOT_FOUND,
    })
}

/// Pretty-prints the response array. Object keys come out sorted, since
/// the values are built over sorted maps.
pub fn write_responses<W: io::Write>(writer: W, responses: &[Value]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, responses)
}
