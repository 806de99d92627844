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


use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::catalogue::{self, Catalogue, RouteKind};
use crate::config::{RenderSettings, RoutingSettings, SerializationSettings};
use crate::geometry::Coord;
use crate::handler::StatRequest;

/// One record of the `base_requests` array.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRecord),
    Bus(BusRecord),
}

#[derive(Debug, Deserialize)]
pub struct StopRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Directed distances from this stop, in meters.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

#[derive(Debug, Deserialize)]
pub struct BusRecord {
    pub name: String,
    pub stops: Vec<String>,
    /// `true` means a circular route; `false` a there-and-back one.
    pub is_roundtrip: bool,
}

/// The document consumed by `make_base`.
#[derive(Debug, Deserialize)]
pub struct BaseDocument {
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub render_settings: RenderSettings,
    #[serde(default)]
    pub routing_settings: RoutingSettings,
    pub serialization_settings: SerializationSettings,
}

/// The document consumed by `process_requests`.
#[derive(Debug, Deserialize)]
pub struct StatDocument {
    pub serialization_settings: SerializationSettings,
    #[serde(default, deserialize_with = "nullable_requests")]
    pub stat_requests: Vec<StatRequest>,
}

// `stat_requests` may be absent or null; both mean "no requests".
fn nullable_requests<'de, D>(deserializer: D) -> Result<Vec<StatRequest>, D::Error>
where
    D: Deserializer<'de>,
{
    let requests = Option::<Vec<StatRequest>>::deserialize(deserializer)?;
    Ok(requests.unwrap_or_default())
}

pub fn read_base_document<R: io::Read>(reader: R) -> Result<BaseDocument, serde_json::Error> {
    serde_json::from_reader(reader)
}

pub fn read_stat_document<R: io::Read>(reader: R) -> Result<StatDocument, serde_json::Error> {
    serde_json::from_reader(reader)
}

/// Populates a catalogue from the base records: every stop first, then
/// the road distances, then the buses, so records may reference stops
/// declared later in the document.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<Catalogue, catalogue::Error> {
    let mut catalogue = Catalogue::new();
    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            catalogue.add_stop(
                &stop.name,
                Coord {
                    lat: stop.latitude,
                    lng: stop.longitude,
                },
            )?;
        }
    }
    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            for (neighbor, meters) in &stop.road_distances {
                catalogue.set_road_distance(&stop.name, neighbor, *meters)?;
            }
        }
    }
    for request in requests {
        if let BaseRequest::Bus(bus) = request {
            let kind = if bus.is_roundtrip {
                RouteKind::Circular
            } else {
                RouteKind::Linear
            };
            catalogue.add_bus(&bus.name, &bus.stops, kind)?;
        }
    }
    info!(
        "Catalogue built with {} stops and {} buses",
        catalogue.stops().len(),
        catalogue.buses().len()
    );
    Ok(catalogue)
}
