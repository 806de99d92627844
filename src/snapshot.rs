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


use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use prost::Message;
use tracing::info;
use typed_index_collection::Idx;

use crate::catalogue::{self, Catalogue, RouteKind, Stop};
use crate::config::{RenderSettings, RoutingSettings};
use crate::geometry::Coord;
use crate::snapshot_proto as proto;
use crate::svg::Color;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Decode(prost::DecodeError),
    Encode(prost::EncodeError),
    Model(catalogue::Error),
    Corrupt(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(source) => write!(f, "snapshot file error: {}", source),
            Error::Decode(source) => write!(f, "malformed snapshot: {}", source),
            Error::Encode(source) => write!(f, "snapshot encoding error: {}", source),
            Error::Model(source) => write!(f, "inconsistent snapshot: {}", source),
            Error::Corrupt(message) => write!(f, "corrupt snapshot: {}", message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Decode(source) => Some(source),
            Error::Encode(source) => Some(source),
            Error::Model(source) => Some(source),
            Error::Corrupt(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io(source)
    }
}

impl From<prost::DecodeError> for Error {
    fn from(source: prost::DecodeError) -> Self {
        Error::Decode(source)
    }
}

impl From<prost::EncodeError> for Error {
    fn from(source: prost::EncodeError) -> Self {
        Error::Encode(source)
    }
}

impl From<catalogue::Error> for Error {
    fn from(source: catalogue::Error) -> Self {
        Error::Model(source)
    }
}

/// Writes the sealed catalogue and both settings blocks to `path`.
pub fn save(
    path: &Path,
    catalogue: &Catalogue,
    render_settings: &RenderSettings,
    routing_settings: &RoutingSettings,
) -> Result<(), Error> {
    let snapshot = proto::Snapshot {
        catalogue: Some(catalogue_to_proto(catalogue)),
        render_settings: Some(render_settings_to_proto(render_settings)),
        routing_settings: Some(proto::RoutingSettings {
            bus_wait_time: routing_settings.bus_wait_time,
            bus_velocity: routing_settings.bus_velocity,
        }),
    };
    let mut buffer = Vec::with_capacity(snapshot.encoded_len());
    snapshot.encode(&mut buffer)?;
    fs::write(path, buffer)?;
    info!("Snapshot written to {:?}", path);
    Ok(())
}

/// Reads a snapshot back. The catalogue is rebuilt through its own
/// validated operations, so an inconsistent file aborts with a
/// diagnostic instead of producing a broken model.
pub fn load(path: &Path) -> Result<(Catalogue, RenderSettings, RoutingSettings), Error> {
    let bytes = fs::read(path)?;
    let snapshot = proto::Snapshot::decode(bytes.as_slice())?;
    let proto_catalogue = snapshot
        .catalogue
        .ok_or_else(|| Error::Corrupt("missing catalogue section".to_string()))?;
    let catalogue = catalogue_from_proto(&proto_catalogue)?;
    let render_settings = snapshot
        .render_settings
        .map(|settings| render_settings_from_proto(&settings))
        .unwrap_or_default();
    let routing_settings = snapshot
        .routing_settings
        .map(|settings| RoutingSettings {
            bus_wait_time: settings.bus_wait_time,
            bus_velocity: settings.bus_velocity,
        })
        .unwrap_or_default();
    info!(
        "Snapshot loaded from {:?}: {} stops, {} buses",
        path,
        catalogue.stops().len(),
        catalogue.buses().len()
    );
    Ok((catalogue, render_settings, routing_settings))
}

fn catalogue_to_proto(catalogue: &Catalogue) -> proto::Catalogue {
    let stop_positions: HashMap<Idx<Stop>, u32> = catalogue
        .stops()
        .iter()
        .enumerate()
        .map(|(position, (stop_idx, _))| (stop_idx, position as u32))
        .collect();

    let stops = catalogue
        .stops()
        .values()
        .map(|stop| proto::Stop {
            name: stop.id.clone(),
            latitude: stop.coord.lat,
            longitude: stop.coord.lng,
        })
        .collect();

    let mut road_distances: Vec<proto::RoadDistance> = catalogue
        .road_distances()
        .map(|(from, to, meters)| proto::RoadDistance {
            from_stop: stop_positions[&from],
            to_stop: stop_positions[&to],
            meters,
        })
        .collect();
    // the distance table iterates in hash order; keep the file stable
    road_distances.sort_by_key(|road| (road.from_stop, road.to_stop));

    let buses = catalogue
        .buses()
        .values()
        .map(|bus| proto::Bus {
            name: bus.id.clone(),
            is_roundtrip: bus.kind == RouteKind::Circular,
            stops: bus.stops.iter().map(|stop_idx| stop_positions[stop_idx]).collect(),
        })
        .collect();

    proto::Catalogue {
        stops,
        road_distances,
        buses,
    }
}

fn catalogue_from_proto(proto_catalogue: &proto::Catalogue) -> Result<Catalogue, Error> {
    let mut catalogue = Catalogue::new();
    for stop in &proto_catalogue.stops {
        catalogue.add_stop(
            &stop.name,
            Coord {
                lat: stop.latitude,
                lng: stop.longitude,
            },
        )?;
    }
    for road in &proto_catalogue.road_distances {
        let from = stop_name(&proto_catalogue.stops, road.from_stop)?;
        let to = stop_name(&proto_catalogue.stops, road.to_stop)?;
        catalogue.set_road_distance(from, to, road.meters)?;
    }
    for bus in &proto_catalogue.buses {
        let stops = bus
            .stops
            .iter()
            .map(|&position| stop_name(&proto_catalogue.stops, position))
            .collect::<Result<Vec<&str>, Error>>()?;
        let kind = if bus.is_roundtrip {
            RouteKind::Circular
        } else {
            RouteKind::Linear
        };
        catalogue.add_bus(&bus.name, &stops, kind)?;
    }
    Ok(catalogue)
}

fn stop_name(stops: &[proto::Stop], position: u32) -> Result<&str, Error> {
    stops
        .get(position as usize)
        .map(|stop| stop.name.as_str())
        .ok_or_else(|| Error::Corrupt(format!("stop index {} out of range", position)))
}

fn render_settings_to_proto(settings: &RenderSettings) -> proto::RenderSettings {
    proto::RenderSettings {
        width: settings.width,
        height: settings.height,
        padding: settings.padding,
        line_width: settings.line_width,
        stop_radius: settings.stop_radius,
        bus_label_font_size: settings.bus_label_font_size,
        bus_label_offset: Some(point_to_proto(settings.bus_label_offset)),
        stop_label_font_size: settings.stop_label_font_size,
        stop_label_offset: Some(point_to_proto(settings.stop_label_offset)),
        underlayer_color: Some(color_to_proto(&settings.underlayer_color)),
        underlayer_width: settings.underlayer_width,
        color_palette: settings.color_palette.iter().map(color_to_proto).collect(),
    }
}

fn render_settings_from_proto(settings: &proto::RenderSettings) -> RenderSettings {
    RenderSettings {
        width: settings.width,
        height: settings.height,
        padding: settings.padding,
        line_width: settings.line_width,
        stop_radius: settings.stop_radius,
        bus_label_font_size: settings.bus_label_font_size,
        bus_label_offset: point_from_proto(&settings.bus_label_offset),
        stop_label_font_size: settings.stop_label_font_size,
        stop_label_offset: point_from_proto(&settings.stop_label_offset),
        underlayer_color: settings
            .underlayer_color
            .as_ref()
            .map(color_from_proto)
            .unwrap_or_default(),
        underlayer_width: settings.underlayer_width,
        color_palette: settings.color_palette.iter().map(color_from_proto).collect(),
    }
}

fn point_to_proto(point: (f64, f64)) -> proto::Point {
    proto::Point {
        x: point.0,
        y: point.1,
    }
}

fn point_from_proto(point: &Option<proto::Point>) -> (f64, f64) {
    point.as_ref().map_or((0.0, 0.0), |point| (point.x, point.y))
}

fn color_to_proto(color: &Color) -> proto::Color {
    let data = match color {
        Color::None => None,
        Color::Named(name) => Some(proto::color::Data::Name(name.clone())),
        Color::Rgb(red, green, blue) => Some(proto::color::Data::Rgb(proto::Rgb {
            red: u32::from(*red),
            green: u32::from(*green),
            blue: u32::from(*blue),
        })),
        Color::Rgba(red, green, blue, opacity) => Some(proto::color::Data::Rgba(proto::Rgba {
            red: u32::from(*red),
            green: u32::from(*green),
            blue: u32::from(*blue),
            opacity: *opacity,
        })),
    };
    proto::Color { data }
}

fn color_from_proto(color: &proto::Color) -> Color {
    match &color.data {
        None => Color::None,
        Some(proto::color::Data::Name(name)) => Color::Named(name.clone()),
        Some(proto::color::Data::Rgb(rgb)) => {
            Color::Rgb(rgb.red as u8, rgb.green as u8, rgb.blue as u8)
        }
        Some(proto::color::Data::Rgba(rgba)) => Color::Rgba(
            rgba.red as u8,
            rgba.green as u8,
            rgba.blue as u8,
            rgba.opacity,
        ),
    }
}
