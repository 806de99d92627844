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


use std::collections::{BTreeSet, HashMap};
use std::fmt;

use typed_index_collection::{CollectionWithId, Id, Idx};

use crate::geometry::{self, Coord};

/// A named point of the network. Identity is the name.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: String,
    pub coord: Coord,
}

impl Id<Stop> for Stop {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Traversed in listed order; the first and last listed stop are
    /// typically the terminus.
    Circular,
    /// Traversed from first to last, then back.
    Linear,
}

/// A bus route: an ordered sequence of stops and a traversal kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub id: String,
    pub kind: RouteKind,
    pub stops: Vec<Idx<Stop>>,
}

impl Id<Bus> for Bus {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Bus {
    /// The full stop sequence actually driven: linear routes go there
    /// and back, circular routes follow the listed order.
    pub fn traversal(&self) -> Vec<Idx<Stop>> {
        match self.kind {
            RouteKind::Circular => self.stops.clone(),
            RouteKind::Linear => {
                let mut full = self.stops.clone();
                full.extend(self.stops.iter().rev().skip(1));
                full
            }
        }
    }
}

/// Statistics of one route, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStats {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Sum of road distances along the full traversal, in meters.
    pub route_length: u64,
    /// road length / geometric length.
    pub curvature: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    DuplicateName(String),
    UnknownStop(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateName(name) => write!(f, "the name `{}` is already used", name),
            Error::UnknownStop(name) => write!(f, "the stop `{}` does not exist", name),
        }
    }
}

impl std::error::Error for Error {}

/// The sealed, append-only network description: stops, buses, directed
/// road distances, and the stop to buses index.
///
/// Stops and buses live in [`CollectionWithId`] containers, so every
/// [`Idx`] handed out stays valid for the life of the catalogue and
/// iteration follows insertion order.
#[derive(Debug, Default)]
pub struct Catalogue {
    stops: CollectionWithId<Stop>,
    buses: CollectionWithId<Bus>,
    road_distances: HashMap<(Idx<Stop>, Idx<Stop>), u32>,
    buses_at_stop: HashMap<Idx<Stop>, BTreeSet<Idx<Bus>>>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stop(&mut self, name: &str, coord: Coord) -> Result<Idx<Stop>, Error> {
        if self.stops.get(name).is_some() {
            return Err(Error::DuplicateName(name.to_string()));
        }
        let stop = Stop {
            id: name.to_string(),
            coord,
        };
        self.stops
            .push(stop)
            .map_err(|_| Error::DuplicateName(name.to_string()))
    }

    /// Records the directed road distance `from -> to`, in meters.
    pub fn set_road_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<(), Error> {
        let from_idx = self
            .stop_idx(from)
            .ok_or_else(|| Error::UnknownStop(from.to_string()))?;
        let to_idx = self
            .stop_idx(to)
            .ok_or_else(|| Error::UnknownStop(to.to_string()))?;
        self.road_distances.insert((from_idx, to_idx), meters);
        Ok(())
    }

    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        kind: RouteKind,
    ) -> Result<Idx<Bus>, Error> {
        if self.buses.get(name).is_some() {
            return Err(Error::DuplicateName(name.to_string()));
        }
        let mut stops = Vec::with_capacity(stop_names.len());
        for stop_name in stop_names {
            let stop_name = stop_name.as_ref();
            let stop_idx = self
                .stop_idx(stop_name)
                .ok_or_else(|| Error::UnknownStop(stop_name.to_string()))?;
            stops.push(stop_idx);
        }
        let bus = Bus {
            id: name.to_string(),
            kind,
            stops: stops.clone(),
        };
        let bus_idx = self
            .buses
            .push(bus)
            .map_err(|_| Error::DuplicateName(name.to_string()))?;
        for stop_idx in stops {
            self.buses_at_stop.entry(stop_idx).or_default().insert(bus_idx);
        }
        Ok(bus_idx)
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.buses.get(name)
    }

    pub fn stop_idx(&self, name: &str) -> Option<Idx<Stop>> {
        self.stops.get_idx(name)
    }

    pub fn stops(&self) -> &CollectionWithId<Stop> {
        &self.stops
    }

    pub fn buses(&self) -> &CollectionWithId<Bus> {
        &self.buses
    }

    /// Directed lookup with a fallback on the reverse direction when the
    /// requested one was never set. `None` means there is no roadway.
    pub fn road_distance(&self, from: Idx<Stop>, to: Idx<Stop>) -> Option<u32> {
        self.road_distances
            .get(&(from, to))
            .or_else(|| self.road_distances.get(&(to, from)))
            .copied()
    }

    /// All recorded directed distances, in unspecified order.
    pub fn road_distances(&self) -> impl Iterator<Item = (Idx<Stop>, Idx<Stop>, u32)> + '_ {
        self.road_distances
            .iter()
            .map(|((from, to), meters)| (*from, *to, *meters))
    }

    pub fn is_served(&self, stop: Idx<Stop>) -> bool {
        self.buses_at_stop
            .get(&stop)
            .map_or(false, |buses| !buses.is_empty())
    }

    /// Names of the buses passing through the stop, sorted.
    /// Empty when the stop has no buses or does not exist.
    pub fn stop_info(&self, name: &str) -> Vec<&str> {
        let stop_idx = match self.stop_idx(name) {
            Some(stop_idx) => stop_idx,
            None => return Vec::new(),
        };
        let mut names: Vec<&str> = self
            .buses_at_stop
            .get(&stop_idx)
            .into_iter()
            .flatten()
            .map(|bus_idx| self.buses[*bus_idx].id.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Route statistics, or `None` when the bus is unknown or the route
    /// is degenerate (fewer than two stops, or zero geometric length).
    pub fn route_stats(&self, bus_name: &str) -> Option<RouteStats> {
        let bus = self.find_bus(bus_name)?;
        if bus.stops.len() < 2 {
            return None;
        }
        let traversal = bus.traversal();
        let unique_stops: BTreeSet<Idx<Stop>> = bus.stops.iter().copied().collect();
        let mut geo_length = 0.0;
        let mut road_length: u64 = 0;
        for pair in traversal.windows(2) {
            let from = &self.stops[pair[0]];
            let to = &self.stops[pair[1]];
            geo_length += geometry::distance_coord_to_coord(&from.coord, &to.coord);
            road_length += u64::from(self.road_distance(pair[0], pair[1]).unwrap_or(0));
        }
        if geo_length <= 0.0 {
            return None;
        }
        Some(RouteStats {
            stop_count: traversal.len(),
            unique_stop_count: unique_stops.len(),
            route_length: road_length,
            curvature: road_length as f64 / geo_length,
        })
    }
}
