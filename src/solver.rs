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

use tracing::info;
use typed_index_collection::Idx;

use crate::catalogue::{Bus, Catalogue, RouteKind, Stop};
use crate::config::RoutingSettings;
use crate::engine::dijkstra::Router;
use crate::engine::graph::{DirectedGraph, Edge, VertexId};
use crate::response::{Journey, JourneyItem};

fn travel_time_minutes(meters: u32, velocity_km_per_h: f64) -> f64 {
    let meters_per_minute = velocity_km_per_h * 1000.0 / 60.0;
    f64::from(meters) / meters_per_minute
}

#[derive(Debug, Clone, PartialEq)]
enum EdgeLabel {
    Wait { stop: Idx<Stop> },
    Ride { bus: Idx<Bus>, span_count: usize },
}

/// Journey planning over a time-expanded graph.
///
/// Every stop reached by a bus owns two vertices: an even *waiting*
/// vertex and the next odd *boarded* vertex. The single edge between
/// them carries the wait time, so a journey is charged the waiting
/// penalty exactly once per boarding. Ride edges connect a boarded
/// vertex to the waiting vertex of every stop reachable downstream on
/// the same route, with the accumulated travel time as weight.
///
/// The graph and the shortest-path tables are built once, at
/// construction; queries only read.
pub struct Solver<'model> {
    catalogue: &'model Catalogue,
    router: Router<f64, EdgeLabel>,
    stop_vertices: HashMap<Idx<Stop>, VertexId>,
}

impl<'model> Solver<'model> {
    pub fn new(catalogue: &'model Catalogue, settings: RoutingSettings) -> Self {
        let mut builder = GraphBuilder {
            catalogue,
            settings,
            graph: DirectedGraph::with_vertex_count(2 * catalogue.stops().len()),
            stop_vertices: HashMap::new(),
        };
        for (bus_idx, bus) in catalogue.buses().iter() {
            match bus.kind {
                RouteKind::Circular => builder.add_one_direction(bus_idx, &bus.stops),
                RouteKind::Linear => {
                    builder.add_one_direction(bus_idx, &bus.stops);
                    let reversed: Vec<Idx<Stop>> = bus.stops.iter().rev().copied().collect();
                    builder.add_one_direction(bus_idx, &reversed);
                }
            }
        }
        info!(
            "Routing graph built with {} vertices and {} edges",
            builder.graph.vertex_count(),
            builder.graph.edge_count()
        );
        let router = Router::new(builder.graph);
        Self {
            catalogue,
            router,
            stop_vertices: builder.stop_vertices,
        }
    }

    /// The fastest journey between two stops, or `None` when either stop
    /// is unknown to the routing graph or no connection exists.
    pub fn find_journey(&self, from: &str, to: &str) -> Option<Journey> {
        let from_idx = self.catalogue.stop_idx(from)?;
        let to_idx = self.catalogue.stop_idx(to)?;
        let from_vertex = *self.stop_vertices.get(&from_idx)?;
        let to_vertex = *self.stop_vertices.get(&to_idx)?;
        let route = self.router.build_route(from_vertex, to_vertex)?;

        let graph = self.router.graph();
        let mut items = Vec::with_capacity(route.edges.len());
        for edge_id in &route.edges {
            let edge = graph.edge(*edge_id);
            match &edge.payload {
                EdgeLabel::Wait { stop } => items.push(JourneyItem::Wait {
                    stop_name: self.catalogue.stops()[*stop].id.clone(),
                    time: edge.weight,
                }),
                EdgeLabel::Ride { bus, span_count } => items.push(JourneyItem::Ride {
                    bus: self.catalogue.buses()[*bus].id.clone(),
                    time: edge.weight,
                    span_count: *span_count,
                }),
            }
        }
        Some(Journey {
            total_time: route.weight,
            items,
        })
    }
}

struct GraphBuilder<'model> {
    catalogue: &'model Catalogue,
    settings: RoutingSettings,
    graph: DirectedGraph<f64, EdgeLabel>,
    stop_vertices: HashMap<Idx<Stop>, VertexId>,
}

impl GraphBuilder<'_> {
    /// The waiting vertex of the stop, assigning the next even/odd pair
    /// and the boarding edge on first sight.
    fn waiting_vertex(&mut self, stop: Idx<Stop>) -> VertexId {
        if let Some(vertex) = self.stop_vertices.get(&stop) {
            return *vertex;
        }
        let waiting = VertexId(2 * self.stop_vertices.len());
        let boarded = VertexId(waiting.0 + 1);
        self.stop_vertices.insert(stop, waiting);
        self.graph.add_edge(Edge {
            from: waiting,
            to: boarded,
            weight: self.settings.bus_wait_time,
            payload: EdgeLabel::Wait { stop },
        });
        waiting
    }

    /// One directed pass over a stop sequence: for every starting stop,
    /// ride edges to every later stop, with accumulated travel time.
    /// A segment without any road distance ends the walk; every farther
    /// ride would cross the same gap.
    fn add_one_direction(&mut self, bus: Idx<Bus>, stops: &[Idx<Stop>]) {
        for &stop in stops {
            self.waiting_vertex(stop);
        }
        for start in 0..stops.len().saturating_sub(1) {
            let boarded = VertexId(self.waiting_vertex(stops[start]).0 + 1);
            let mut time = 0.0;
            for next in start + 1..stops.len() {
                let meters = match self.catalogue.road_distance(stops[next - 1], stops[next]) {
                    Some(meters) => meters,
                    None => break,
                };
                time += travel_time_minutes(meters, self.settings.bus_velocity);
                let target = self.waiting_vertex(stops[next]);
                self.graph.add_edge(Edge {
                    from: boarded,
                    to: target,
                    weight: time,
                    payload: EdgeLabel::Ride {
                        bus,
                        span_count: next - start,
                    },
                });
            }
        }
    }
}
