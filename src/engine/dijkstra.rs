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


//! Shortest paths over a [`DirectedGraph`], parametric in the weight.
//!
//! The [`Router`] precomputes, for every source vertex, the distance and
//! predecessor edge of every reachable vertex; a path is then rebuilt in
//! O(path length). Ties between equal-weight paths are stable for a given
//! graph: relaxation only replaces an entry on a strict improvement, and
//! vertices are settled in ascending id order.

use std::ops::Add;

use super::graph::{DirectedGraph, EdgeId, VertexId};

/// What the engine needs from a weight: a zero, addition, and an order.
/// Weights are assumed non-negative.
pub trait GraphWeight: Copy + PartialOrd + Add<Output = Self> {
    fn zero() -> Self;
}

impl GraphWeight for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl GraphWeight for u64 {
    fn zero() -> Self {
        0
    }
}

#[derive(Debug, Clone, Copy)]
struct RouteInternal<W> {
    weight: W,
    prev_edge: Option<EdgeId>,
}

/// A reconstructed shortest path: its total weight and its edge sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo<W> {
    pub weight: W,
    pub edges: Vec<EdgeId>,
}

pub struct Router<W, T> {
    graph: DirectedGraph<W, T>,
    routes_internal: Vec<Vec<Option<RouteInternal<W>>>>,
}

impl<W: GraphWeight, T> Router<W, T> {
    pub fn new(graph: DirectedGraph<W, T>) -> Self {
        let routes_internal = (0..graph.vertex_count())
            .map(|source| shortest_paths_from(&graph, VertexId(source)))
            .collect();
        Self {
            graph,
            routes_internal,
        }
    }

    pub fn graph(&self) -> &DirectedGraph<W, T> {
        &self.graph
    }

    /// `None` when `to` is unreachable from `from`.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo<W>> {
        let table = &self.routes_internal[from.0];
        let weight = table[to.0]?.weight;
        let mut edges = Vec::new();
        let mut cursor = to;
        while cursor != from {
            let edge_id = table[cursor.0]?.prev_edge?;
            edges.push(edge_id);
            cursor = self.graph.edge(edge_id).from;
        }
        edges.reverse();
        Some(RouteInfo { weight, edges })
    }
}

fn shortest_paths_from<W: GraphWeight, T>(
    graph: &DirectedGraph<W, T>,
    source: VertexId,
) -> Vec<Option<RouteInternal<W>>> {
    let vertex_count = graph.vertex_count();
    let mut table: Vec<Option<RouteInternal<W>>> = vec![None; vertex_count];
    let mut visited = vec![false; vertex_count];
    table[source.0] = Some(RouteInternal {
        weight: W::zero(),
        prev_edge: None,
    });
    loop {
        let mut current: Option<(usize, W)> = None;
        for vertex in 0..vertex_count {
            if visited[vertex] {
                continue;
            }
            if let Some(entry) = table[vertex] {
                let closer = match current {
                    None => true,
                    Some((_, weight)) => entry.weight < weight,
                };
                if closer {
                    current = Some((vertex, entry.weight));
                }
            }
        }
        let (vertex, weight) = match current {
            Some(current) => current,
            None => break,
        };
        visited[vertex] = true;
        for &edge_id in graph.incident_edges(VertexId(vertex)) {
            let edge = graph.edge(edge_id);
            let candidate = weight + edge.weight;
            let improves = match table[edge.to.0] {
                None => true,
                Some(entry) => candidate < entry.weight,
            };
            if improves {
                table[edge.to.0] = Some(RouteInternal {
                    weight: candidate,
                    prev_edge: Some(edge_id),
                });
            }
        }
    }
    table
}
