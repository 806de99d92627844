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


//! Append-only directed weighted graph.
//!
//! Edges live in a single array; each vertex keeps the list of its
//! outgoing edge ids, in insertion order. Edges carry a weight plus a
//! caller-chosen payload, so the graph stays generic while the transit
//! layer can hang its own labels on every edge.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W, T> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
    pub payload: T,
}

#[derive(Debug, Clone)]
pub struct DirectedGraph<W, T> {
    edges: Vec<Edge<W, T>>,
    incidence_lists: Vec<Vec<EdgeId>>,
}

impl<W, T> DirectedGraph<W, T> {
    /// A graph over a fixed vertex id space `0..vertex_count`.
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence_lists: vec![Vec::new(); vertex_count],
        }
    }

    pub fn add_edge(&mut self, edge: Edge<W, T>) -> EdgeId {
        let edge_id = EdgeId(self.edges.len());
        self.incidence_lists[edge.from.0].push(edge_id);
        self.edges.push(edge);
        edge_id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence_lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, edge_id: EdgeId) -> &Edge<W, T> {
        &self.edges[edge_id.0]
    }

    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence_lists[vertex.0]
    }
}
