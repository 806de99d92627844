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


use munin::catalogue::{Catalogue, RouteKind};
use munin::config::RoutingSettings;
use munin::geometry::Coord;

/// Builder used to easily create a [`Catalogue`] in tests.
pub struct CatalogueBuilder {
    catalogue: Catalogue,
}

impl Default for CatalogueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self {
            catalogue: Catalogue::new(),
        }
    }

    pub fn stop(mut self, name: &str, lat: f64, lng: f64) -> Self {
        self.catalogue
            .add_stop(name, Coord { lat, lng })
            .expect("duplicate stop in test fixture");
        self
    }

    pub fn road(mut self, from: &str, to: &str, meters: u32) -> Self {
        self.catalogue
            .set_road_distance(from, to, meters)
            .expect("unknown stop in test fixture");
        self
    }

    pub fn bus(mut self, name: &str, stops: &[&str], kind: RouteKind) -> Self {
        self.catalogue
            .add_bus(name, stops, kind)
            .expect("invalid bus in test fixture");
        self
    }

    pub fn build(self) -> Catalogue {
        self.catalogue
    }
}

pub fn routing_settings(bus_wait_time: f64, bus_velocity: f64) -> RoutingSettings {
    RoutingSettings {
        bus_wait_time,
        bus_velocity,
    }
}

pub fn assert_close(left: f64, right: f64) {
    assert!(
        (left - right).abs() < 1e-9,
        "expected {} to be close to {}",
        left,
        right
    );
}
