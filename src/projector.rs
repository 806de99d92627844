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


use crate::geometry::Coord;
use crate::svg::Point;

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Maps geographic coordinates onto the canvas with a uniform zoom and a
/// padding margin. North is up: the y axis is inverted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphereProjector {
    padding: f64,
    min_lon: f64,
    max_lat: f64,
    zoom_coeff: f64,
}

impl SphereProjector {
    pub fn new<I>(points: I, width: f64, height: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut points = points.into_iter();
        let first = match points.next() {
            Some(coord) => coord,
            None => {
                return Self {
                    padding,
                    ..Self::default()
                }
            }
        };
        let mut min_lon = first.lng;
        let mut max_lon = first.lng;
        let mut min_lat = first.lat;
        let mut max_lat = first.lat;
        for coord in points {
            min_lon = min_lon.min(coord.lng);
            max_lon = max_lon.max(coord.lng);
            min_lat = min_lat.min(coord.lat);
            max_lat = max_lat.max(coord.lat);
        }

        let width_zoom = if is_zero(max_lon - min_lon) {
            None
        } else {
            Some((width - 2.0 * padding) / (max_lon - min_lon))
        };
        let height_zoom = if is_zero(max_lat - min_lat) {
            None
        } else {
            Some((height - 2.0 * padding) / (max_lat - min_lat))
        };
        let zoom_coeff = match (width_zoom, height_zoom) {
            (Some(width_zoom), Some(height_zoom)) => width_zoom.min(height_zoom),
            (Some(width_zoom), None) => width_zoom,
            (None, Some(height_zoom)) => height_zoom,
            (None, None) => 0.0,
        };

        Self {
            padding,
            min_lon,
            max_lat,
            zoom_coeff,
        }
    }

    pub fn project(&self, coord: &Coord) -> Point {
        Point {
            x: (coord.lng - self.min_lon) * self.zoom_coeff + self.padding,
            y: (self.max_lat - coord.lat) * self.zoom_coeff + self.padding,
        }
    }
}
