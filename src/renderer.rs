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


use typed_index_collection::Idx;

use crate::catalogue::{Bus, Catalogue, RouteKind, Stop};
use crate::config::RenderSettings;
use crate::projector::SphereProjector;
use crate::svg::{self, Color, PathPropsExt, Point, StrokeLineCap, StrokeLineJoin};

/// Draws the whole network as a layered SVG document.
///
/// The layer order, and the sort order inside each layer, are part of
/// the output contract: route polylines, then route name labels, then
/// stop circles, then stop name labels. Buses are drawn in ascending
/// name order and colored by cycling through the palette; stops are
/// drawn in ascending name order and only when a bus serves them.
pub struct MapRenderer<'a> {
    settings: &'a RenderSettings,
}

impl<'a> MapRenderer<'a> {
    pub fn new(settings: &'a RenderSettings) -> Self {
        Self { settings }
    }

    pub fn render(&self, catalogue: &Catalogue) -> String {
        let buses = sorted_drawable_buses(catalogue);

        let mut geo_coords = Vec::new();
        for bus_idx in &buses {
            for stop_idx in catalogue.buses()[*bus_idx].traversal() {
                geo_coords.push(catalogue.stops()[stop_idx].coord);
            }
        }
        let projector = SphereProjector::new(
            geo_coords,
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let stops = sorted_served_stops(catalogue);

        let mut document = svg::Document::new();
        self.draw_route_lines(catalogue, &buses, &projector, &mut document);
        self.draw_bus_labels(catalogue, &buses, &projector, &mut document);
        self.draw_stop_circles(catalogue, &stops, &projector, &mut document);
        self.draw_stop_labels(catalogue, &stops, &projector, &mut document);
        document.render()
    }

    fn route_color(&self, position: usize) -> Color {
        let palette = &self.settings.color_palette;
        if palette.is_empty() {
            return Color::None;
        }
        palette[position % palette.len()].clone()
    }

    fn draw_route_lines(
        &self,
        catalogue: &Catalogue,
        buses: &[Idx<Bus>],
        projector: &SphereProjector,
        document: &mut svg::Document,
    ) {
        for (position, bus_idx) in buses.iter().enumerate() {
            let mut polyline = svg::Polyline::default();
            for stop_idx in catalogue.buses()[*bus_idx].traversal() {
                polyline = polyline.point(projector.project(&catalogue.stops()[stop_idx].coord));
            }
            polyline = polyline
                .fill(Color::None)
                .stroke(self.route_color(position))
                .stroke_width(self.settings.line_width)
                .stroke_line_cap(StrokeLineCap::Round)
                .stroke_line_join(StrokeLineJoin::Round);
            document.add(polyline);
        }
    }

    fn draw_bus_labels(
        &self,
        catalogue: &Catalogue,
        buses: &[Idx<Bus>],
        projector: &SphereProjector,
        document: &mut svg::Document,
    ) {
        for (position, bus_idx) in buses.iter().enumerate() {
            let bus = &catalogue.buses()[*bus_idx];
            let first = bus.stops[0];
            let mut label_stops = vec![first];
            let last = bus.stops[bus.stops.len() - 1];
            if bus.kind == RouteKind::Linear && first != last {
                label_stops.push(last);
            }
            for stop_idx in label_stops {
                let at = projector.project(&catalogue.stops()[stop_idx].coord);
                let base = svg::Text::default()
                    .position(at)
                    .offset(Point::new(
                        self.settings.bus_label_offset.0,
                        self.settings.bus_label_offset.1,
                    ))
                    .font_size(self.settings.bus_label_font_size)
                    .font_family("Verdana")
                    .font_weight("bold")
                    .content(&bus.id);
                document.add(self.label_underlayer(base.clone()));
                document.add(base.fill(self.route_color(position)));
            }
        }
    }

    fn draw_stop_circles(
        &self,
        catalogue: &Catalogue,
        stops: &[Idx<Stop>],
        projector: &SphereProjector,
        document: &mut svg::Document,
    ) {
        for stop_idx in stops {
            let circle = svg::Circle::default()
                .center(projector.project(&catalogue.stops()[*stop_idx].coord))
                .radius(self.settings.stop_radius)
                .fill(Color::Named("white".to_string()));
            document.add(circle);
        }
    }

    fn draw_stop_labels(
        &self,
        catalogue: &Catalogue,
        stops: &[Idx<Stop>],
        projector: &SphereProjector,
        document: &mut svg::Document,
    ) {
        for stop_idx in stops {
            let stop = &catalogue.stops()[*stop_idx];
            let base = svg::Text::default()
                .position(projector.project(&stop.coord))
                .offset(Point::new(
                    self.settings.stop_label_offset.0,
                    self.settings.stop_label_offset.1,
                ))
                .font_size(self.settings.stop_label_font_size)
                .font_family("Verdana")
                .content(&stop.id);
            document.add(self.label_underlayer(base.clone()));
            document.add(base.fill(Color::Named("black".to_string())));
        }
    }

    fn label_underlayer(&self, text: svg::Text) -> svg::Text {
        text.fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .stroke_line_cap(StrokeLineCap::Round)
            .stroke_line_join(StrokeLineJoin::Round)
    }
}

/// Non-empty buses, in ascending name order.
fn sorted_drawable_buses(catalogue: &Catalogue) -> Vec<Idx<Bus>> {
    let mut buses: Vec<Idx<Bus>> = catalogue
        .buses()
        .iter()
        .filter(|(_, bus)| !bus.stops.is_empty())
        .map(|(bus_idx, _)| bus_idx)
        .collect();
    buses.sort_by(|left, right| catalogue.buses()[*left].id.cmp(&catalogue.buses()[*right].id));
    buses
}

/// Stops served by at least one bus, in ascending name order.
fn sorted_served_stops(catalogue: &Catalogue) -> Vec<Idx<Stop>> {
    let mut stops: Vec<Idx<Stop>> = catalogue
        .stops()
        .iter()
        .filter(|(stop_idx, _)| catalogue.is_served(*stop_idx))
        .map(|(stop_idx, _)| stop_idx)
        .collect();
    stops.sort_by(|left, right| catalogue.stops()[*left].id.cmp(&catalogue.stops()[*right].id));
    stops
}
